//! Wallet repository: reads, and the single balance-mutation path.
//!
//! `lock_wallet_for_user` + `apply_delta` together form the persistence
//! half of the Balance Engine: callers lock the wallet row inside their
//! database transaction, validate against the locked balance, and apply
//! the signed delta before committing. No other code writes
//! `wallets.balance`.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

use fintrack_core::ledger;
use fintrack_shared::AppError;

use crate::entities::wallets;

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Wallet not found or not owned by the requesting user.
    #[error("Wallet not found.")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::NotFound => Self::NotFound("Wallet not found.".to_string()),
            WalletError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Locks the user's wallet row (`SELECT ... FOR UPDATE`) for the duration
/// of the surrounding database transaction.
///
/// Serializes concurrent balance-mutating requests per wallet so the
/// funds check never races against a stale read.
pub(crate) async fn lock_wallet_for_user(
    txn: &DatabaseTransaction,
    user_id: Uuid,
) -> Result<Option<wallets::Model>, DbErr> {
    wallets::Entity::find()
        .filter(wallets::Column::UserId.eq(user_id))
        .lock_exclusive()
        .one(txn)
        .await
}

/// Applies a signed delta to a locked wallet and persists the new balance.
///
/// The wallet model must come from `lock_wallet_for_user` within the same
/// transaction.
pub(crate) async fn apply_delta(
    txn: &DatabaseTransaction,
    wallet: wallets::Model,
    delta: Decimal,
) -> Result<wallets::Model, DbErr> {
    let new_balance = ledger::apply_delta(wallet.balance, delta);

    let mut active: wallets::ActiveModel = wallet.into();
    active.balance = Set(new_balance);
    active.updated_at = Set(chrono::Utc::now().into());
    active.update(txn).await
}

/// Wallet repository for read operations.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the user's wallets (at most one, by construction).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<wallets::Model>, WalletError> {
        let wallets = wallets::Entity::find()
            .filter(wallets::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;
        Ok(wallets)
    }

    /// Finds the user's wallet.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NotFound` if the user has no wallet.
    pub async fn find_for_user(&self, user_id: Uuid) -> Result<wallets::Model, WalletError> {
        wallets::Entity::find()
            .filter(wallets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(WalletError::NotFound)
    }

    /// Finds a wallet by ID, scoped to the requesting user.
    ///
    /// A wallet owned by somebody else surfaces as `NotFound`, never as a
    /// different error, so existence is not leaked.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NotFound` if absent or foreign.
    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        wallet_id: Uuid,
    ) -> Result<wallets::Model, WalletError> {
        wallets::Entity::find_by_id(wallet_id)
            .filter(wallets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(WalletError::NotFound)
    }
}
