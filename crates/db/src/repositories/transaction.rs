//! Transaction repository: ledger rows plus the wallet-balance updates
//! that accompany them.
//!
//! Every balance-mutating operation runs inside a database transaction
//! that first locks the wallet row, validates against the locked
//! balance, and only then writes. Amount and type are immutable after
//! creation; corrections go through delete-and-recreate so the wallet
//! balance always equals the signed sum of the ledger.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use fintrack_core::ledger::{
    self, LedgerError, NewTransaction, TransactionCategory, BALANCE_SCALE,
};
use fintrack_shared::types::PageRequest;
use fintrack_shared::AppError;

use crate::entities::{transactions, wallets};
use crate::repositories::wallet::{apply_delta, lock_wallet_for_user};

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The requesting user has no wallet.
    #[error("Wallet not found.")]
    WalletNotFound,

    /// Transaction not found or not owned by the requesting user.
    #[error("Transaction not found.")]
    NotFound,

    /// Domain validation failed (non-positive amount, insufficient funds).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::WalletNotFound => Self::NotFound("Wallet not found.".to_string()),
            TransactionError::NotFound => Self::NotFound("Transaction not found.".to_string()),
            TransactionError::Ledger(e) => e.into(),
            TransactionError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Optional date-range filter for transaction listings.
#[derive(Debug, Clone, Default)]
pub struct TransactionListFilter {
    /// Inclusive lower bound on `date`.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `date`.
    pub date_to: Option<DateTime<Utc>>,
}

/// Mutable fields of an existing transaction.
///
/// Amount and type are deliberately absent: changing them would detach
/// the wallet balance from the ledger.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub description: Option<String>,
    pub category: Option<TransactionCategory>,
}

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a transaction against the user's wallet and moves the
    /// balance by the signed amount, atomically.
    ///
    /// The wallet row is locked for the duration of the transaction, so
    /// concurrent expenses validate against each other's results rather
    /// than a stale balance.
    ///
    /// # Errors
    ///
    /// Returns `WalletNotFound` if the user has no wallet, `Ledger` if the
    /// amount is non-positive or an expense exceeds the balance.
    pub async fn create(
        &self,
        user_id: Uuid,
        input: NewTransaction,
    ) -> Result<transactions::Model, TransactionError> {
        let txn = self.db.begin().await?;

        let wallet = lock_wallet_for_user(&txn, user_id)
            .await?
            .ok_or(TransactionError::WalletNotFound)?;

        let amount = input.amount.round_dp(BALANCE_SCALE);
        let normalized = NewTransaction { amount, ..input };
        ledger::validate_transaction(wallet.balance, &normalized)?;

        let now = Utc::now();
        let record = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            wallet_id: Set(wallet.id),
            amount: Set(amount),
            transaction_type: Set(normalized.transaction_type.into()),
            category: Set(normalized.category.into()),
            description: Set(normalized.description.clone()),
            date: Set(now.into()),
            created_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        let delta = ledger::signed_amount(normalized.transaction_type, amount);
        apply_delta(&txn, wallet, delta).await?;

        txn.commit().await?;
        Ok(record)
    }

    /// Lists the user's transactions, newest first, with an optional
    /// date-range filter.
    ///
    /// Returns the page of rows and the total row count for the filter.
    ///
    /// # Errors
    ///
    /// Returns `WalletNotFound` if the user has no wallet.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        filter: &TransactionListFilter,
        page: PageRequest,
    ) -> Result<(Vec<transactions::Model>, u64), TransactionError> {
        let wallet = self.wallet_for_user(user_id).await?;

        let mut query = transactions::Entity::find()
            .filter(transactions::Column::WalletId.eq(wallet.id))
            .order_by_desc(transactions::Column::Date);

        if let Some(from) = filter.date_from {
            query = query.filter(transactions::Column::Date.gte(from));
        }
        if let Some(to) = filter.date_to {
            query = query.filter(transactions::Column::Date.lte(to));
        }

        let page = page.clamped();
        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(u64::from(page.page - 1)).await?;
        Ok((items, total))
    }

    /// Fetches a single transaction, scoped to the user's wallet.
    ///
    /// A transaction owned by somebody else surfaces as `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or foreign.
    pub async fn get_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<transactions::Model, TransactionError> {
        let wallet = self.wallet_for_user(user_id).await?;
        transactions::Entity::find_by_id(transaction_id)
            .filter(transactions::Column::WalletId.eq(wallet.id))
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound)
    }

    /// Updates the descriptive fields of a transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or foreign.
    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
        input: UpdateTransactionInput,
    ) -> Result<transactions::Model, TransactionError> {
        let existing = self.get_for_user(user_id, transaction_id).await?;

        let mut active: transactions::ActiveModel = existing.into();
        if let Some(description) = input.description {
            active.description = Set(Some(description));
        }
        if let Some(category) = input.category {
            active.category = Set(category.into());
        }
        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes a transaction and reverses its effect on the wallet
    /// balance, atomically.
    ///
    /// Reversing an income is itself a withdrawal, so it is refused when
    /// the remaining balance would not cover it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or foreign, `Ledger` if reversal
    /// would drive the balance negative.
    pub async fn delete_for_user(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<(), TransactionError> {
        let txn = self.db.begin().await?;

        let wallet = lock_wallet_for_user(&txn, user_id)
            .await?
            .ok_or(TransactionError::WalletNotFound)?;

        let existing = transactions::Entity::find_by_id(transaction_id)
            .filter(transactions::Column::WalletId.eq(wallet.id))
            .one(&txn)
            .await?
            .ok_or(TransactionError::NotFound)?;

        let delta = -ledger::signed_amount(existing.transaction_type.into(), existing.amount);
        if -delta > wallet.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: -delta,
                available: wallet.balance,
            }
            .into());
        }

        existing.delete(&txn).await?;
        apply_delta(&txn, wallet, delta).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn wallet_for_user(&self, user_id: Uuid) -> Result<wallets::Model, TransactionError> {
        wallets::Entity::find()
            .filter(wallets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(TransactionError::WalletNotFound)
    }
}
