//! Report repository: fetches the wallet and full ledger for aggregation.
//!
//! Aggregation itself is pure and lives in `fintrack_core::report`; this
//! repository only loads the rows and converts them into the core's
//! report input type.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use fintrack_core::report::ReportTransaction;
use fintrack_shared::types::TransactionId;
use fintrack_shared::AppError;

use crate::entities::{transactions, wallets};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The requesting user has no wallet.
    #[error("Wallet not found.")]
    WalletNotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::WalletNotFound => Self::NotFound("Wallet not found.".to_string()),
            ReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

impl From<transactions::Model> for ReportTransaction {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: TransactionId::from_uuid(model.id),
            amount: model.amount,
            transaction_type: model.transaction_type.into(),
            category: model.category.into(),
            description: model.description,
            date: model.date.with_timezone(&chrono::Utc),
        }
    }
}

/// Report repository: read-only wallet + ledger access.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the user's wallet and the entire ledger, newest first.
    ///
    /// The whole ledger is loaded because the aggregates (totals, counts,
    /// category breakdown) cover every matching row, not just the
    /// requested page.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::WalletNotFound` if the user has no wallet.
    pub async fn wallet_ledger(
        &self,
        user_id: Uuid,
    ) -> Result<(wallets::Model, Vec<ReportTransaction>), ReportError> {
        let wallet = wallets::Entity::find()
            .filter(wallets::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(ReportError::WalletNotFound)?;

        let rows = transactions::Entity::find()
            .filter(transactions::Column::WalletId.eq(wallet.id))
            .order_by_desc(transactions::Column::Date)
            .all(&self.db)
            .await?;

        let ledger = rows.into_iter().map(ReportTransaction::from).collect();
        Ok((wallet, ledger))
    }
}
