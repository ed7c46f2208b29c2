//! User-profile repository, including the salary-transaction trigger.
//!
//! Setting a salary is the one place where a profile write fans out into
//! the ledger: when the salary actually changes to a positive value, an
//! income transaction is recorded and the wallet balance moves with it,
//! all in one database transaction. The profile row is locked before the
//! stored salary is read, so the fire/no-fire comparison never sees a
//! value another in-flight request is about to change.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use fintrack_core::ledger::{self, TransactionCategory, TransactionType, BALANCE_SCALE};
use fintrack_core::profile::{salary_description, salary_transaction_amount};
use fintrack_shared::AppError;

use crate::entities::{transactions, user_profiles};
use crate::repositories::wallet::{apply_delta, lock_wallet_for_user};

/// Error types for profile operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// A profile already exists for this user.
    #[error("User profile already exists.")]
    AlreadyExists,

    /// No profile exists for this user.
    #[error("User profile not found.")]
    NotFound,

    /// The requesting user has no wallet to credit the salary to.
    #[error("Wallet not found.")]
    WalletNotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::AlreadyExists => {
                Self::Conflict("User profile already exists.".to_string())
            }
            ProfileError::NotFound => Self::NotFound("User profile not found.".to_string()),
            ProfileError::WalletNotFound => Self::NotFound("Wallet not found.".to_string()),
            ProfileError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Result of a salary change: the updated profile and, when the trigger
/// fired, the income transaction it recorded.
#[derive(Debug, Clone)]
pub struct SalaryUpdate {
    pub profile: user_profiles::Model,
    pub transaction: Option<transactions::Model>,
}

/// Profile repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    db: DatabaseConnection,
}

impl ProfileRepository {
    /// Creates a new profile repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the user's profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if the user has no profile.
    pub async fn get_for_user(&self, user_id: Uuid) -> Result<user_profiles::Model, ProfileError> {
        user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(ProfileError::NotFound)
    }

    /// Creates a profile for the user.
    ///
    /// Profiles are normally created at registration, so this conflicts
    /// for any registered user.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::AlreadyExists` when a profile is present,
    /// including when a concurrent create wins the `user_id` unique
    /// constraint.
    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        username: &str,
        salary: Decimal,
    ) -> Result<SalaryUpdate, ProfileError> {
        let txn = self.db.begin().await?;

        let existing = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(ProfileError::AlreadyExists);
        }

        let now = chrono::Utc::now();
        let salary = salary.round_dp(BALANCE_SCALE);

        let active = user_profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            salary: Set(salary),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        let profile = match active.insert(&txn).await {
            Ok(p) => p,
            // A concurrent create committed between the check and the
            // insert; surface it as the same conflict.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(ProfileError::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        let transaction =
            Self::fire_salary_trigger(&txn, user_id, username, Decimal::ZERO, salary).await?;

        txn.commit().await?;
        Ok(SalaryUpdate {
            profile,
            transaction,
        })
    }

    /// Sets the user's salary and fires the salary-transaction trigger.
    ///
    /// The new value is always persisted; the income transaction is only
    /// recorded when the salary changed to a positive value. The profile
    /// row is read under `SELECT ... FOR UPDATE`, so concurrent salary
    /// writes serialize before the fire/no-fire decision: the second of
    /// two identical updates sees the committed value and does not book a
    /// duplicate transaction.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::NotFound` if the user has no profile, or
    /// `WalletNotFound` if the trigger has no wallet to credit.
    pub async fn set_salary(
        &self,
        user_id: Uuid,
        username: &str,
        salary: Decimal,
    ) -> Result<SalaryUpdate, ProfileError> {
        let txn = self.db.begin().await?;

        let existing = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ProfileError::NotFound)?;

        let previous = existing.salary;
        let salary = salary.round_dp(BALANCE_SCALE);

        let mut active: user_profiles::ActiveModel = existing.into();
        active.salary = Set(salary);
        active.updated_at = Set(chrono::Utc::now().into());
        let profile = active.update(&txn).await?;

        let transaction =
            Self::fire_salary_trigger(&txn, user_id, username, previous, salary).await?;

        txn.commit().await?;
        Ok(SalaryUpdate {
            profile,
            transaction,
        })
    }

    /// Executes the trigger decision inside the caller's transaction:
    /// locks the wallet, inserts the income row, moves the balance.
    async fn fire_salary_trigger(
        txn: &sea_orm::DatabaseTransaction,
        user_id: Uuid,
        username: &str,
        previous: Decimal,
        new: Decimal,
    ) -> Result<Option<transactions::Model>, ProfileError> {
        let Some(amount) = salary_transaction_amount(previous, new) else {
            return Ok(None);
        };

        let wallet = lock_wallet_for_user(txn, user_id)
            .await?
            .ok_or(ProfileError::WalletNotFound)?;

        let now = chrono::Utc::now();
        let record = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            wallet_id: Set(wallet.id),
            amount: Set(amount),
            transaction_type: Set(TransactionType::Income.into()),
            category: Set(TransactionCategory::Other.into()),
            description: Set(Some(salary_description(username))),
            date: Set(now.into()),
            created_at: Set(now.into()),
        }
        .insert(txn)
        .await?;

        let delta = ledger::signed_amount(TransactionType::Income, amount);
        apply_delta(txn, wallet, delta).await?;

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_profile_surfaces_as_conflict() {
        let app: AppError = ProfileError::AlreadyExists.into();
        assert_eq!(app.status_code(), 409);
        assert_eq!(app.detail(), "User profile already exists.");
    }
}
