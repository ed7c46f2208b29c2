//! Error types for ledger operations.

use rust_decimal::Decimal;
use thiserror::Error;

use fintrack_shared::AppError;

/// Validation errors for ledger operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Expense exceeds the available wallet balance.
    #[error("Insufficient balance in the wallet for this expense.")]
    InsufficientFunds {
        /// Amount the expense asked for.
        requested: Decimal,
        /// Balance available at validation time.
        available: Decimal,
    },

    /// Transaction amount is zero or negative.
    #[error("Transaction amount must be positive.")]
    NonPositiveAmount,
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_funds_message() {
        let err = LedgerError::InsufficientFunds {
            requested: dec!(800),
            available: dec!(700),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance in the wallet for this expense."
        );
    }

    #[test]
    fn test_maps_to_validation_error() {
        let app: AppError = LedgerError::NonPositiveAmount.into();
        assert_eq!(app.status_code(), 400);
    }
}
