//! Admission rules for new transactions.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{NewTransaction, TransactionType};

/// Validates a transaction against the wallet's current balance.
///
/// Expenses fail when `amount > balance` (strict comparison; an expense
/// equal to the balance is allowed and drives the balance to exactly
/// zero). Income has no upper bound. Amounts must be positive for both
/// types.
///
/// Callers are responsible for reading `balance` under a lock that is held
/// until the transaction and balance write commit; otherwise two
/// concurrent expenses can both pass this check against a stale read.
///
/// # Errors
///
/// Returns `LedgerError::NonPositiveAmount` or
/// `LedgerError::InsufficientFunds`.
pub fn validate_transaction(balance: Decimal, tx: &NewTransaction) -> Result<(), LedgerError> {
    if tx.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount);
    }

    if tx.transaction_type == TransactionType::Expense && tx.amount > balance {
        return Err(LedgerError::InsufficientFunds {
            requested: tx.amount,
            available: balance,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::TransactionCategory;
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, transaction_type: TransactionType) -> NewTransaction {
        NewTransaction {
            amount,
            transaction_type,
            category: TransactionCategory::Other,
            description: None,
        }
    }

    #[test]
    fn test_expense_over_balance_rejected() {
        let result = validate_transaction(dec!(700), &tx(dec!(800), TransactionType::Expense));
        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                requested: dec!(800),
                available: dec!(700),
            })
        );
    }

    #[test]
    fn test_expense_equal_to_balance_allowed() {
        assert!(validate_transaction(dec!(700), &tx(dec!(700), TransactionType::Expense)).is_ok());
    }

    #[test]
    fn test_income_has_no_upper_bound() {
        assert!(validate_transaction(dec!(0), &tx(dec!(1_000_000), TransactionType::Income)).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            validate_transaction(dec!(100), &tx(dec!(0), TransactionType::Income)),
            Err(LedgerError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_transaction(dec!(100), &tx(dec!(-5), TransactionType::Expense)),
            Err(LedgerError::NonPositiveAmount)
        );
    }
}
