//! Wallet balance math.
//!
//! The signed contribution of a transaction and the delta application are
//! defined here once; every balance mutation in the system routes through
//! these functions so the stored balance always equals the signed sum of
//! the wallet's ledger.

use rust_decimal::Decimal;

use super::types::TransactionType;

/// Number of fractional digits kept on wallet balances.
pub const BALANCE_SCALE: u32 = 2;

/// Returns the signed contribution of a transaction to its wallet balance.
///
/// `+amount` for income, `-amount` for expense.
#[must_use]
pub fn signed_amount(transaction_type: TransactionType, amount: Decimal) -> Decimal {
    match transaction_type {
        TransactionType::Income => amount,
        TransactionType::Expense => -amount,
    }
}

/// Applies a signed delta to a balance, rounded to 2 decimal places.
#[must_use]
pub fn apply_delta(balance: Decimal, delta: Decimal) -> Decimal {
    (balance + delta).round_dp(BALANCE_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_income_adds() {
        assert_eq!(
            signed_amount(TransactionType::Income, dec!(100.50)),
            dec!(100.50)
        );
    }

    #[test]
    fn test_expense_subtracts() {
        assert_eq!(
            signed_amount(TransactionType::Expense, dec!(100.50)),
            dec!(-100.50)
        );
    }

    #[test]
    fn test_apply_delta_rounds_to_two_places() {
        assert_eq!(apply_delta(dec!(10.00), dec!(0.005)), dec!(10.00));
        assert_eq!(apply_delta(dec!(10.00), dec!(0.015)), dec!(10.02));
    }

    #[test]
    fn test_expense_to_exactly_zero() {
        let balance = apply_delta(dec!(700), signed_amount(TransactionType::Expense, dec!(700)));
        assert_eq!(balance, Decimal::ZERO);
    }
}
