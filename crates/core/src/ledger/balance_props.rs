//! Property tests for the balance invariant.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::balance::{apply_delta, signed_amount};
use super::types::{NewTransaction, TransactionCategory, TransactionType};
use super::validation::validate_transaction;

/// Strategy for generating positive amounts with 2 decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn transaction_strategy() -> impl Strategy<Value = NewTransaction> {
    (amount_strategy(), any::<bool>()).prop_map(|(amount, is_income)| NewTransaction {
        amount,
        transaction_type: if is_income {
            TransactionType::Income
        } else {
            TransactionType::Expense
        },
        category: TransactionCategory::Other,
        description: None,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sequence of transactions, admitting each through the
    /// validator and applying it through the balance engine keeps the
    /// stored balance equal to the signed sum of the admitted ledger.
    #[test]
    fn prop_balance_equals_signed_ledger_sum(txs in prop::collection::vec(transaction_strategy(), 0..50)) {
        let mut balance = Decimal::ZERO;
        let mut signed_sum = Decimal::ZERO;

        for tx in &txs {
            match validate_transaction(balance, tx) {
                Ok(()) => {
                    let delta = signed_amount(tx.transaction_type, tx.amount);
                    balance = apply_delta(balance, delta);
                    signed_sum += delta;
                }
                Err(_) => {
                    // Rejected transactions must leave the balance untouched.
                    prop_assert_eq!(balance, signed_sum);
                }
            }
        }

        prop_assert_eq!(balance, signed_sum);
    }

    /// *For any* admitted sequence, the balance never goes negative.
    #[test]
    fn prop_validated_balance_never_negative(txs in prop::collection::vec(transaction_strategy(), 0..50)) {
        let mut balance = Decimal::ZERO;

        for tx in &txs {
            if validate_transaction(balance, tx).is_ok() {
                balance = apply_delta(balance, signed_amount(tx.transaction_type, tx.amount));
            }
            prop_assert!(balance >= Decimal::ZERO);
        }
    }
}
