//! Wallet ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Transaction types and categories
//! - Signed balance math (the Balance Engine arithmetic)
//! - Admission rules for new transactions (the Transaction Validator)
//! - Error types for ledger operations

pub mod balance;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod balance_props;

pub use balance::{apply_delta, signed_amount, BALANCE_SCALE};
pub use error::LedgerError;
pub use types::{NewTransaction, TransactionCategory, TransactionType};
pub use validation::validate_transaction;
