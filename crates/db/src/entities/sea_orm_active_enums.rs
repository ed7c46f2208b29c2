//! `SeaORM` active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use fintrack_core::ledger;

/// Direction of a transaction's effect on the wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_type")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Adds to the wallet balance.
    #[sea_orm(string_value = "income")]
    Income,
    /// Subtracts from the wallet balance.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Spending category for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_category")]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Food and groceries.
    #[sea_orm(string_value = "food")]
    Food,
    /// Transport and travel.
    #[sea_orm(string_value = "transport")]
    Transport,
    /// Entertainment.
    #[sea_orm(string_value = "entertainment")]
    Entertainment,
    /// Everything else, including salary income.
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<ledger::TransactionType> for TransactionType {
    fn from(value: ledger::TransactionType) -> Self {
        match value {
            ledger::TransactionType::Income => Self::Income,
            ledger::TransactionType::Expense => Self::Expense,
        }
    }
}

impl From<TransactionType> for ledger::TransactionType {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl From<ledger::TransactionCategory> for TransactionCategory {
    fn from(value: ledger::TransactionCategory) -> Self {
        match value {
            ledger::TransactionCategory::Food => Self::Food,
            ledger::TransactionCategory::Transport => Self::Transport,
            ledger::TransactionCategory::Entertainment => Self::Entertainment,
            ledger::TransactionCategory::Other => Self::Other,
        }
    }
}

impl From<TransactionCategory> for ledger::TransactionCategory {
    fn from(value: TransactionCategory) -> Self {
        match value {
            TransactionCategory::Food => Self::Food,
            TransactionCategory::Transport => Self::Transport,
            TransactionCategory::Entertainment => Self::Entertainment,
            TransactionCategory::Other => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trip() {
        for ty in [
            ledger::TransactionType::Income,
            ledger::TransactionType::Expense,
        ] {
            let db: TransactionType = ty.into();
            let back: ledger::TransactionType = db.into();
            assert_eq!(back, ty);
        }

        for cat in [
            ledger::TransactionCategory::Food,
            ledger::TransactionCategory::Transport,
            ledger::TransactionCategory::Entertainment,
            ledger::TransactionCategory::Other,
        ] {
            let db: TransactionCategory = cat.into();
            let back: ledger::TransactionCategory = db.into();
            assert_eq!(back, cat);
        }
    }
}
