//! Domain types for wallet transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction's effect on the wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Adds to the wallet balance.
    Income,
    /// Subtracts from the wallet balance.
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {s}")),
        }
    }
}

/// Spending category for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Food and groceries.
    Food,
    /// Transport and travel.
    Transport,
    /// Entertainment.
    Entertainment,
    /// Everything else, including salary income.
    Other,
}

impl Default for TransactionCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Transport => write!(f, "transport"),
            Self::Entertainment => write!(f, "entertainment"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for TransactionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Input for creating a transaction, before admission checks.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Positive monetary amount.
    pub amount: Decimal,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Spending category.
    pub category: TransactionCategory,
    /// Optional free-text description.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_type_parsing() {
        assert_eq!(
            TransactionType::from_str("income").unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            TransactionType::from_str("EXPENSE").unwrap(),
            TransactionType::Expense
        );
        assert!(TransactionType::from_str("transfer").is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            TransactionCategory::from_str("food").unwrap(),
            TransactionCategory::Food
        );
        assert_eq!(
            TransactionCategory::from_str("Other").unwrap(),
            TransactionCategory::Other
        );
        assert!(TransactionCategory::from_str("misc").is_err());
    }

    #[test]
    fn test_category_default_is_other() {
        assert_eq!(TransactionCategory::default(), TransactionCategory::Other);
    }
}
