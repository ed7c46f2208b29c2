//! Report data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fintrack_shared::auth::UserInfo;
use fintrack_shared::types::{PageMeta, TransactionId};

use crate::ledger::{TransactionCategory, TransactionType};

/// A transaction row as it appears in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTransaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Positive monetary amount.
    pub amount: Decimal,
    /// Income or expense.
    pub transaction_type: TransactionType,
    /// Spending category.
    pub category: TransactionCategory,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Creation timestamp, immutable after creation.
    pub date: DateTime<Utc>,
}

/// Income/expense totals over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeSummary {
    /// Sum of income amounts.
    pub income: Decimal,
    /// Sum of expense amounts.
    pub expense: Decimal,
}

/// Transaction count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The category.
    pub category: TransactionCategory,
    /// Number of transactions in the filtered set.
    pub count: u64,
}

/// Aggregated report over a filtered transaction set.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Sum of income amounts in the filtered set (zero when empty).
    pub income: Decimal,
    /// Sum of expense amounts in the filtered set (zero when empty).
    pub expense: Decimal,
    /// The wallet's current stored balance. Reflects the whole ledger,
    /// independent of the date filter applied to the list.
    pub balance: Decimal,
    /// Number of income rows in the filtered set.
    pub income_count: u64,
    /// Number of expense rows in the filtered set.
    pub expense_count: u64,
    /// Total row count in the filtered set.
    pub total_transactions: u64,
    /// Totals over the explicit start/end range when given, otherwise
    /// identical to the unfiltered totals.
    pub date_range_summary: DateRangeSummary,
    /// Requesting user's details.
    pub user_info: UserInfo,
    /// Most recent transaction by date, absent when the set is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction: Option<ReportTransaction>,
    /// Count of transactions grouped by category.
    pub transaction_categories: Vec<CategoryCount>,
    /// The filtered transactions, paginated.
    pub transaction_details: Vec<ReportTransaction>,
    /// Pagination metadata for `transaction_details`.
    #[serde(flatten)]
    pub pagination: PageMeta,
}
