//! Report aggregation over a filtered transaction set.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use fintrack_shared::auth::UserInfo;
use fintrack_shared::types::{PageMeta, PageRequest};

use super::filter::{ReportFilter, ReportFilterError};
use super::types::{CategoryCount, DateRangeSummary, Report, ReportTransaction};
use crate::ledger::TransactionType;

/// Builds a report over one wallet's ledger.
///
/// `transactions` is the wallet's full transaction set, already scoped to
/// the requesting user's wallet by the caller. `wallet_balance` is the
/// stored balance and is reported as-is; it is never recomputed from the
/// filtered set.
///
/// # Errors
///
/// Returns a `ReportFilterError` when the filter combination is malformed.
pub fn build_report(
    transactions: &[ReportTransaction],
    filter: &ReportFilter,
    wallet_balance: Decimal,
    user_info: UserInfo,
    page: PageRequest,
) -> Result<Report, ReportFilterError> {
    filter.validate()?;

    let mut filtered: Vec<&ReportTransaction> = transactions
        .iter()
        .filter(|tx| filter.matches(tx.date))
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    let totals = sum_by_type(filtered.iter().copied());
    let income_count = count_by_type(&filtered, TransactionType::Income);
    let expense_count = count_by_type(&filtered, TransactionType::Expense);

    // The explicit range drives its own summary; without one the summary
    // mirrors the filtered totals.
    let date_range_summary = match filter.explicit_range() {
        Some((start, end)) => sum_by_type(
            filtered
                .iter()
                .copied()
                .filter(|tx| tx.date.date_naive() >= start && tx.date.date_naive() <= end),
        ),
        None => totals,
    };

    let last_transaction = filtered.first().map(|tx| (*tx).clone());
    let transaction_categories = count_by_category(&filtered);

    let page = page.clamped();
    let total_items = filtered.len() as u64;
    let transaction_details: Vec<ReportTransaction> = filtered
        .iter()
        .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
        .map(|tx| (*tx).clone())
        .collect();

    Ok(Report {
        income: totals.income,
        expense: totals.expense,
        balance: wallet_balance,
        income_count,
        expense_count,
        total_transactions: total_items,
        date_range_summary,
        user_info,
        last_transaction,
        transaction_categories,
        transaction_details,
        pagination: PageMeta::compute(page.page, page.page_size, total_items),
    })
}

fn sum_by_type<'a, I>(transactions: I) -> DateRangeSummary
where
    I: Iterator<Item = &'a ReportTransaction>,
{
    let mut summary = DateRangeSummary::default();
    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => summary.income += tx.amount,
            TransactionType::Expense => summary.expense += tx.amount,
        }
    }
    summary
}

fn count_by_type(transactions: &[&ReportTransaction], transaction_type: TransactionType) -> u64 {
    transactions
        .iter()
        .filter(|tx| tx.transaction_type == transaction_type)
        .count() as u64
}

fn count_by_category(transactions: &[&ReportTransaction]) -> Vec<CategoryCount> {
    let mut counts = BTreeMap::new();
    for tx in transactions {
        *counts.entry(tx.category).or_insert(0u64) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect()
}
