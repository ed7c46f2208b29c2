//! Tests for report aggregation.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use fintrack_shared::auth::UserInfo;
use fintrack_shared::types::{PageRequest, TransactionId};

use super::aggregate::build_report;
use super::filter::{ReportFilter, ReportFilterError};
use super::types::ReportTransaction;
use crate::ledger::{TransactionCategory, TransactionType};

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn tx(
    amount: Decimal,
    transaction_type: TransactionType,
    category: TransactionCategory,
    date: DateTime<Utc>,
) -> ReportTransaction {
    ReportTransaction {
        id: TransactionId::new(),
        amount,
        transaction_type,
        category,
        description: None,
        date,
    }
}

fn user() -> UserInfo {
    UserInfo {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        full_name: "Alice Example".to_string(),
    }
}

#[test]
fn test_empty_ledger_reports_zeros() {
    let report = build_report(
        &[],
        &ReportFilter::default(),
        dec!(0),
        user(),
        PageRequest::default(),
    )
    .unwrap();

    assert_eq!(report.income, Decimal::ZERO);
    assert_eq!(report.expense, Decimal::ZERO);
    assert_eq!(report.income_count, 0);
    assert_eq!(report.expense_count, 0);
    assert_eq!(report.total_transactions, 0);
    assert!(report.last_transaction.is_none());
    assert!(report.transaction_categories.is_empty());
    assert!(report.transaction_details.is_empty());
    assert_eq!(report.pagination.total_pages, 1);
}

/// Scenario: salary of 1000 booked as income/other, then a 300 food
/// expense. The unfiltered report mirrors the ledger and the stored
/// balance of 700.
#[test]
fn test_salary_then_expense_scenario() {
    let ledger = vec![
        tx(
            dec!(1000),
            TransactionType::Income,
            TransactionCategory::Other,
            ts(2026, 8, 1),
        ),
        tx(
            dec!(300),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 8, 10),
        ),
    ];

    let report = build_report(
        &ledger,
        &ReportFilter::default(),
        dec!(700.00),
        user(),
        PageRequest::default(),
    )
    .unwrap();

    assert_eq!(report.income, dec!(1000));
    assert_eq!(report.expense, dec!(300));
    assert_eq!(report.balance, dec!(700.00));
    assert_eq!(report.income_count, 1);
    assert_eq!(report.expense_count, 1);
    assert_eq!(report.total_transactions, 2);
    assert_eq!(report.date_range_summary.income, dec!(1000));
    assert_eq!(report.date_range_summary.expense, dec!(300));

    let last = report.last_transaction.unwrap();
    assert_eq!(last.amount, dec!(300));
    assert_eq!(last.category, TransactionCategory::Food);
}

#[test]
fn test_income_minus_expense_equals_balance_from_zero() {
    let ledger = vec![
        tx(
            dec!(250.50),
            TransactionType::Income,
            TransactionCategory::Other,
            ts(2026, 3, 1),
        ),
        tx(
            dec!(100.25),
            TransactionType::Expense,
            TransactionCategory::Transport,
            ts(2026, 3, 2),
        ),
        tx(
            dec!(49.75),
            TransactionType::Expense,
            TransactionCategory::Entertainment,
            ts(2026, 3, 3),
        ),
    ];
    let balance = dec!(100.50);

    let report = build_report(
        &ledger,
        &ReportFilter::default(),
        balance,
        user(),
        PageRequest::default(),
    )
    .unwrap();

    assert_eq!(report.income - report.expense, balance);
}

#[test]
fn test_month_filter_narrows_totals_but_not_balance() {
    let ledger = vec![
        tx(
            dec!(1000),
            TransactionType::Income,
            TransactionCategory::Other,
            ts(2026, 7, 15),
        ),
        tx(
            dec!(200),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 8, 5),
        ),
    ];

    let filter = ReportFilter {
        month: Some(8),
        year: Some(2026),
        ..ReportFilter::default()
    };
    let report = build_report(&ledger, &filter, dec!(800), user(), PageRequest::default()).unwrap();

    assert_eq!(report.income, Decimal::ZERO);
    assert_eq!(report.expense, dec!(200));
    assert_eq!(report.total_transactions, 1);
    // Balance reflects the whole ledger regardless of the filter.
    assert_eq!(report.balance, dec!(800));
}

#[test]
fn test_malformed_filter_surfaces_error() {
    let filter = ReportFilter {
        day: Some(15),
        ..ReportFilter::default()
    };
    let err = build_report(&[], &filter, dec!(0), user(), PageRequest::default()).unwrap_err();
    assert_eq!(err, ReportFilterError::DayWithoutMonth);
    assert_eq!(err.to_string(), "Month is required when day is provided.");
}

#[test]
fn test_explicit_range_drives_summary() {
    let ledger = vec![
        tx(
            dec!(500),
            TransactionType::Income,
            TransactionCategory::Other,
            ts(2026, 5, 1),
        ),
        tx(
            dec!(100),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 6, 10),
        ),
        tx(
            dec!(50),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 7, 20),
        ),
    ];

    let filter = ReportFilter {
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 30),
        ..ReportFilter::default()
    };
    let report = build_report(&ledger, &filter, dec!(350), user(), PageRequest::default()).unwrap();

    // The range also filters the listing, so summary and totals agree here.
    assert_eq!(report.date_range_summary.income, Decimal::ZERO);
    assert_eq!(report.date_range_summary.expense, dec!(100));
    assert_eq!(report.total_transactions, 1);
}

#[test]
fn test_category_breakdown() {
    let ledger = vec![
        tx(
            dec!(10),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 1, 1),
        ),
        tx(
            dec!(20),
            TransactionType::Expense,
            TransactionCategory::Food,
            ts(2026, 1, 2),
        ),
        tx(
            dec!(30),
            TransactionType::Expense,
            TransactionCategory::Transport,
            ts(2026, 1, 3),
        ),
        tx(
            dec!(40),
            TransactionType::Income,
            TransactionCategory::Other,
            ts(2026, 1, 4),
        ),
    ];

    let report = build_report(
        &ledger,
        &ReportFilter::default(),
        dec!(0),
        user(),
        PageRequest::default(),
    )
    .unwrap();

    let counts: Vec<(TransactionCategory, u64)> = report
        .transaction_categories
        .iter()
        .map(|c| (c.category, c.count))
        .collect();
    assert!(counts.contains(&(TransactionCategory::Food, 2)));
    assert!(counts.contains(&(TransactionCategory::Transport, 1)));
    assert!(counts.contains(&(TransactionCategory::Other, 1)));
}

#[test]
fn test_details_are_paginated_newest_first() {
    let ledger: Vec<ReportTransaction> = (1..=25)
        .map(|day| {
            tx(
                Decimal::from(day),
                TransactionType::Income,
                TransactionCategory::Other,
                ts(2026, 1, u32::try_from(day).unwrap()),
            )
        })
        .collect();

    let page_one = build_report(
        &ledger,
        &ReportFilter::default(),
        dec!(325),
        user(),
        PageRequest::default(),
    )
    .unwrap();

    assert_eq!(page_one.transaction_details.len(), 10);
    assert_eq!(page_one.pagination.current_page, 1);
    assert_eq!(page_one.pagination.total_pages, 3);
    assert_eq!(page_one.pagination.total_items, 25);
    // Newest first.
    assert_eq!(page_one.transaction_details[0].amount, dec!(25));

    let page_three = build_report(
        &ledger,
        &ReportFilter::default(),
        dec!(325),
        user(),
        PageRequest {
            page: 3,
            page_size: 10,
        },
    )
    .unwrap();
    assert_eq!(page_three.transaction_details.len(), 5);
    assert_eq!(page_three.transaction_details[4].amount, dec!(1));
}

#[test]
fn test_page_size_capped_at_hundred() {
    let ledger: Vec<ReportTransaction> = (0..150i64)
        .map(|i| {
            tx(
                dec!(1),
                TransactionType::Income,
                TransactionCategory::Other,
                ts(2026, 1, 1) + chrono::Duration::minutes(i),
            )
        })
        .collect();

    let report = build_report(
        &ledger,
        &ReportFilter::default(),
        dec!(150),
        user(),
        PageRequest {
            page: 1,
            page_size: 5000,
        },
    )
    .unwrap();

    assert_eq!(report.transaction_details.len(), 100);
    assert_eq!(report.pagination.total_pages, 2);
}
