//! Report filtering and aggregation over a wallet's ledger.
//!
//! The report endpoint computes totals, counts, a category breakdown, the
//! last transaction, and date-range summaries over a filtered slice of one
//! wallet's transactions. The transaction set handed to [`build_report`]
//! must already be scoped to a single wallet by the caller.

pub mod aggregate;
pub mod filter;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregate::build_report;
pub use filter::{ReportFilter, ReportFilterError};
pub use types::{CategoryCount, DateRangeSummary, Report, ReportTransaction};
