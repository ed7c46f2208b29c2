//! Date filters for report queries.
//!
//! Two filtering modes are supported, matching the query parameters the
//! report endpoint accepts: graduated day/month/year components, and an
//! explicit start/end date range. The component form is the canonical
//! contract; the range form is kept for compatibility and also drives the
//! date-range summary.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

use fintrack_shared::AppError;

/// Validation errors for report filters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportFilterError {
    /// `day` given without `month`.
    #[error("Month is required when day is provided.")]
    DayWithoutMonth,

    /// `day` and `month` given without `year`.
    #[error("Year is required when both day and month are provided.")]
    DayMonthWithoutYear,

    /// `month` given without `year`.
    #[error("Year is required when month is provided.")]
    MonthWithoutYear,

    /// `start_date` after `end_date`.
    #[error("Start date cannot be after end date.")]
    StartAfterEnd,
}

impl From<ReportFilterError> for AppError {
    fn from(err: ReportFilterError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Date filter for report queries.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReportFilter {
    /// Day of month (requires `month` and `year`).
    pub day: Option<u32>,
    /// Month number (requires `year`).
    pub month: Option<u32>,
    /// Calendar year.
    pub year: Option<i32>,
    /// Inclusive range start.
    pub start_date: Option<NaiveDate>,
    /// Inclusive range end.
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    /// Validates the filter combination.
    ///
    /// The day/month/year components are graduated: a finer component
    /// requires every coarser one. The range mode only requires
    /// `start_date <= end_date` when both ends are given.
    ///
    /// # Errors
    ///
    /// Returns a `ReportFilterError` describing the malformed combination.
    pub fn validate(&self) -> Result<(), ReportFilterError> {
        match (self.day, self.month, self.year) {
            (Some(_), None, _) => return Err(ReportFilterError::DayWithoutMonth),
            (Some(_), Some(_), None) => return Err(ReportFilterError::DayMonthWithoutYear),
            (None, Some(_), None) => return Err(ReportFilterError::MonthWithoutYear),
            _ => {}
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && start > end
        {
            return Err(ReportFilterError::StartAfterEnd);
        }

        Ok(())
    }

    /// Returns true if the timestamp passes every active filter component.
    #[must_use]
    pub fn matches(&self, date: DateTime<Utc>) -> bool {
        if let Some(year) = self.year
            && date.year() != year
        {
            return false;
        }
        if let Some(month) = self.month
            && date.month() != month
        {
            return false;
        }
        if let Some(day) = self.day
            && date.day() != day
        {
            return false;
        }

        let naive = date.date_naive();
        if let Some(start) = self.start_date
            && naive < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && naive > end
        {
            return false;
        }

        true
    }

    /// Returns the explicit range, when both ends are present.
    #[must_use]
    pub fn explicit_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_day_without_month_rejected() {
        let filter = ReportFilter {
            day: Some(15),
            ..ReportFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(err.to_string(), "Month is required when day is provided.");
    }

    #[test]
    fn test_day_month_without_year_rejected() {
        let filter = ReportFilter {
            day: Some(15),
            month: Some(6),
            ..ReportFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Year is required when both day and month are provided."
        );
    }

    #[test]
    fn test_month_without_year_rejected() {
        let filter = ReportFilter {
            month: Some(6),
            ..ReportFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(err.to_string(), "Year is required when month is provided.");
    }

    #[test]
    fn test_valid_combinations() {
        let exact = ReportFilter {
            day: Some(15),
            month: Some(6),
            year: Some(2026),
            ..ReportFilter::default()
        };
        assert!(exact.validate().is_ok());

        let monthly = ReportFilter {
            month: Some(6),
            year: Some(2026),
            ..ReportFilter::default()
        };
        assert!(monthly.validate().is_ok());

        let yearly = ReportFilter {
            year: Some(2026),
            ..ReportFilter::default()
        };
        assert!(yearly.validate().is_ok());

        assert!(ReportFilter::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let filter = ReportFilter {
            start_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            ..ReportFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(err.to_string(), "Start date cannot be after end date.");
    }

    #[test]
    fn test_exact_date_filter_matches() {
        let filter = ReportFilter {
            day: Some(15),
            month: Some(6),
            year: Some(2026),
            ..ReportFilter::default()
        };
        assert!(filter.matches(ts(2026, 6, 15)));
        assert!(!filter.matches(ts(2026, 6, 16)));
        assert!(!filter.matches(ts(2025, 6, 15)));
    }

    #[test]
    fn test_year_filter_matches_whole_year() {
        let filter = ReportFilter {
            year: Some(2026),
            ..ReportFilter::default()
        };
        assert!(filter.matches(ts(2026, 1, 1)));
        assert!(filter.matches(ts(2026, 12, 31)));
        assert!(!filter.matches(ts(2027, 1, 1)));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let filter = ReportFilter {
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30),
            ..ReportFilter::default()
        };
        assert!(filter.matches(ts(2026, 6, 1)));
        assert!(filter.matches(ts(2026, 6, 30)));
        assert!(!filter.matches(ts(2026, 5, 31)));
        assert!(!filter.matches(ts(2026, 7, 1)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ReportFilter::default().matches(ts(1999, 1, 1)));
    }
}
