//! Report query types with pre-dispatch validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// An inclusive calendar date range, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start` before any network call.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::Validation(format!(
                "end date {end} is before start date {start}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Returns true if `date` falls inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The report screens offered by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Sold vs. available cars with profit figures.
    SalesSummary,
    /// Cars on the lot valued at purchase price plus expenses.
    InventoryValuation,
    /// Expenses bucketed by month.
    ExpenseBreakdown,
}

impl ReportKind {
    /// URL path segment for the report endpoint.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SalesSummary => "sales-summary",
            Self::InventoryValuation => "inventory-valuation",
            Self::ExpenseBreakdown => "expense-breakdown",
        }
    }
}

/// A selected report kind plus its date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Which report to run.
    pub kind: ReportKind,
    /// The date window.
    pub range: DateRange,
}

impl ReportQuery {
    /// Creates a validated query.
    pub fn new(kind: ReportKind, start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        Ok(Self {
            kind,
            range: DateRange::new(start, end)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_valid_range() {
        let range = DateRange::new(day(2025, 1, 1), day(2025, 1, 31)).unwrap();
        assert!(range.contains(day(2025, 1, 1)));
        assert!(range.contains(day(2025, 1, 31)));
        assert!(!range.contains(day(2025, 2, 1)));
    }

    #[test]
    fn test_single_day_range() {
        assert!(DateRange::new(day(2025, 3, 15), day(2025, 3, 15)).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(day(2025, 1, 31), day(2025, 1, 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_query_validates_range() {
        let err =
            ReportQuery::new(ReportKind::SalesSummary, day(2025, 2, 1), day(2025, 1, 1))
                .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_report_kind_paths() {
        assert_eq!(ReportKind::SalesSummary.path(), "sales-summary");
        assert_eq!(ReportKind::InventoryValuation.path(), "inventory-valuation");
        assert_eq!(ReportKind::ExpenseBreakdown.path(), "expense-breakdown");
    }
}
