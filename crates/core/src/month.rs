//! Calendar-month filters (`YYYY-MM`) used for work log listing and the
//! work-hour variance view.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;
use crate::types::BusinessDate;

/// Half-open date range `[start, end)` covering exactly one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: BusinessDate,
    pub end: BusinessDate,
}

impl MonthRange {
    /// Parse a `YYYY-MM` string.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::Validation(format!("month must be YYYY-MM, got '{raw}'"));

        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::for_month(year, month).ok_or_else(invalid)
    }

    /// Build the range for a given year and 1-based month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self { start, end })
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: BusinessDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.start.year(), self.start.month())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_regular_month() {
        let range = MonthRange::parse("2024-02").unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 3, 1));
        assert_eq!(range.to_string(), "2024-02");
    }

    #[test]
    fn december_rolls_into_next_year() {
        let range = MonthRange::parse("2023-12").unwrap();
        assert_eq!(range.end, date(2024, 1, 1));
    }

    #[test]
    fn contains_is_half_open() {
        let range = MonthRange::parse("2024-02").unwrap();
        assert!(range.contains(date(2024, 2, 1)));
        assert!(range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 3, 1)));
        assert!(!range.contains(date(2024, 1, 31)));
    }

    #[test]
    fn rejects_malformed_input() {
        for raw in ["2024-13", "2024-00", "24-02", "2024-2x", "2024/02", "", "2024-002"] {
            assert_matches!(MonthRange::parse(raw), Err(CoreError::Validation(_)), "{raw}");
        }
    }
}
