//! Calendar month identifying one monthly archive page.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::ComposeError;

/// A year and month pair, ordered chronologically.
///
/// Displays and parses as `YYYY-MM` (for example `2024-05`), the form used
/// for monthly page names and the `latest_date` shown on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a year-month.
    ///
    /// # Errors
    ///
    /// Returns error if `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, ComposeError> {
        if !(1..=12).contains(&month) {
            return Err(ComposeError::InvalidYearMonth(format!(
                "{year}-{month:02}: month must be between 1 and 12"
            )));
        }
        Ok(Self { year, month })
    }

    /// Returns the year-month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ComposeError::InvalidYearMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_month() {
        let ym = YearMonth::new(2024, 5).expect("Should accept May");
        assert_eq!(ym.to_string(), "2024-05");
    }

    #[test]
    fn test_parse_roundtrip() {
        let ym: YearMonth = "2023-11".parse().expect("Should parse year-month");
        assert_eq!(ym.year(), 2023);
        assert_eq!(ym.month(), 11);
    }

    #[test]
    fn test_parse_rejects_invalid_month() {
        let result = "2023-13".parse::<YearMonth>();
        assert!(matches!(result, Err(ComposeError::InvalidYearMonth(_))));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-month".parse::<YearMonth>().is_err());
        assert!("2023".parse::<YearMonth>().is_err());
        assert!("".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        // Arrange
        let mut months = vec![
            YearMonth::new(2023, 3).unwrap(),
            YearMonth::new(2022, 11).unwrap(),
            YearMonth::new(2023, 1).unwrap(),
        ];

        // Act
        months.sort();

        // Assert
        let rendered: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["2022-11", "2023-01", "2023-03"]);
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("Leap day should exist");
        assert_eq!(YearMonth::of(date).to_string(), "2024-02");
    }
}
