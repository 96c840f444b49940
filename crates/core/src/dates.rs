//! Calendar arithmetic on `yyyy/MM/dd` dates
//!
//! Every request carries two dates; each operation is applied to both (or, for
//! the difference, to the pair).

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2}$").expect("date pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("The {field} date must use the yyyy/MM/dd format")]
    DateFormat { field: &'static str },

    #[error("The {field} date '{value}' does not exist")]
    InvalidDate { field: &'static str, value: String },
}

impl DateError {
    pub fn code(&self) -> &'static str {
        match self {
            DateError::DateFormat { .. } => "date_format",
            DateError::InvalidDate { .. } => "invalid_date",
        }
    }
}

/// Raw request body: two dates as text
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatePair {
    pub date1: String,
    pub date2: String,
}

impl DatePair {
    pub fn new(date1: impl Into<String>, date2: impl Into<String>) -> Self {
        DatePair {
            date1: date1.into(),
            date2: date2.into(),
        }
    }

    /// Validate the format of both dates, then parse them.
    pub fn parse(&self) -> Result<(NaiveDate, NaiveDate), DateError> {
        check_format(&self.date1, "first")?;
        check_format(&self.date2, "second")?;
        Ok((
            parse_date(&self.date1, "first")?,
            parse_date(&self.date2, "second")?,
        ))
    }
}

fn check_format(value: &str, field: &'static str) -> Result<(), DateError> {
    if DATE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(DateError::DateFormat { field })
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DateError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

pub fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

pub fn last_day_of_year(date: NaiveDate) -> NaiveDate {
    date.with_month(12)
        .and_then(|d| d.with_day(31))
        .unwrap_or(date)
}

pub fn days_in_year(date: NaiveDate) -> i64 {
    days_between(first_day_of_year(date), last_day_of_year(date)) + 1
}

/// Week of the month, counting 7-day blocks from the 1st
pub fn week_of_month(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DifferenceOutput {
    pub days: i64,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct YearBounds {
    pub date: NaiveDate,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct YearLength {
    pub date: NaiveDate,
    pub days: i64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthWeek {
    pub date: NaiveDate,
    pub week: u32,
}

/// Output for operations applied to each date of the pair
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PairOutput<T> {
    pub first: T,
    pub second: T,
}

pub fn difference(pair: &DatePair) -> Result<DifferenceOutput, DateError> {
    let (a, b) = pair.parse()?;
    let days = days_between(a, b);
    Ok(DifferenceOutput {
        days,
        message: format!("{days} days"),
    })
}

pub fn year_bounds(pair: &DatePair) -> Result<PairOutput<YearBounds>, DateError> {
    let bounds = |date| YearBounds {
        date,
        first_day: first_day_of_year(date),
        last_day: last_day_of_year(date),
    };
    let (a, b) = pair.parse()?;
    Ok(PairOutput {
        first: bounds(a),
        second: bounds(b),
    })
}

pub fn year_lengths(pair: &DatePair) -> Result<PairOutput<YearLength>, DateError> {
    let (a, b) = pair.parse()?;
    Ok(PairOutput {
        first: YearLength {
            date: a,
            days: days_in_year(a),
        },
        second: YearLength {
            date: b,
            days: days_in_year(b),
        },
    })
}

pub fn month_weeks(pair: &DatePair) -> Result<PairOutput<MonthWeek>, DateError> {
    let (a, b) = pair.parse()?;
    Ok(PairOutput {
        first: MonthWeek {
            date: a,
            week: week_of_month(a),
        },
        second: MonthWeek {
            date: b,
            week: week_of_month(b),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ============================================================================
    // parsing tests
    // ============================================================================

    #[test]
    fn test_parse_valid_pair() {
        let (a, b) = DatePair::new("2024/02/29", "2023/12/31").parse().unwrap();
        assert_eq!(a, date(2024, 2, 29));
        assert_eq!(b, date(2023, 12, 31));
    }

    #[test]
    fn test_parse_rejects_dashes() {
        let err = DatePair::new("2024-02-29", "2023/12/31").parse().unwrap_err();
        assert_eq!(err, DateError::DateFormat { field: "first" });
    }

    #[test]
    fn test_parse_rejects_short_month() {
        let err = DatePair::new("2024/02/29", "2023/1/31").parse().unwrap_err();
        assert_eq!(err, DateError::DateFormat { field: "second" });
    }

    #[test]
    fn test_format_checked_before_calendar() {
        // first date is not a real day, second is malformed: format errors win
        let err = DatePair::new("2023/02/30", "bad").parse().unwrap_err();
        assert_eq!(err.code(), "date_format");
    }

    #[test]
    fn test_parse_rejects_nonexistent_day() {
        let err = DatePair::new("2023/02/29", "2023/01/01").parse().unwrap_err();
        assert_eq!(
            err,
            DateError::InvalidDate {
                field: "first",
                value: "2023/02/29".to_string()
            }
        );
    }

    // ============================================================================
    // arithmetic tests
    // ============================================================================

    #[test]
    fn test_days_between_is_absolute() {
        assert_eq!(days_between(date(2024, 1, 10), date(2024, 1, 1)), 9);
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 10)), 9);
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(first_day_of_year(date(2024, 6, 15)), date(2024, 1, 1));
        assert_eq!(last_day_of_year(date(2024, 6, 15)), date(2024, 12, 31));
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(date(2024, 3, 1)), 366);
        assert_eq!(days_in_year(date(2023, 3, 1)), 365);
        assert_eq!(days_in_year(date(1900, 3, 1)), 365);
        assert_eq!(days_in_year(date(2000, 3, 1)), 366);
    }

    #[test]
    fn test_week_of_month() {
        assert_eq!(week_of_month(date(2023, 1, 1)), 1);
        assert_eq!(week_of_month(date(2023, 1, 7)), 1);
        assert_eq!(week_of_month(date(2023, 1, 8)), 2);
        assert_eq!(week_of_month(date(2023, 1, 31)), 5);
    }

    // ============================================================================
    // request-level tests
    // ============================================================================

    #[test]
    fn test_difference_message() {
        let out = difference(&DatePair::new("2024/01/01", "2024/12/31")).unwrap();
        assert_eq!(out.days, 365);
        assert_eq!(out.message, "365 days");
    }

    #[test]
    fn test_year_lengths_pair() {
        let out = year_lengths(&DatePair::new("2024/05/05", "2023/05/05")).unwrap();
        assert_eq!(out.first.days, 366);
        assert_eq!(out.second.days, 365);
    }

    #[test]
    fn test_month_weeks_pair() {
        let out = month_weeks(&DatePair::new("2023/01/31", "2023/02/14")).unwrap();
        assert_eq!(out.first.week, 5);
        assert_eq!(out.second.week, 2);
    }

    #[test]
    fn test_year_bounds_pair() {
        let out = year_bounds(&DatePair::new("2020/02/02", "2021/11/11")).unwrap();
        assert_eq!(out.first.first_day, date(2020, 1, 1));
        assert_eq!(out.second.last_day, date(2021, 12, 31));
    }
}
