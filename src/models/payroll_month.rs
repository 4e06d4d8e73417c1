//! Payroll month model.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The calendar month a payroll run covers, written as `YYYY-MM`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollMonth;
///
/// let month = PayrollMonth::parse("2026-03").unwrap();
/// assert_eq!(month.to_string(), "2026-03");
/// assert_eq!(month.year(), 2026);
/// assert_eq!(month.month(), 3);
/// assert!(PayrollMonth::parse("2026-13").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayrollMonth {
    first_day: NaiveDate,
}

impl PayrollMonth {
    /// Parses a `YYYY-MM` string.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let trimmed = value.trim();
        NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
            .ok()
            .filter(|_| trimmed.len() == 7)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| EngineError::InvalidPayrollMonth {
                value: value.to_string(),
            })
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Returns the month number (1-12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }
}

impl fmt::Display for PayrollMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%Y-%m"))
    }
}

impl TryFrom<String> for PayrollMonth {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PayrollMonth> for String {
    fn from(month: PayrollMonth) -> Self {
        month.to_string()
    }
}
