//! Date range entry (`YYYY-MM-DD`, the picker's `Y-m-d` format).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Text format used both for input and for the form fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Both ends on the same day (the page's default).
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    /// Days between start and end (0 for a single-day range, negative if inverted).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Checks ordering and the optional span limit (`max_days == 0` disables it).
    pub fn validate(&self, max_days: u32) -> Result<(), FormError> {
        if self.end < self.start {
            return Err(FormError::InvertedRange {
                start: self.start,
                end: self.end,
            });
        }
        let days = self.span_days();
        if max_days > 0 && days > i64::from(max_days) {
            return Err(FormError::RangeTooLong { days, max: max_days });
        }
        Ok(())
    }
}

/// Parses a date typed by the user. Surrounding whitespace is ignored.
pub fn parse_date(input: &str) -> Result<NaiveDate, FormError> {
    let s = input.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| FormError::InvalidDate(s.to_string()))
}

/// Formats a date for the `start_date` / `end_date` fields.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
