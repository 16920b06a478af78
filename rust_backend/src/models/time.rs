//! Calendar date range for imagery queries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ValidationError, ValidationResult};

/// Inclusive calendar date range.
///
/// Construction enforces `start <= end`; an inverted range is a
/// [`ValidationError`], never silently corrected. This guarantees no imagery
/// query is ever issued for an inconsistent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> ValidationResult<Self> {
        if start > end {
            return Err(ValidationError::DateRangeInverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a range from two ISO 8601 (`YYYY-MM-DD`) date strings.
    pub fn parse(start: &str, end: &str) -> ValidationResult<Self> {
        let start = parse_iso_date(start)?;
        let end = parse_iso_date(end)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    /// Whether a timestamp falls within `[start, end]`, both endpoints
    /// inclusive (the whole end day counts).
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_iso(), self.end_iso())
    }
}

fn parse_iso_date(s: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ValidationError::MalformedDate(s.to_string()))
}
