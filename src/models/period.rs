//! Date ranges and budget periods
//!
//! A `DateRange` is an inclusive `[start, end]` span of calendar days. A
//! `BudgetPeriod` tags how long a budget's range is meant to be.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting an end before the start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if end < start {
            return Err(PeriodError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single calendar month
    pub fn month(year: i32, month: u32) -> Result<Self, PeriodError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PeriodError::InvalidMonth { year, month })?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(PeriodError::InvalidMonth { year, month })?;
        Ok(Self {
            start,
            end: next - Duration::days(1),
        })
    }

    /// A single calendar year
    pub fn year(year: i32) -> Result<Self, PeriodError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PeriodError::InvalidYear(year))?;
        Ok(Self { start, end })
    }

    /// The `days` calendar days ending on (and including) `end`
    ///
    /// Returns `None` for a zero-length window or one that starts before
    /// the earliest representable date.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Option<Self> {
        if days == 0 {
            return None;
        }
        let start = end.checked_sub_signed(Duration::days(i64::from(days) - 1))?;
        Some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this range (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the range, counting both ends
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate over every day in the range, oldest first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.num_days()).map(move |offset| start + Duration::days(offset))
    }

    /// Parse "YYYY-MM-DD..YYYY-MM-DD" or a month "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PeriodError> {
        let s = s.trim();
        if let Some((start, end)) = s.split_once("..") {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            return Self::new(start, end);
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        Self::month(year, month)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, PeriodError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| PeriodError::InvalidFormat(s.to_string()))
}

/// The (year, month) that lies `back` months before the month of `date`
pub fn months_before(date: NaiveDate, back: u32) -> (i32, u32) {
    let index = date.year() * 12 + date.month0() as i32 - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// How long a budget's limit applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// The calendar month or year that contains `date`
    pub fn range_containing(&self, date: NaiveDate) -> DateRange {
        let range = match self {
            Self::Monthly => DateRange::month(date.year(), date.month()),
            Self::Yearly => DateRange::year(date.year()),
        };
        // A date chrono could build always has a valid month and year
        range.unwrap_or(DateRange {
            start: date,
            end: date,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Mensal"),
            Self::Yearly => write!(f, "Anual"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" | "mensal" => Ok(Self::Monthly),
            "yearly" | "anual" => Ok(Self::Yearly),
            _ => Err(PeriodError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    InvalidMonth { year: i32, month: u32 },
    InvalidYear(i32),
    InvalidFormat(String),
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => {
                write!(f, "End date {} is before start date {}", end, start)
            }
            Self::InvalidMonth { year, month } => write!(f, "Invalid month: {}-{:02}", year, month),
            Self::InvalidYear(year) => write!(f, "Invalid year: {}", year),
            Self::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
        }
    }
}

impl std::error::Error for PeriodError {}
