use crate::error::{GardenError, Result};
use serde::Serialize;
use std::fmt;

/// Three-letter month abbreviations as they appear in catalog date windows.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Separator between the two dates of a window, e.g. `"Mar 22 - Apr 5"`.
const RANGE_SEPARATOR: &str = " - ";

/// Map a month abbreviation (`"Jan"`..`"Dec"`) to its number (1-12).
///
/// This is the only month lookup in the crate; everything that reads a
/// month out of text goes through here.
pub fn month_number(abbr: &str) -> Option<u32> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == abbr)
        .map(|idx| idx as u32 + 1)
}

pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    index_of(month).map(|idx| MONTH_ABBREVIATIONS[idx])
}

pub fn month_name(month: u32) -> Option<&'static str> {
    index_of(month).map(|idx| MONTH_NAMES[idx])
}

fn index_of(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

/// An inclusive, recurring window of months.
///
/// `start > end` means the window wraps through December into January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRange {
    start: u32,
    end: u32,
}

impl MonthRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        for month in [start, end] {
            if index_of(month).is_none() {
                return Err(GardenError::Validation(format!(
                    "Month must be between 1 and 12, got {}",
                    month
                )));
            }
        }
        Ok(Self { start, end })
    }

    pub fn single(month: u32) -> Result<Self> {
        Self::new(month, month)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Whether `month` lies on the cyclic arc from `start` to `end`.
    pub fn contains(&self, month: u32) -> bool {
        if self.wraps() {
            month >= self.start || month <= self.end
        } else {
            month >= self.start && month <= self.end
        }
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = month_abbreviation(self.start).unwrap_or("?");
        let end = month_abbreviation(self.end).unwrap_or("?");
        if self.start == self.end {
            write!(f, "{}", start)
        } else {
            write!(f, "{}-{}", start, end)
        }
    }
}

/// Membership test for an optional window. No window never matches.
pub fn in_window(range: Option<MonthRange>, month: u32) -> bool {
    range.is_some_and(|r| r.contains(month))
}

/// Parse a seasonal date window such as `"Mar 22 - Apr 5"` or `"Jun 15"`.
///
/// Absent or blank input yields `Ok(None)`. Only the month of each date is
/// kept; the day is ignored. An unknown month abbreviation is an error.
pub fn parse_window(input: Option<&str>) -> Result<Option<MonthRange>> {
    let Some(text) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let mut dates = text.split(RANGE_SEPARATOR);
    let start = match dates.next() {
        Some(date) => date_month(date, text)?,
        None => return Ok(None),
    };
    let end = match dates.next().filter(|d| !d.trim().is_empty()) {
        Some(date) => date_month(date, text)?,
        None => start,
    };

    MonthRange::new(start, end).map(Some)
}

fn date_month(date: &str, window: &str) -> Result<u32> {
    let abbr = date.split_whitespace().next().unwrap_or_default();
    month_number(abbr).ok_or_else(|| {
        GardenError::Validation(format!(
            "Unknown month abbreviation '{}' in date window '{}'",
            abbr, window
        ))
    })
}
