use super::window::{month_abbreviation, month_number};
use crate::error::{GardenError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::{fmt, str::FromStr};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A day of the year without a year, written like `"May 17"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// Builds a month-day that exists in every year (Feb 29 is rejected).
    pub fn new(month: u32, day: u32) -> Result<Self> {
        // 2001 is not a leap year
        NaiveDate::from_ymd_opt(2001, month, day)
            .map(|_| Self { month, day })
            .ok_or_else(|| {
                GardenError::Validation(format!("Invalid calendar day: month {} day {}", month, day))
            })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    fn midnight(&self, year: i32) -> Option<NaiveDateTime> {
        self.in_year(year).and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

impl FromStr for MonthDay {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(abbr), Some(day), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(GardenError::Parse(format!(
                "Expected a date like 'May 17', got '{}'",
                s
            )));
        };
        let month = month_number(abbr)
            .ok_or_else(|| GardenError::Parse(format!("Unknown month abbreviation '{}'", abbr)))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| GardenError::Parse(format!("Invalid day '{}' in '{}'", day, s)))?;
        Self::new(month, day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            month_abbreviation(self.month).unwrap_or("?"),
            self.day
        )
    }
}

/// The two frost boundaries that bracket the growing season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrostDates {
    pub last_spring: MonthDay,
    pub first_fall: MonthDay,
}

impl Default for FrostDates {
    /// Montana zone 4b-6a: last spring frost May 17, first fall frost Sep 22.
    fn default() -> Self {
        Self {
            last_spring: MonthDay { month: 5, day: 17 },
            first_fall: MonthDay { month: 9, day: 22 },
        }
    }
}

impl FrostDates {
    pub fn new(last_spring: MonthDay, first_fall: MonthDay) -> Result<Self> {
        if (first_fall.month, first_fall.day) <= (last_spring.month, last_spring.day) {
            return Err(GardenError::Validation(format!(
                "First fall frost ({}) must come after last spring frost ({})",
                first_fall, last_spring
            )));
        }
        Ok(Self {
            last_spring,
            first_fall,
        })
    }

    /// Frost-free days between the two boundaries, counted in a common year.
    pub fn growing_season_days(&self) -> i64 {
        match (self.last_spring.in_year(2001), self.first_fall.in_year(2001)) {
            (Some(spring), Some(fall)) => (fall - spring).num_days(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Until,
    Past,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrostCountdown {
    pub event: String,
    pub days: i64,
    pub direction: Direction,
}

impl FrostCountdown {
    pub const SEASON_ENDED: &'static str = "Growing season has ended";

    fn until(event: String, days: i64) -> Self {
        Self {
            event,
            days,
            direction: Direction::Until,
        }
    }

    fn season_ended() -> Self {
        Self {
            event: Self::SEASON_ENDED.to_string(),
            days: 0,
            direction: Direction::Past,
        }
    }
}

/// Count down to the next frost boundary of `now`'s year.
///
/// Boundaries fall at midnight. Once the fall boundary has passed the
/// countdown reports the season as ended; it does not roll into next
/// year's spring.
pub fn frost_countdown(now: NaiveDateTime, dates: &FrostDates) -> FrostCountdown {
    let year = now.year();
    let boundaries = [
        ("Last Spring Frost", dates.last_spring),
        ("First Fall Frost", dates.first_fall),
    ];

    for (label, boundary) in boundaries {
        let Some(at) = boundary.midnight(year) else {
            continue;
        };
        if now < at {
            let millis = (at - now).num_milliseconds();
            let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
            return FrostCountdown::until(format!("{} ({})", label, boundary), days);
        }
    }

    FrostCountdown::season_ended()
}
