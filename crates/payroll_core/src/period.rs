use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("expected MONTH-YEAR such as 3-2023, got {0:?}")]
    Malformed(String),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("day {day} does not exist in {month}/{year}")]
    InvalidStartDay { day: u32, month: u32, year: i32 },
}

/// A calendar month that pay is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayPeriod {
    year: i32,
    month: u32,
}

impl PayPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Parses the `M-YYYY` form taken on the command line (`3-2023`, `11-2022`).
    pub fn parse(input: &str) -> Result<Self, PeriodError> {
        let malformed = || PeriodError::Malformed(input.to_string());
        let (month, year) = input.trim().split_once('-').ok_or_else(malformed)?;
        let month: u32 = month.trim().parse().map_err(|_| malformed())?;
        let year: i32 = year.trim().parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }

    /// The calendar month before the one containing `today`.
    pub fn previous_of(today: NaiveDate) -> Self {
        if today.month() == 1 {
            Self {
                year: today.year() - 1,
                month: 12,
            }
        } else {
            Self {
                year: today.year(),
                month: today.month() - 1,
            }
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name, e.g. `March`.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Publication window for this period: from `start_day` of the month at
    /// midnight (inclusive) up to midnight on the first of the next month
    /// (exclusive).
    pub fn window(&self, start_day: u32) -> Result<PayWindow, PeriodError> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, start_day).ok_or(
            PeriodError::InvalidStartDay {
                day: start_day,
                month: self.month,
                year: self.year,
            },
        )?;
        let next = self.next();
        let end = NaiveDate::from_ymd_opt(next.year, next.month, 1).ok_or(
            PeriodError::InvalidStartDay {
                day: 1,
                month: next.month,
                year: next.year,
            },
        )?;
        Ok(PayWindow {
            start: start.and_time(chrono::NaiveTime::MIN),
            end: end.and_time(chrono::NaiveTime::MIN),
        })
    }
}

impl FromStr for PayPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

/// Half-open publication date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PayWindow {
    pub fn contains(&self, published: NaiveDateTime) -> bool {
        published >= self.start && published < self.end
    }
}
