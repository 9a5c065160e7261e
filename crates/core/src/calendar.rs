//! Month navigation and date-range helpers for the attendance calendar.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Date;

/// Upper bound on the length of a bulk holiday period.
pub const MAX_HOLIDAY_PERIOD_DAYS: i64 = 366;

/// Earliest year a [`YearMonth`] may hold.
pub const MIN_YEAR: i32 = 1;

/// Latest year a [`YearMonth`] may hold. Labels stay four digits wide.
pub const MAX_YEAR: i32 = 9999;

/// A calendar month. `month` is 1-based (January = 1).
///
/// Only constructible within `MIN_YEAR..=MAX_YEAR`, so both bounding dates
/// always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
    #[serde(skip)]
    first: Date,
    #[serde(skip)]
    last: Date,
}

impl YearMonth {
    /// Build a month, rejecting month numbers outside `1..=12` and years
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::Validation(format!(
                "Month must be between 1 and 12, got {month}"
            )));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CoreError::Validation(format!(
                "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
        let out_of_range = || CoreError::Validation(format!("{year:04}-{month:02} is out of range"));
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let last = if month == 12 {
            NaiveDate::from_ymd_opt(year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).and_then(|d| d.pred_opt())
        }
        .ok_or_else(out_of_range)?;
        Ok(Self {
            year,
            month,
            first,
            last,
        })
    }

    /// The month containing `date`.
    pub fn of(date: Date) -> Result<Self, CoreError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The preceding month; January wraps to December of the previous year.
    /// `None` before `MIN_YEAR`.
    pub fn prev(self) -> Option<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12).ok()
        } else {
            Self::new(self.year, self.month - 1).ok()
        }
    }

    /// The following month; December wraps to January of the next year.
    /// `None` after `MAX_YEAR`.
    pub fn next(self) -> Option<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1).ok()
        } else {
            Self::new(self.year, self.month + 1).ok()
        }
    }

    pub fn first_day(self) -> Date {
        self.first
    }

    pub fn last_day(self) -> Date {
        self.last
    }

    pub fn days_in_month(self) -> u32 {
        self.last.day()
    }

    /// Whether `date` falls within this month.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every date of the month in order.
    pub fn dates(self) -> Vec<Date> {
        dates_inclusive(self.first, self.last)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Every calendar date from `start` to `end`, both inclusive.
///
/// Returns an empty list when `start > end`.
pub fn dates_inclusive(start: Date, end: Date) -> Vec<Date> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Validate a bulk holiday range and return its dates.
pub fn holiday_period_dates(start: Date, end: Date) -> Result<Vec<Date>, CoreError> {
    if start > end {
        return Err(CoreError::Validation(
            "Start date cannot be after end date".to_string(),
        ));
    }
    let span = (end - start).num_days() + 1;
    if span > MAX_HOLIDAY_PERIOD_DAYS {
        return Err(CoreError::Validation(format!(
            "Holiday period spans {span} days, maximum is {MAX_HOLIDAY_PERIOD_DAYS}"
        )));
    }
    Ok(dates_inclusive(start, end))
}
