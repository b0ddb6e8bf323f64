// Month model
// Normalized (year, zero-based month) pairs and the name tables

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Short English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English day names, Monday first.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A calendar month. `month` is zero-based (0 = January) and always in
/// `0..=11`; out-of-range input rolls into the year in either direction, so
/// `normalize(2009, 12)` is January 2010 and `normalize(2009, -1)` is
/// December 2008.
///
/// The derived ordering follows calendar order (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

impl CalendarMonth {
    /// Re-expresses an arbitrary (year, month) pair with the month carried
    /// into `0..=11`.
    pub fn normalize(year: i32, month: i32) -> Self {
        let total = year * 12 + month;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32,
        }
    }

    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The real-world current month.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The month immediately after this one.
    pub fn next(self) -> Self {
        Self::normalize(self.year, self.month as i32 + 1)
    }

    /// The month immediately before this one.
    pub fn previous(self) -> Self {
        Self::normalize(self.year, self.month as i32 - 1)
    }

    /// Short name of this month ("Jan").
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Display label of the form "Jan 2010".
    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    /// The first day of this month as a chrono date.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).expect("normalized month")
    }
}
