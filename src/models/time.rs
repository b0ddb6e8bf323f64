// Time models
// Minute-resolution wall-clock times and absolute selected instants

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::month::CalendarMonth;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// A wall-clock time of day at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeOfDay {
    /// The built-in default entry time.
    pub const NOON: Self = Self {
        hours: 12,
        minutes: 0,
    };

    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        (hours < 24 && minutes < 60).then_some(Self { hours, minutes })
    }

    /// Parses `"H:MM"` / `"HH:MM"` text, as typed into a time-entry field.
    pub fn parse(text: &str) -> Result<Self> {
        let (hours, minutes) = text
            .trim()
            .split_once(':')
            .with_context(|| format!("time '{}' is missing a ':' separator", text))?;
        let hours: u32 = hours
            .parse()
            .with_context(|| format!("invalid hour in '{}'", text))?;
        let minutes: u32 = minutes
            .parse()
            .with_context(|| format!("invalid minute in '{}'", text))?;
        match Self::new(hours, minutes) {
            Some(time) => Ok(time),
            None => bail!("time '{}' is out of range", text),
        }
    }
}

/// An absolute point in time: epoch milliseconds truncated to minute
/// resolution. This is the unit stored by the selection store and emitted
/// by the serialization contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstantMs(i64);

impl InstantMs {
    /// Wraps raw epoch milliseconds, truncating seconds to zero.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis - millis.rem_euclid(MILLIS_PER_MINUTE))
    }

    /// Composes the instant for a day and time of day, interpreted in the
    /// local timezone. `None` when the date does not exist (e.g. Feb 30)
    /// or the local time is skipped by a DST transition.
    pub fn from_parts(month: CalendarMonth, day: u32, time: TimeOfDay) -> Option<Self> {
        let naive = NaiveDate::from_ymd_opt(month.year, month.month + 1, day)?
            .and_hms_opt(time.hours, time.minutes, 0)?;
        let local = naive.and_local_timezone(Local).earliest()?;
        Some(Self::from_millis(local.timestamp_millis()))
    }

    pub fn millis(self) -> i64 {
        self.0
    }

    pub fn to_datetime(self) -> DateTime<Local> {
        Local
            .timestamp_millis_opt(self.0)
            .earliest()
            .expect("valid epoch milliseconds")
    }
}
