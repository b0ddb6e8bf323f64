// Date utility functions
// Calendar arithmetic over normalized months

use chrono::{Datelike, Local, NaiveDate};

use crate::models::month::CalendarMonth;
use crate::models::time::InstantMs;

/// Number of days in the month, honoring leap years.
pub fn days_in_month(month: CalendarMonth) -> u32 {
    month
        .next()
        .first_day()
        .pred_opt()
        .expect("valid calendar date")
        .day()
}

/// Weekday of day 1, remapped so Monday is 0 and Sunday is 6.
pub fn first_weekday_monday_zero(month: CalendarMonth) -> u32 {
    month.first_day().weekday().num_days_from_monday()
}

/// True iff the date is the real-world current day.
pub fn is_today(month: CalendarMonth, day: u32) -> bool {
    let today = Local::now().date_naive();
    month.year == today.year() && month.month == today.month0() && day == today.day()
}

/// True iff the date's local start-of-day instant is strictly before now.
/// Note that this holds for today as well; callers that want "past but not
/// today" check [`is_today`] first.
pub fn is_past(month: CalendarMonth, day: u32) -> bool {
    match day_start(month, day) {
        Some(start) => start.millis() < Local::now().timestamp_millis(),
        None => false,
    }
}

/// The local-midnight instant starting the given day. `None` when the date
/// does not exist or midnight is skipped by a DST transition.
pub fn day_start(month: CalendarMonth, day: u32) -> Option<InstantMs> {
    let date = NaiveDate::from_ymd_opt(month.year, month.month + 1, day)?;
    midnight_instant(date)
}

/// The instants bounding a day: its own local midnight and the next one.
pub fn day_bounds(month: CalendarMonth, day: u32) -> Option<(InstantMs, InstantMs)> {
    let date = NaiveDate::from_ymd_opt(month.year, month.month + 1, day)?;
    let start = midnight_instant(date)?;
    let end = midnight_instant(date.succ_opt()?)?;
    Some((start, end))
}

fn midnight_instant(date: NaiveDate) -> Option<InstantMs> {
    let local = date
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(Local)
        .earliest()?;
    Some(InstantMs::from_millis(local.timestamp_millis()))
}
