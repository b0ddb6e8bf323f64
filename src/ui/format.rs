// Formatting helpers
// Time/date labels for day summaries and the flat list, plus the
// serialized output contract

use chrono::{Datelike, Local, Timelike};

use crate::models::month::{DAY_NAMES, MONTH_NAMES};
use crate::models::time::InstantMs;
use crate::services::selection::SelectionStore;

/// `H:MM`, 24-hour clock, unpadded hour, zero-padded minutes.
pub fn format_time(instant: InstantMs) -> String {
    let time = instant.to_datetime();
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Flat-list row label: weekday, day and month name, the year only when
/// the instant falls in a future calendar year, then the time.
/// E.g. `"Fri 5 Jan, 9:30"` or `"Sat 1 Jan 2028, 12:00"`.
pub fn format_date_label(instant: InstantMs) -> String {
    let date = instant.to_datetime();
    let weekday = DAY_NAMES[date.weekday().num_days_from_monday() as usize];
    let mut label = format!("{} {} {}", weekday, date.day(), MONTH_NAMES[date.month0() as usize]);
    if date.year() > Local::now().year() {
        label.push_str(&format!(" {}", date.year()));
    }
    label.push_str(&format!(", {}", format_time(instant)));
    label
}

/// The widget's sole externally consumable artifact: one line per selected
/// instant, ascending, local `YYYY-MM-DDTHH:MM:00`, newline-separated with
/// no trailing newline.
pub fn serialize_selections(store: &SelectionStore) -> String {
    store
        .all()
        .iter()
        .map(|instant| instant.to_datetime().format("%Y-%m-%dT%H:%M:%S").to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
