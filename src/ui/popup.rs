// Day popup
// Per-day transient session for adding and removing time entries

use crate::models::month::CalendarMonth;
use crate::models::time::InstantMs;
use crate::ui::picker::DatePicker;
use crate::ui::render::{CellId, PopupId, PopupView, Renderer, TimeEntry};
use crate::utils::date;

/// The one open popup, bound to a specific day.
#[derive(Debug, Clone, Copy)]
pub struct PopupSession {
    pub month: CalendarMonth,
    pub day: u32,
    pub handle: PopupId,
}

/// Keys the popup reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
    Enter,
    Escape,
}

impl<R: Renderer, E: TimeEntry> DatePicker<R, E> {
    /// Click routing for day cells. Unknown cells and past days are
    /// ignored; today stays clickable.
    pub fn day_clicked(&mut self, cell: CellId) {
        let Some((month, day)) = self.months.day_at(cell) else {
            return;
        };
        if !date::is_today(month, day) && date::is_past(month, day) {
            return;
        }
        self.open_day(month, day);
    }

    /// Opens the popup for a day, closing any existing session first. The
    /// time entry is reset to the last-used time (initially the settings
    /// default) and focused.
    pub(super) fn open_day(&mut self, month: CalendarMonth, day: u32) {
        if self.popup.is_some() {
            self.close_popup();
        }

        let anchor = self.months.cell(month, day).expect("clicked day materialized");
        self.entry
            .configure(self.last_time, self.settings.show_24_hours);
        self.entry.focus();

        let view = PopupView {
            day,
            month_name: month.name(),
        };
        let handle = self.renderer.open_popup(anchor, &view);
        self.popup = Some(PopupSession { month, day, handle });
        self.refresh_popup_times();
        log::debug!("opened popup for {} {}", day, month.label());
    }

    /// Confirms the pending entry value. Absent or invalid values, times
    /// that do not exist locally, and duplicates are all silent no-ops.
    pub fn confirm_entry(&mut self) {
        let Some(session) = self.popup else {
            return;
        };
        let Some(time) = self.entry.time() else {
            return;
        };
        let Some(instant) = InstantMs::from_parts(session.month, session.day, time) else {
            return;
        };
        if !self.selection.add(instant) {
            return;
        }
        self.refresh_popup_times();
        self.refresh_day(session.month, session.day);
        self.refresh_selection_list();
    }

    /// Delete control on a popup time row.
    pub fn delete_entry(&mut self, instant: InstantMs) {
        let Some(session) = self.popup else {
            return;
        };
        if !self.selection.remove(instant) {
            return;
        }
        self.refresh_popup_times();
        self.refresh_day(session.month, session.day);
        self.refresh_selection_list();
    }

    /// Closes the popup view. A valid entry value becomes the default for
    /// future opens; an empty entry leaves the previous default alone.
    pub fn close_popup(&mut self) {
        let Some(session) = self.popup.take() else {
            return;
        };
        self.renderer.close_popup(session.handle);
        if let Some(time) = self.entry.time() {
            self.last_time = time;
        }
        log::debug!("closed popup for {} {}", session.day, session.month.label());
    }

    /// Keyboard contract: Enter confirms, Escape closes.
    pub fn key_pressed(&mut self, key: PopupKey) {
        match key {
            PopupKey::Enter => self.confirm_entry(),
            PopupKey::Escape => self.close_popup(),
        }
    }
}
