// Root picker widget
// Owns the selection store, month cache, paging state and popup session;
// the impl is split across picker.rs (construction and read-models),
// paging.rs (month paging) and popup.rs (day popup session)

use chrono::Datelike;

use crate::models::month::CalendarMonth;
use crate::models::settings::PickerSettings;
use crate::models::time::{InstantMs, TimeOfDay};
use crate::services::selection::SelectionStore;
use crate::ui::format;
use crate::ui::month_cache::MonthCache;
use crate::ui::popup::PopupSession;
use crate::ui::render::{DaySummary, PopupTimeRow, Renderer, SelectionRow, TimeEntry};
use crate::utils::date;

/// Multi-date/time picker core. Generic over the host's rendering and
/// time-entry collaborators; everything else is owned state.
pub struct DatePicker<R: Renderer, E: TimeEntry> {
    pub(super) renderer: R,
    pub(super) entry: E,
    pub(super) settings: PickerSettings,
    pub(super) selection: SelectionStore,
    pub(super) months: MonthCache,
    pub(super) view: Option<CalendarMonth>,
    pub(super) popup: Option<PopupSession>,
    /// Last confirmed/read entry value, used as the default for the next
    /// popup open.
    pub(super) last_time: TimeOfDay,
    /// Popup open waiting for the paging animation to settle.
    pub(super) deferred_open: Option<(CalendarMonth, u32)>,
}

impl<R: Renderer, E: TimeEntry> DatePicker<R, E> {
    /// Builds the widget: seeds the leading days of the month before the
    /// real-world current month, shows the current month and renders the
    /// empty selection list.
    pub fn new(mut renderer: R, entry: E, settings: PickerSettings) -> Self {
        let current = CalendarMonth::current();
        let months = MonthCache::new(&mut renderer, current);
        let mut picker = Self {
            renderer,
            entry,
            last_time: settings.default_entry_time,
            settings,
            selection: SelectionStore::new(),
            months,
            view: None,
            popup: None,
            deferred_open: None,
        };
        picker.show(current.year, current.month as i32);
        picker.refresh_selection_list();
        log::info!("date picker initialized at {}", current.label());
        picker
    }

    /// Pages to the month containing the instant (animated, with the popup
    /// opening once the scroll settles) or opens the day's popup directly
    /// when its month is already shown.
    pub fn row_clicked(&mut self, instant: InstantMs) {
        let date = instant.to_datetime().date_naive();
        let month = CalendarMonth::containing(date);
        if self.view == Some(month) {
            self.open_day(month, date.day());
        } else {
            self.show(month.year, month.month as i32);
            self.deferred_open = Some((month, date.day()));
        }
    }

    /// Delete control on a flat-list row.
    pub fn row_delete_clicked(&mut self, instant: InstantMs) {
        if !self.selection.remove(instant) {
            return;
        }
        let date = instant.to_datetime().date_naive();
        self.refresh_day(CalendarMonth::containing(date), date.day());
        self.refresh_popup_times();
        self.refresh_selection_list();
    }

    /// One line per selected instant, ascending, `YYYY-MM-DDTHH:MM:00`,
    /// no trailing newline.
    pub fn serialize_selections(&self) -> String {
        format::serialize_selections(&self.selection)
    }

    pub fn current_view(&self) -> Option<CalendarMonth> {
        self.view
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn entry(&self) -> &E {
        &self.entry
    }

    pub(super) fn refresh_day(&mut self, month: CalendarMonth, day: u32) {
        let Some(cell) = self.months.cell(month, day) else {
            return;
        };
        let Some((start, end)) = date::day_bounds(month, day) else {
            return;
        };
        let mut lines = Vec::new();
        let mut truncated = false;
        for instant in self.selection.query(start, end) {
            if lines.len() == 2 {
                truncated = true;
                break;
            }
            lines.push(format::format_time(instant));
        }
        self.renderer.set_day_summary(cell, &DaySummary { lines, truncated });
    }

    pub(super) fn refresh_selection_list(&mut self) {
        let rows: Vec<SelectionRow> = self
            .selection
            .all()
            .iter()
            .map(|&instant| SelectionRow {
                instant,
                label: format::format_date_label(instant),
            })
            .collect();
        self.renderer.set_selection_rows(&rows);
    }

    pub(super) fn refresh_popup_times(&mut self) {
        let Some(session) = self.popup else {
            return;
        };
        let Some((start, end)) = date::day_bounds(session.month, session.day) else {
            return;
        };
        let rows: Vec<PopupTimeRow> = self
            .selection
            .query(start, end)
            .map(|instant| PopupTimeRow {
                instant,
                label: format::format_time(instant),
            })
            .collect();
        self.renderer.set_popup_times(session.handle, &rows);
    }
}
