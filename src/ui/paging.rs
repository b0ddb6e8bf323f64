// Month paging
// show() is the only transition of the Uninitialized -> Showing machine

use crate::models::month::CalendarMonth;
use crate::ui::picker::DatePicker;
use crate::ui::render::{Renderer, TimeEntry};

impl<R: Renderer, E: TimeEntry> DatePicker<R, E> {
    /// Shows a month, materializing it if needed. Accepts un-normalized
    /// month indices (month 12 is January of the next year). Any open
    /// popup is closed first; the scroll transition is animated and
    /// non-blocking, and a `show` issued mid-flight simply starts a new
    /// transition from wherever the frame currently is.
    pub fn show(&mut self, year: i32, month: i32) {
        let target = CalendarMonth::normalize(year, month);

        if self.popup.is_some() {
            self.close_popup();
        }

        self.months.ensure_available_through(&mut self.renderer, target);
        let panel = self
            .months
            .panel(target)
            .expect("target month just materialized");

        // Bring the target panel to the top of the frame.
        let from = self.renderer.scroll_offset();
        let to = -self.renderer.panel_offset(panel);
        self.renderer
            .animate_scroll(from, to, self.settings.scroll_duration_ms);

        self.renderer.set_month_label(&target.label());
        match self.view {
            Some(previous) if previous != target => {
                self.renderer.set_panel_highlighted(panel, true);
                if let Some(previous_panel) = self.months.panel(previous) {
                    self.renderer.set_panel_highlighted(previous_panel, false);
                }
            }
            None => self.renderer.set_panel_highlighted(panel, true),
            // Re-showing the current month keeps its highlight.
            Some(_) => {}
        }
        self.view = Some(target);

        // The back control disappears once the real-world current month is
        // shown; forward paging is always allowed.
        self.renderer
            .set_back_control_visible(target != CalendarMonth::current());

        log::debug!("showing {}", target.label());
    }

    pub fn show_previous_month(&mut self) {
        if let Some(view) = self.view {
            self.show(view.year, view.month as i32 - 1);
        }
    }

    pub fn show_next_month(&mut self) {
        if let Some(view) = self.view {
            self.show(view.year, view.month as i32 + 1);
        }
    }

    /// Host notification that the scroll transition finished. Runs a
    /// pending deferred popup-open, if any.
    pub fn scroll_settled(&mut self) {
        if let Some((month, day)) = self.deferred_open.take() {
            self.open_day(month, day);
        }
    }
}
