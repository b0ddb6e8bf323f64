// Month cache
// Lazily materialized month panels with a forward-only frontier

use std::collections::HashMap;

use crate::models::month::CalendarMonth;
use crate::ui::render::{Banding, CellId, DayDescriptor, PanelId, Renderer};
use crate::utils::date;

/// Map from materialized months to their rendered panels, plus the
/// (month, day) <-> cell index used to route clicks back to dates.
///
/// Months are expensive to render, so they are built lazily and only
/// forward: the frontier is the most recent month added and never rewinds.
pub struct MonthCache {
    panels: HashMap<CalendarMonth, PanelId>,
    cells: HashMap<(CalendarMonth, u32), CellId>,
    cell_days: HashMap<CellId, (CalendarMonth, u32)>,
    frontier: CalendarMonth,
    banding: Banding,
}

impl MonthCache {
    /// Seeds the cache for a calendar whose first shown month is `first`:
    /// builds the tail of the preceding month (the days sharing the first
    /// displayed week row) and leaves the frontier on that preceding
    /// month, so the first `ensure_available_through` builds `first`
    /// itself. The leading panel is not addressable as a month of its own.
    pub fn new<R: Renderer>(renderer: &mut R, first: CalendarMonth) -> Self {
        let previous = first.previous();
        let mut cache = Self {
            panels: HashMap::new(),
            cells: HashMap::new(),
            cell_days: HashMap::new(),
            frontier: previous,
            banding: Banding::Even,
        };

        let panel = renderer.build_month_panel(previous);
        let leading = date::first_weekday_monday_zero(first);
        let last = date::days_in_month(previous);
        for day in (last + 1 - leading)..=last {
            let descriptor = day_descriptor(previous, day, Banding::Odd, true);
            cache.register_cell(renderer.build_day_cell(panel, &descriptor), previous, day);
        }

        cache
    }

    /// Materializes months after the frontier until `target` is covered.
    /// A target at or behind the frontier builds nothing.
    pub fn ensure_available_through<R: Renderer>(&mut self, renderer: &mut R, target: CalendarMonth) {
        while self.frontier < target {
            let month = self.frontier.next();
            self.add_month(renderer, month);
        }
    }

    fn add_month<R: Renderer>(&mut self, renderer: &mut R, month: CalendarMonth) {
        let panel = renderer.build_month_panel(month);
        for day in 1..=date::days_in_month(month) {
            let descriptor = day_descriptor(month, day, self.banding, false);
            self.register_cell(renderer.build_day_cell(panel, &descriptor), month, day);
        }
        self.panels.insert(month, panel);
        self.frontier = month;
        self.banding = self.banding.flip();
        log::debug!("materialized {}", month.label());
    }

    fn register_cell(&mut self, cell: CellId, month: CalendarMonth, day: u32) {
        self.cells.insert((month, day), cell);
        self.cell_days.insert(cell, (month, day));
    }

    /// The panel for a materialized month. `None` means the caller skipped
    /// `ensure_available_through`.
    pub fn panel(&self, month: CalendarMonth) -> Option<PanelId> {
        self.panels.get(&month).copied()
    }

    /// The cell for a materialized day (leading days included).
    pub fn cell(&self, month: CalendarMonth, day: u32) -> Option<CellId> {
        self.cells.get(&(month, day)).copied()
    }

    /// Reverse lookup: which day a rendered cell stands for.
    pub fn day_at(&self, cell: CellId) -> Option<(CalendarMonth, u32)> {
        self.cell_days.get(&cell).copied()
    }

    pub fn frontier(&self) -> CalendarMonth {
        self.frontier
    }
}

fn day_descriptor(month: CalendarMonth, day: u32, banding: Banding, is_leading: bool) -> DayDescriptor {
    let is_today = date::is_today(month, day);
    DayDescriptor {
        year: month.year,
        month: month.month,
        day,
        is_today,
        is_past: !is_today && date::is_past(month, day),
        banding,
        is_leading,
    }
}
