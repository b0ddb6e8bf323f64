// Test fixtures - fake rendering collaborators
// A recording renderer and a scriptable time entry shared by the
// integration tests

use std::cell::RefCell;
use std::rc::Rc;

use multidate_picker::models::month::CalendarMonth;
use multidate_picker::models::time::TimeOfDay;
use multidate_picker::ui::render::{
    CellId, DayDescriptor, DaySummary, PanelId, PopupId, PopupTimeRow, PopupView, Renderer,
    SelectionRow, TimeEntry,
};

/// Vertical pixels each fake panel occupies in the scroll frame.
pub const PANEL_HEIGHT: f32 = 240.0;

#[derive(Debug)]
pub struct BuiltPanel {
    pub id: PanelId,
    pub month: CalendarMonth,
    pub offset: f32,
}

#[derive(Debug)]
pub struct BuiltCell {
    pub id: CellId,
    pub panel: PanelId,
    pub descriptor: DayDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub from: f32,
    pub to: f32,
    pub duration_ms: u64,
}

#[derive(Debug)]
pub struct OpenPopup {
    pub id: PopupId,
    pub anchor: CellId,
    pub view: PopupView,
}

/// Records everything the picker asks of the renderer. The scroll offset
/// jumps straight to the requested target so a later `show` starts from
/// where the previous transition ended; the picker itself still waits for
/// `scroll_settled` before deferred work.
#[derive(Default)]
pub struct FakeRenderer {
    next_id: u64,
    scroll: f32,
    pub panels: Vec<BuiltPanel>,
    pub cells: Vec<BuiltCell>,
    pub scrolls: Vec<ScrollRequest>,
    pub month_label: String,
    pub highlighted: Vec<PanelId>,
    pub back_control_visible: bool,
    pub summaries: Vec<(CellId, DaySummary)>,
    pub selection_rows: Vec<SelectionRow>,
    pub popup: Option<OpenPopup>,
    pub popup_times: Vec<PopupTimeRow>,
    pub closed_popups: Vec<PopupId>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn panel_for(&self, month: CalendarMonth) -> Option<&BuiltPanel> {
        self.panels.iter().rev().find(|p| p.month == month)
    }

    pub fn cell_for(&self, month: CalendarMonth, day: u32) -> Option<CellId> {
        self.cells
            .iter()
            .find(|c| {
                c.descriptor.year == month.year
                    && c.descriptor.month == month.month
                    && c.descriptor.day == day
            })
            .map(|c| c.id)
    }

    pub fn summary_for(&self, cell: CellId) -> Option<&DaySummary> {
        self.summaries
            .iter()
            .rev()
            .find(|(id, _)| *id == cell)
            .map(|(_, summary)| summary)
    }
}

impl Renderer for FakeRenderer {
    fn build_month_panel(&mut self, month: CalendarMonth) -> PanelId {
        let id = PanelId(self.next_id());
        let offset = self.panels.len() as f32 * PANEL_HEIGHT;
        self.panels.push(BuiltPanel { id, month, offset });
        id
    }

    fn build_day_cell(&mut self, panel: PanelId, descriptor: &DayDescriptor) -> CellId {
        let id = CellId(self.next_id());
        self.cells.push(BuiltCell {
            id,
            panel,
            descriptor: *descriptor,
        });
        id
    }

    fn panel_offset(&self, panel: PanelId) -> f32 {
        self.panels
            .iter()
            .find(|p| p.id == panel)
            .map(|p| p.offset)
            .expect("offset of a built panel")
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn animate_scroll(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.scrolls.push(ScrollRequest {
            from,
            to,
            duration_ms,
        });
        self.scroll = to;
    }

    fn set_month_label(&mut self, label: &str) {
        self.month_label = label.to_string();
    }

    fn set_panel_highlighted(&mut self, panel: PanelId, highlighted: bool) {
        if highlighted {
            if !self.highlighted.contains(&panel) {
                self.highlighted.push(panel);
            }
        } else {
            self.highlighted.retain(|p| *p != panel);
        }
    }

    fn set_back_control_visible(&mut self, visible: bool) {
        self.back_control_visible = visible;
    }

    fn set_day_summary(&mut self, cell: CellId, summary: &DaySummary) {
        self.summaries.push((cell, summary.clone()));
    }

    fn set_selection_rows(&mut self, rows: &[SelectionRow]) {
        self.selection_rows = rows.to_vec();
    }

    fn open_popup(&mut self, anchor: CellId, view: &PopupView) -> PopupId {
        let id = PopupId(self.next_id());
        self.popup = Some(OpenPopup {
            id,
            anchor,
            view: view.clone(),
        });
        id
    }

    fn set_popup_times(&mut self, _popup: PopupId, rows: &[PopupTimeRow]) {
        self.popup_times = rows.to_vec();
    }

    fn close_popup(&mut self, popup: PopupId) {
        self.closed_popups.push(popup);
        if self.popup.as_ref().map(|p| p.id) == Some(popup) {
            self.popup = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct EntryState {
    pub value: Option<TimeOfDay>,
    pub configured: Vec<(TimeOfDay, bool)>,
    pub focus_count: u32,
}

/// Scriptable stand-in for the time-entry field. Tests keep one handle
/// while the picker owns the other; `configure` fills the field with the
/// default, the way the real widget pre-fills its text input.
#[derive(Clone, Default)]
pub struct FakeTimeEntry {
    state: Rc<RefCell<EntryState>>,
}

impl FakeTimeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user typing a time into the field.
    pub fn type_time(&self, text: &str) {
        self.state.borrow_mut().value = TimeOfDay::parse(text).ok();
    }

    /// Simulates clearing the field / typing something unparsable.
    pub fn clear(&self) {
        self.state.borrow_mut().value = None;
    }

    pub fn last_configured(&self) -> Option<(TimeOfDay, bool)> {
        self.state.borrow().configured.last().copied()
    }

    pub fn focus_count(&self) -> u32 {
        self.state.borrow().focus_count
    }
}

impl TimeEntry for FakeTimeEntry {
    fn configure(&mut self, default: TimeOfDay, show_24_hours: bool) {
        let mut state = self.state.borrow_mut();
        state.configured.push((default, show_24_hours));
        state.value = Some(default);
    }

    fn focus(&mut self) {
        self.state.borrow_mut().focus_count += 1;
    }

    fn time(&self) -> Option<TimeOfDay> {
        self.state.borrow().value
    }
}
