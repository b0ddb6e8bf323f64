// Rendering seam
// The widget core drives an abstract renderer; hosts plug in the real
// toolkit (DOM, egui, ...) behind these traits.

use crate::models::month::CalendarMonth;
use crate::models::time::{InstantMs, TimeOfDay};

/// Hint text for the flat list when nothing is selected.
pub const NO_SELECTION_HINT: &str = "No times are selected yet.";

/// Opaque handle for a rendered month panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

/// Opaque handle for a rendered day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub u64);

/// Opaque handle for an open popup view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId(pub u64);

/// Alternating visual flag distinguishing successive months. Purely a
/// background-banding concern, unrelated to data semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banding {
    Even,
    Odd,
}

impl Banding {
    pub fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }
}

/// Everything a renderer needs to draw one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDescriptor {
    pub year: i32,
    /// Zero-based month index.
    pub month: u32,
    pub day: u32,
    pub is_today: bool,
    /// Past days get no click affordance. Today is never flagged past.
    pub is_past: bool,
    pub banding: Banding,
    /// Tail days of the month preceding the first shown month.
    pub is_leading: bool,
}

/// Read-model for one day cell: at most two formatted times, plus a flag
/// when more exist (rendered as an ellipsis).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub lines: Vec<String>,
    pub truncated: bool,
}

/// One row of the flat selected-times list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub instant: InstantMs,
    pub label: String,
}

/// One row of the popup's own time list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupTimeRow {
    pub instant: InstantMs,
    pub label: String,
}

/// Data for rendering a day popup's header ("15 Jan").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub day: u32,
    pub month_name: &'static str,
}

/// Rendering collaborator. Handles are minted by the implementation and
/// treated as opaque by the core. Offsets are vertical pixels measured
/// from the top of the scrolling frame.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer {
    /// Creates an (initially empty) panel appended below existing ones.
    fn build_month_panel(&mut self, month: CalendarMonth) -> PanelId;
    /// Creates a day cell inside the given panel.
    fn build_day_cell(&mut self, panel: PanelId, descriptor: &DayDescriptor) -> CellId;
    /// The panel's vertical offset within the scrolled content, independent
    /// of the frame's current scroll position.
    fn panel_offset(&self, panel: PanelId) -> f32;
    /// The frame's current scroll offset, mid-flight values included.
    fn scroll_offset(&self) -> f32;
    /// Starts a smooth, non-blocking transition of the scroll offset. The
    /// host reports completion through the picker's `scroll_settled`.
    fn animate_scroll(&mut self, from: f32, to: f32, duration_ms: u64);
    fn set_month_label(&mut self, label: &str);
    /// Toggles the "currently shown month" highlight on a panel.
    fn set_panel_highlighted(&mut self, panel: PanelId, highlighted: bool);
    /// Shows or hides the "go to previous month" control.
    fn set_back_control_visible(&mut self, visible: bool);
    fn set_day_summary(&mut self, cell: CellId, summary: &DaySummary);
    /// Replaces the flat selected-times list. An empty slice renders the
    /// [`NO_SELECTION_HINT`] text.
    fn set_selection_rows(&mut self, rows: &[SelectionRow]);
    fn open_popup(&mut self, anchor: CellId, view: &PopupView) -> PopupId;
    fn set_popup_times(&mut self, popup: PopupId, rows: &[PopupTimeRow]);
    fn close_popup(&mut self, popup: PopupId);
}

/// Time-entry sub-widget collaborator: a small field the user types a time
/// into, owned by the host and re-used across popup opens.
#[cfg_attr(test, mockall::automock)]
pub trait TimeEntry {
    /// Resets the field to a default value and display format.
    fn configure(&mut self, default: TimeOfDay, show_24_hours: bool);
    fn focus(&mut self);
    /// The currently entered time, if the field holds a valid one.
    fn time(&self) -> Option<TimeOfDay>;
}
