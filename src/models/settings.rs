// Settings model
// Host-facing picker configuration

use serde::{Deserialize, Serialize};

use super::time::TimeOfDay;

fn default_scroll_duration_ms() -> u64 {
    300
}

fn default_entry_time() -> TimeOfDay {
    TimeOfDay::NOON
}

fn default_show_24_hours() -> bool {
    true
}

/// Picker configuration supplied by the host. Serialized by hosts that
/// persist user preferences; every field has a default so partial
/// configurations deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerSettings {
    /// Show the time entry in 24-hour format.
    #[serde(default = "default_show_24_hours")]
    pub show_24_hours: bool,
    /// Duration of the month scroll transition.
    #[serde(default = "default_scroll_duration_ms")]
    pub scroll_duration_ms: u64,
    /// Entry default before any time has been confirmed.
    #[serde(default = "default_entry_time")]
    pub default_entry_time: TimeOfDay,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            show_24_hours: default_show_24_hours(),
            scroll_duration_ms: default_scroll_duration_ms(),
            default_entry_time: default_entry_time(),
        }
    }
}
