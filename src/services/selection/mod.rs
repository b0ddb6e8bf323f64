// Selection store
// Ordered, de-duplicated set of chosen date/time instants

use crate::models::time::InstantMs;

/// The set of instants the user has picked, kept sorted ascending with no
/// duplicates. Mutations report whether the set changed; the owning widget
/// reacts to `true` by re-rendering the flat list and day summaries.
#[derive(Debug, Default)]
pub struct SelectionStore {
    times: Vec<InstantMs>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an instant, preserving ascending order. Returns `false`
    /// without modifying the set when the exact instant is already present.
    pub fn add(&mut self, instant: InstantMs) -> bool {
        match self.times.binary_search(&instant) {
            Ok(_) => false,
            Err(pos) => {
                self.times.insert(pos, instant);
                log::debug!("selected instant {} ({} total)", instant.millis(), self.times.len());
                true
            }
        }
    }

    /// Removes the exact instant. Returns `false` when it was not present.
    pub fn remove(&mut self, instant: InstantMs) -> bool {
        match self.times.binary_search(&instant) {
            Ok(pos) => {
                self.times.remove(pos);
                log::debug!("deselected instant {} ({} total)", instant.millis(), self.times.len());
                true
            }
            Err(_) => false,
        }
    }

    /// All instants `t` with `start <= t <= end`, ascending. Both bounds
    /// are inclusive: an instant at exactly the next midnight belongs to
    /// both adjacent days.
    pub fn query(&self, start: InstantMs, end: InstantMs) -> impl Iterator<Item = InstantMs> + '_ {
        self.times
            .iter()
            .copied()
            .skip_while(move |t| *t < start)
            .take_while(move |t| *t <= end)
    }

    /// Every selected instant, ascending.
    pub fn all(&self) -> &[InstantMs] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
