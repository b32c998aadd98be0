use tracing::debug;

use crate::color::Color;

/// Default number of colors kept in history
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Bounded most-recently-used color list, newest first
///
/// A color that is already present is not re-inserted or promoted.
#[derive(Debug, Clone)]
pub struct ColorHistory {
    entries: Vec<Color>,
    capacity: usize,
}

impl ColorHistory {
    /// Create an empty history; capacity is at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a color. Returns true if the history changed.
    pub fn push(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }

        self.entries.insert(0, color);
        self.entries.truncate(self.capacity);
        debug!(%color, len = self.entries.len(), "history push");
        true
    }

    /// Snapshot, most recent first
    pub fn all(&self) -> &[Color] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<Color> {
        self.entries.get(idx).copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.entries.contains(&color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
