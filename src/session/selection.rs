//! Selection engine.
//!
//! Every mutating call takes the current record count so the set can never
//! hold an index past the end of the sequence.

use std::collections::BTreeSet;

/// Set of selected record indices, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Out-of-range indices are ignored.
    pub fn toggle_at(&mut self, index: usize, count: usize) {
        if index >= count {
            return;
        }
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Add every index of the closed interval between `anchor` and `end`.
    ///
    /// The interval is symmetric in its endpoints and is unioned with the
    /// existing selection. Indices at or past `count` are dropped.
    pub fn select_range(&mut self, anchor: usize, end: usize, count: usize) {
        if count == 0 {
            return;
        }
        let lo = anchor.min(end);
        let hi = anchor.max(end).min(count - 1);
        if lo > hi {
            return;
        }
        self.indices.extend(lo..=hi);
    }

    /// Select `0..count`.
    pub fn select_all(&mut self, count: usize) {
        self.indices = (0..count).collect();
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Whether `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of selected indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
