//! Undo history.

use std::collections::VecDeque;

use crate::model::Record;

/// LIFO stack of full record snapshots.
///
/// Unbounded unless a limit is set, in which case the oldest snapshot is
/// evicted once the stack grows past it.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    snapshots: VecDeque<Vec<Record>>,
    /// Maximum number of snapshots kept (0 = unbounded).
    limit: usize,
}

impl UndoStack {
    /// Create an unbounded stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack that keeps at most `limit` snapshots (0 = unbounded).
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            limit,
        }
    }

    /// Push a deep copy of `records`.
    pub fn snapshot(&mut self, records: &[Record]) {
        self.snapshots.push_back(records.to_vec());
        if self.limit > 0 {
            while self.snapshots.len() > self.limit {
                self.snapshots.pop_front();
            }
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Vec<Record>> {
        self.snapshots.pop_back()
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Configured capacity (0 = unbounded).
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
