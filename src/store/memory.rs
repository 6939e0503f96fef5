//! In-memory record store.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{LakeError, Result};
use crate::model::Record;

use super::RecordStore;

#[derive(Debug, Default)]
struct Inner {
    current: Vec<Record>,
    history: Vec<Vec<Record>>,
    fail_saves: bool,
}

/// A [`RecordStore`] held in memory.
///
/// Every successful save is appended to a history so callers can check what
/// was persisted and in which order. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create a store that loads `records`.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current: records,
                ..Inner::default()
            })),
        }
    }

    /// The most recently stored sequence.
    pub fn current(&self) -> Vec<Record> {
        self.inner.lock().current.clone()
    }

    /// Every sequence saved so far, oldest first.
    pub fn saves(&self) -> Vec<Vec<Record>> {
        self.inner.lock().history.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.inner.lock().history.len()
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.lock().fail_saves = fail;
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.inner.lock().current.clone())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.fail_saves {
            return Err(LakeError::io(
                "Failed to save records to memory",
                std::io::Error::new(std::io::ErrorKind::Other, "saves disabled"),
            ));
        }
        inner.current = records.to_vec();
        inner.history.push(records.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
