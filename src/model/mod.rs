//! Data model for the record store.
//!
//! A [`Record`] is one line of the store: a path and whether it should be
//! printed. Records have no identity of their own; a record is addressed by its
//! position in the loaded sequence.

use serde::{Deserialize, Serialize};

/// One persisted entry: a file path and its print flag.
///
/// Serialized as `{"print": bool, "file": string}`. Both fields are required;
/// any other fields on the line are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Whether the file is marked for printing.
    #[serde(rename = "print")]
    pub enabled: bool,
    /// The file path, displayed verbatim.
    #[serde(rename = "file")]
    pub path: String,
}

impl Record {
    /// Create a new record.
    pub fn new(enabled: bool, path: impl Into<String>) -> Self {
        Self {
            enabled,
            path: path.into(),
        }
    }

    /// Flip the print flag.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Count the enabled records in a sequence.
pub fn enabled_count(records: &[Record]) -> usize {
    records.iter().filter(|r| r.enabled).count()
}
