//! Record persistence.
//!
//! The editor only talks to storage through [`RecordStore`]: one call to load
//! the whole sequence at startup, and one call per edit to overwrite it.
//!
//! - [`JsonlStore`]: the on-disk JSON-lines file, rewritten atomically
//! - [`MemoryStore`]: an in-memory store that keeps every saved sequence
//! - [`SaveQueue`]: a background task that applies saves in issue order
//!
//! # Example
//!
//! ```rust,no_run
//! use belgianlake::store::{JsonlStore, RecordStore};
//!
//! let store = JsonlStore::new("data.jsonl");
//! let mut records = store.load()?;
//! if let Some(first) = records.first_mut() {
//!     first.toggle();
//! }
//! store.save(&records)?;
//! # Ok::<(), belgianlake::LakeError>(())
//! ```

mod memory;
mod queue;

pub use memory::MemoryStore;
pub use queue::{SaveOutcome, SaveQueue, SaveTicket};

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::error::{LakeError, Result};
use crate::model::Record;
use crate::util::atomic_write_with;

/// Narrow load/save interface between the editor and its storage.
pub trait RecordStore: Send + Sync + 'static {
    /// Read every record, in store order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored sequence with `records`, preserving order.
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Short human-readable name of the backing resource.
    fn describe(&self) -> String;
}

/// JSON-lines file store: one `{"print":..,"file":..}` object per line.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonlStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Record>> {
        debug!("Opening store");
        let file = File::open(&self.path).map_err(|e| LakeError::from_open(&self.path, e))?;
        parse_reader(BufReader::new(file))
    }

    #[instrument(skip(self, records), fields(path = %self.path.display(), count = records.len()))]
    fn save(&self, records: &[Record]) -> Result<()> {
        atomic_write_with(&self.path, |writer| write_records(writer, records))?;
        debug!("Store rewritten");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse JSON-lines records from a reader.
///
/// Blank lines are skipped. Any other line that does not decode to a
/// [`Record`] fails the whole load with a format error naming its line.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (line_num, line_result) in reader.split(b'\n').enumerate() {
        let line_num = line_num + 1;
        let line = line_result
            .map_err(|e| LakeError::io(format!("Failed to read line {line_num}"), e))?;

        // Bytes go to serde_json undecoded so invalid UTF-8 is a format error.
        let trimmed = trim_ascii(&line);
        if trimmed.is_empty() {
            continue;
        }

        let record: Record = serde_json::from_slice(trimmed)
            .map_err(|e| LakeError::format_with_source(line_num, e.to_string(), e))?;
        trace!(line = line_num, path = %record.path, "Parsed record");
        records.push(record);
    }

    debug!(records = records.len(), "Parsing complete");
    Ok(records)
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Parse JSON-lines records from a string.
pub fn parse_str(content: &str) -> Result<Vec<Record>> {
    parse_reader(content.as_bytes())
}

/// Serialize records as JSON lines, one compact object per line.
pub fn write_records(writer: &mut dyn Write, records: &[Record]) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
