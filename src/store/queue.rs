//! Background save queue.
//!
//! The interactive loop must never wait on disk, so saves are handed to a
//! single tokio task. That task drains an unbounded channel and finishes each
//! save before starting the next, which keeps the store's view of the data in
//! the order the saves were issued: the last issued save is the one that wins.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::{LakeError, Result};
use crate::model::Record;

use super::RecordStore;

/// Sequence number of an issued save. Tickets increase by one per save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SaveTicket(pub u64);

impl fmt::Display for SaveTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of one background save.
#[derive(Debug)]
pub struct SaveOutcome {
    /// Ticket returned by [`SaveQueue::submit`].
    pub ticket: SaveTicket,
    /// Number of records written.
    pub count: usize,
    /// Whether the store accepted the write.
    pub result: Result<()>,
}

struct Job {
    ticket: SaveTicket,
    records: Vec<Record>,
}

/// Ordered, fire-and-forget persistence for record snapshots.
pub struct SaveQueue {
    tx: mpsc::UnboundedSender<Job>,
    worker: JoinHandle<()>,
    next_ticket: u64,
}

impl SaveQueue {
    /// Start the save worker on `handle`.
    ///
    /// `on_done` runs on the worker once per save, in ticket order.
    pub fn spawn<F>(handle: &Handle, store: Arc<dyn RecordStore>, on_done: F) -> Self
    where
        F: Fn(SaveOutcome) + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Job>();

        let worker = handle.spawn(async move {
            while let Some(Job { ticket, records }) = rx.recv().await {
                let count = records.len();
                let store = Arc::clone(&store);
                let result = match tokio::task::spawn_blocking(move || store.save(&records)).await {
                    Ok(result) => result,
                    Err(e) => Err(LakeError::io(
                        "Save task did not complete",
                        std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
                    )),
                };

                match &result {
                    Ok(()) => debug!(%ticket, count, "Save complete"),
                    Err(e) => warn!(%ticket, error = %e, "Save failed"),
                }
                on_done(SaveOutcome { ticket, count, result });
            }
            debug!("Save queue drained");
        });

        Self {
            tx,
            worker,
            next_ticket: 0,
        }
    }

    /// Issue a save of `records`. Returns immediately.
    pub fn submit(&mut self, records: Vec<Record>) -> Result<SaveTicket> {
        self.next_ticket += 1;
        let ticket = SaveTicket(self.next_ticket);
        self.tx.send(Job { ticket, records }).map_err(|_| {
            LakeError::io(
                "Save worker is no longer running",
                std::io::Error::new(std::io::ErrorKind::BrokenPipe, "save queue closed"),
            )
        })?;
        Ok(ticket)
    }

    /// Number of saves issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next_ticket
    }

    /// Close the queue and wait until every issued save has finished.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            warn!(error = %e, "Save worker ended abnormally");
        }
    }
}
