//! belgianlake: interactive editor for the print flags of a JSON lines file list.
//!
//! The store is a JSON lines file where every line is a record such as
//! `{"print":true,"file":"/docs/report.pdf"}`. belgianlake shows the records
//! as a table and lets the user flip the `print` flag on one row, on a
//! selection, or on everything, with undo. Every change is written back to
//! the file immediately.
//!
//! # Example
//!
//! ```rust
//! use belgianlake::model::Record;
//! use belgianlake::session::{handle, Effect, Input, Session};
//!
//! let session = Session::new(vec![
//!     Record::new(false, "a.pdf"),
//!     Record::new(false, "b.pdf"),
//!     Record::new(false, "c.pdf"),
//! ]);
//!
//! // Select rows 0 and 1, then toggle the selection.
//! let (session, _) = handle(session, Input::Space);
//! let (session, _) = handle(session, Input::Space);
//! let (session, effect) = handle(session, Input::Enter);
//!
//! assert!(matches!(effect, Effect::Save(_)));
//! assert!(session.records()[0].enabled);
//! assert!(session.records()[1].enabled);
//! assert!(!session.records()[2].enabled);
//! ```
//!
//! # Architecture
//!
//! - [`model`]: the persisted [`Record`]
//! - [`store`]: JSON lines persistence and the background save queue
//! - [`session`]: selection, undo, toggle operations and input handling
//! - [`tui`]: terminal front end
//! - [`cli`]: command-line interface
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod tui;
pub mod util;

// Re-export commonly used types at the crate root
pub use error::{LakeError, Result};
pub use model::Record;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
