//! CLI command implementations.
//!
//! Each command is implemented in its own module with a `run` function
//! that handles the command logic.

pub mod config;
pub mod run;
pub mod version;
