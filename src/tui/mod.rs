//! Terminal user interface for belgianlake.
//!
//! A single table of records with a status bar and key help underneath.
//! Built with ratatui on crossterm.

mod app;
mod components;
mod events;
mod state;
mod theme;

pub use app::{run, FAREWELL};
pub use theme::{available_themes, Theme};
