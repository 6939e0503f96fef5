//! TUI application state.

use ratatui::widgets::TableState;
use tracing::{info, warn};

use crate::config::Config;
use crate::model::{enabled_count, Record};
use crate::session::{self, Effect, Input, Session};
use crate::store::SaveOutcome;

use super::theme::Theme;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Routine feedback.
    Info,
    /// Something failed.
    Error,
}

/// Transient feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Severity.
    pub kind: StatusKind,
    /// Text shown to the user.
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Application state.
pub struct AppState {
    /// Editing session.
    session: Session,
    /// Where records are stored, for display.
    pub store_label: String,
    /// Last status message.
    pub status_message: Option<StatusMessage>,
    /// Saves issued but not yet finished.
    pub pending_saves: usize,
    /// Saves that failed over the whole run.
    pub failed_saves: usize,
    /// Show the key help footer.
    pub show_help: bool,
    /// Width of the File column.
    pub path_width: u16,
    /// Current theme.
    pub theme: Theme,
    /// Scroll state of the record table.
    pub table_state: TableState,
}

impl AppState {
    /// Create new app state around loaded records.
    pub fn new(records: Vec<Record>, store_label: impl Into<String>, config: &Config) -> Self {
        let theme = Theme::from_name(&config.theme.name).unwrap_or_else(|| {
            warn!(theme = %config.theme.name, "Unknown theme, using default");
            Theme::default()
        });

        Self {
            session: Session::with_undo_limit(records, config.session.undo_limit),
            store_label: store_label.into(),
            status_message: None,
            pending_saves: 0,
            failed_saves: 0,
            show_help: config.display.show_help,
            path_width: config.display.path_width,
            theme,
            table_state: TableState::default(),
        }
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Feed one input through the controller.
    pub fn apply(&mut self, input: Input) -> Effect {
        let (next, effect) = session::handle(std::mem::take(&mut self.session), input);
        self.session = next;
        if matches!(effect, Effect::Quit) {
            info!(
                records = self.session.len(),
                pending = self.pending_saves,
                "Session ending"
            );
        }
        effect
    }

    /// Note that a save has been handed to the queue.
    pub fn save_issued(&mut self) {
        self.pending_saves += 1;
    }

    /// Note that a save could not even be queued.
    pub fn save_rejected(&mut self, error: &crate::error::LakeError) {
        self.failed_saves += 1;
        self.status_message = Some(StatusMessage::error(format!("Save failed: {error}")));
    }

    /// Record the outcome of a background save.
    pub fn save_finished(&mut self, outcome: &SaveOutcome) {
        self.pending_saves = self.pending_saves.saturating_sub(1);
        match &outcome.result {
            Ok(()) => {
                self.status_message = Some(StatusMessage::info(format!(
                    "Saved {} records ({})",
                    outcome.count, outcome.ticket
                )));
            }
            Err(e) => {
                self.failed_saves += 1;
                self.status_message = Some(StatusMessage::error(format!(
                    "Save {} failed: {e}",
                    outcome.ticket
                )));
            }
        }
    }

    /// Counts shown in the status bar: total, enabled, selected.
    pub fn counts(&self) -> (usize, usize, usize) {
        let records = self.session.records();
        (
            records.len(),
            enabled_count(records),
            self.session.selection().len(),
        )
    }
}
