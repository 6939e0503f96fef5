//! Interactive editing session.
//!
//! A [`Session`] owns everything the editor mutates while it runs: the loaded
//! records, the cursor, the selection and its range anchor, and the undo
//! history. It knows nothing about terminals or files. Mutating operations
//! return an [`Effect`] describing what the caller must do next, typically a
//! save of the new record sequence.
//!
//! Input handling lives in [`controller`], which maps named key events onto
//! the operations below.
//!
//! # Example
//!
//! ```rust
//! use belgianlake::model::Record;
//! use belgianlake::session::{Effect, Session};
//!
//! let mut session = Session::new(vec![
//!     Record::new(false, "a.pdf"),
//!     Record::new(true, "b.pdf"),
//! ]);
//!
//! let effect = session.toggle_current();
//! assert!(matches!(effect, Effect::Save(_)));
//! assert!(session.records()[0].enabled);
//! assert_eq!(session.cursor(), 1);
//!
//! session.undo();
//! assert!(!session.records()[0].enabled);
//! ```

pub mod controller;
mod history;
mod rows;
mod selection;

pub use controller::{handle, resolve, Action, Input};
pub use history::UndoStack;
pub use rows::{project, status_glyph, DisplayRow, GLYPH_DISABLED, GLYPH_ENABLED, SELECTED_MARKER};
pub use selection::Selection;

use tracing::debug;

use crate::model::Record;

/// Rows per page before the first resize event arrives.
pub const DEFAULT_PAGE_ROWS: u16 = 10;

/// What the caller must do after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing.
    None,
    /// Persist this exact record sequence.
    Save(Vec<Record>),
    /// The session has entered its terminal state.
    Quit,
}

impl Effect {
    /// Records to persist, if this effect is a save.
    #[must_use]
    pub fn save_payload(&self) -> Option<&[Record]> {
        match self {
            Self::Save(records) => Some(records),
            _ => None,
        }
    }
}

/// Cursor movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One viewport up.
    PageUp,
    /// One viewport down.
    PageDown,
    /// Half a viewport up.
    HalfPageUp,
    /// Half a viewport down.
    HalfPageDown,
    /// First row.
    Top,
    /// Last row.
    Bottom,
}

/// Size of the area the rows are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Columns available.
    pub width: u16,
    /// Rows available for records.
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: DEFAULT_PAGE_ROWS,
        }
    }
}

/// Mutable state of one editing session.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    selection: Selection,
    anchor: Option<usize>,
    cursor: usize,
    history: UndoStack,
    range_modifier: bool,
    viewport: Viewport,
    quitting: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Session {
    /// Start a session over `records` with unbounded undo.
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_undo_limit(records, 0)
    }

    /// Start a session keeping at most `limit` undo snapshots (0 = unbounded).
    pub fn with_undo_limit(records: Vec<Record>, limit: usize) -> Self {
        Self {
            records,
            selection: Selection::new(),
            anchor: None,
            cursor: 0,
            history: UndoStack::with_limit(limit),
            range_modifier: false,
            viewport: Viewport::default(),
            quitting: false,
        }
    }

    /// Current records, in store order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Range anchor, if a row has been touched yet.
    #[must_use]
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Focused row.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of undo snapshots available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Whether the range modifier is armed for the next keystroke.
    #[must_use]
    pub fn range_modifier_held(&self) -> bool {
        self.range_modifier
    }

    /// Last known viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the session has quit.
    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display rows for the current state.
    #[must_use]
    pub fn rows(&self) -> Vec<DisplayRow> {
        project(&self.records, &self.selection, self.cursor)
    }

    /// Arm the range modifier for the next keystroke.
    pub fn hold_range_modifier(&mut self) {
        self.range_modifier = true;
    }

    /// Read and disarm the range modifier.
    pub fn take_range_modifier(&mut self) -> bool {
        std::mem::take(&mut self.range_modifier)
    }

    /// Move the cursor, clamped to the record range.
    pub fn move_cursor(&mut self, motion: Motion) {
        let Some(last) = self.records.len().checked_sub(1) else {
            self.cursor = 0;
            return;
        };
        let page = usize::from(self.viewport.height.max(1));
        let half = (page / 2).max(1);

        self.cursor = match motion {
            Motion::Up => self.cursor.saturating_sub(1),
            Motion::Down => self.cursor + 1,
            Motion::PageUp => self.cursor.saturating_sub(page),
            Motion::PageDown => self.cursor + page,
            Motion::HalfPageUp => self.cursor.saturating_sub(half),
            Motion::HalfPageDown => self.cursor + half,
            Motion::Top => 0,
            Motion::Bottom => last,
        }
        .min(last);
    }

    /// Record a new viewport size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    /// Toggle selection of the cursor row, anchor there, and advance.
    pub fn point_select(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let cursor = self.cursor;
        self.selection.toggle_at(cursor, self.records.len());
        self.anchor = Some(cursor);
        self.advance_cursor();
    }

    /// Extend the selection from the anchor to the cursor row.
    ///
    /// With no anchor yet only the cursor row is selected.
    pub fn extend_selection(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let cursor = self.cursor;
        let start = self.anchor.unwrap_or(cursor);
        self.selection.select_range(start, cursor, self.records.len());
        self.anchor = Some(cursor);
    }

    /// Select every record.
    pub fn select_all(&mut self) {
        self.selection.select_all(self.records.len());
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Flip the cursor record, then advance the cursor.
    pub fn toggle_current(&mut self) -> Effect {
        if self.records.is_empty() {
            return Effect::None;
        }
        self.history.snapshot(&self.records);
        self.records[self.cursor].toggle();
        self.advance_cursor();
        self.save()
    }

    /// Flip every selected record and clear the selection.
    pub fn toggle_selected(&mut self) -> Effect {
        if self.selection.is_empty() {
            return Effect::None;
        }
        self.history.snapshot(&self.records);
        for index in self.selection.iter() {
            if let Some(record) = self.records.get_mut(index) {
                record.toggle();
            }
        }
        self.selection.clear();
        self.save()
    }

    /// Flip every record.
    pub fn toggle_all(&mut self) -> Effect {
        if self.records.is_empty() {
            return Effect::None;
        }
        self.history.snapshot(&self.records);
        for record in &mut self.records {
            record.toggle();
        }
        self.save()
    }

    /// Disable everything if everything is enabled, otherwise enable everything.
    pub fn enable_or_disable_all(&mut self) -> Effect {
        if self.records.is_empty() {
            return Effect::None;
        }
        let target = !self.records.iter().all(|r| r.enabled);
        self.history.snapshot(&self.records);
        for record in &mut self.records {
            record.enabled = target;
        }
        self.save()
    }

    /// Restore the most recent snapshot. A no-op when there is none.
    pub fn undo(&mut self) -> Effect {
        let Some(snapshot) = self.history.pop() else {
            debug!("Nothing to undo");
            return Effect::None;
        };
        self.records = snapshot;
        self.selection.clear();
        let len = self.records.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.anchor = self.anchor.filter(|&a| a < len);
        self.save()
    }

    /// Enter the terminal quitting state.
    pub fn quit(&mut self) -> Effect {
        self.quitting = true;
        Effect::Quit
    }

    fn advance_cursor(&mut self) {
        let len = self.records.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    fn save(&self) -> Effect {
        Effect::Save(self.records.clone())
    }
}
