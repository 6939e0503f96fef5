//! Row projection for renderers.

use crate::model::Record;

use super::selection::Selection;

/// Glyph for a disabled record.
pub const GLYPH_DISABLED: &str = "[ ]";
/// Glyph for an enabled record.
pub const GLYPH_ENABLED: &str = "[x]";
/// Prefix marking a selected row.
pub const SELECTED_MARKER: &str = ">";

/// One display-agnostic row: what to show, never how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Status glyph, such as `[x]` or `>[ ]`.
    pub status: String,
    /// The record's path.
    pub path: String,
    /// Row is under the cursor.
    pub focused: bool,
    /// Row is in the selection.
    pub selected: bool,
    /// Record is enabled.
    pub enabled: bool,
}

/// Status glyph for a record flag and selection state.
#[must_use]
pub fn status_glyph(enabled: bool, selected: bool) -> String {
    let glyph = if enabled { GLYPH_ENABLED } else { GLYPH_DISABLED };
    if selected {
        format!("{SELECTED_MARKER}{glyph}")
    } else {
        glyph.to_string()
    }
}

/// Project records, selection and cursor into display rows.
#[must_use]
pub fn project(records: &[Record], selection: &Selection, cursor: usize) -> Vec<DisplayRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let selected = selection.contains(i);
            DisplayRow {
                status: status_glyph(record.enabled, selected),
                path: record.path.clone(),
                focused: i == cursor,
                selected,
                enabled: record.enabled,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(status_glyph(false, false), "[ ]");
        assert_eq!(status_glyph(true, false), "[x]");
        assert_eq!(status_glyph(false, true), ">[ ]");
        assert_eq!(status_glyph(true, true), ">[x]");
    }

    #[test]
    fn test_project() {
        let records = vec![Record::new(false, "a"), Record::new(true, "b")];
        let mut selection = Selection::new();
        selection.toggle_at(1, 2);

        let rows = project(&records, &selection, 0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, "[ ]");
        assert!(rows[0].focused);
        assert_eq!(rows[1].status, ">[x]");
        assert_eq!(rows[1].path, "b");
        assert!(!rows[1].focused);
    }
}
