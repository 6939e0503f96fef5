//! Reusable TUI components.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A status bar component.
pub struct StatusBar<'a> {
    left: Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    style: Style,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            style: Style::default(),
        }
    }

    /// Add left-aligned content.
    pub fn left(mut self, spans: Vec<Span<'a>>) -> Self {
        self.left = spans;
        self
    }

    /// Add right-aligned content.
    pub fn right(mut self, spans: Vec<Span<'a>>) -> Self {
        self.right = spans;
        self
    }

    /// Set the bar's base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Render the status bar.
    pub fn render(self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line(area.width)).style(self.style), area);
    }

    /// Lay out left and right content across `width` columns.
    fn line(&self, width: u16) -> Line<'a> {
        let used: usize = self
            .left
            .iter()
            .chain(self.right.iter())
            .map(|s| s.content.chars().count())
            .sum();
        let padding = usize::from(width).saturating_sub(used).max(1);

        let mut spans = self.left.clone();
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(self.right.iter().cloned());
        Line::from(spans)
    }
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self::new()
    }
}
