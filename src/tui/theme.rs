//! TUI theming and colors.

use ratatui::style::{Color, Modifier, Style};

/// Application theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Name of the theme.
    pub name: String,
    /// Foreground color.
    pub foreground: Color,
    /// Primary accent color.
    pub primary: Color,
    /// Secondary accent color.
    pub secondary: Color,
    /// Border color.
    pub border: Color,
    /// Cursor row highlight.
    pub selection: Color,
    /// Rows marked for a batch toggle.
    pub marked: Color,
    /// Muted text (disabled records, hints).
    pub muted: Color,
    /// Error color.
    pub error: Color,
    /// Warning color.
    pub warning: Color,
    /// Success color.
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            foreground: Color::White,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            border: Color::DarkGray,
            selection: Color::DarkGray,
            marked: Color::Yellow,
            muted: Color::Gray,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            foreground: Color::Black,
            primary: Color::Blue,
            secondary: Color::Magenta,
            border: Color::Gray,
            selection: Color::LightBlue,
            marked: Color::Magenta,
            muted: Color::DarkGray,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Create a high contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            foreground: Color::White,
            primary: Color::Yellow,
            secondary: Color::Cyan,
            border: Color::White,
            selection: Color::Blue,
            marked: Color::Yellow,
            muted: Color::White,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
        }
    }

    /// Get theme by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" | "default" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" | "highcontrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// Get style for borders.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for the cursor row.
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for rows in the selection.
    pub fn marked_style(&self) -> Style {
        Style::default().fg(self.marked)
    }

    /// Get style for a record's status cell.
    pub fn status_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.success)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Get style for column headers.
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for errors.
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for success.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get style for hint text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// Available themes list.
pub fn available_themes() -> Vec<&'static str> {
    vec!["dark", "light", "high-contrast"]
}
