//! Input handling.
//!
//! [`handle`] is the only entry point the event loop needs: it takes the
//! session by value, applies one input and hands the session back together
//! with the [`Effect`] the caller must carry out.

use tracing::trace;

use super::{Effect, Motion, Session};

/// Display-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave the editor.
    Quit,
    /// Arm range selection for the next keystroke.
    RangeModifier,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Any other printable character.
    Char(char),
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Half page up.
    HalfPageUp,
    /// Half page down.
    HalfPageDown,
    /// Jump to the first row.
    Top,
    /// Jump to the last row.
    Bottom,
    /// Viewport changed size.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl Input {
    /// Whether this input is a keystroke (and so consumes the range modifier).
    #[must_use]
    pub fn is_keystroke(&self) -> bool {
        !matches!(self, Self::Resize { .. })
    }
}

/// What an input resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    Move(Motion),
    ToggleCurrent,
    PointSelect,
    ExtendSelection,
    CommitSelected,
    Undo,
    ToggleAll,
    SelectAll,
    ClearSelection,
    EnableOrDisableAll,
    Resize { width: u16, height: u16 },
    HoldRangeModifier,
    Ignore,
}

/// Map an input to its action given the state of the range modifier.
#[must_use]
pub fn resolve(input: &Input, range_held: bool) -> Action {
    match *input {
        Input::Quit => Action::Quit,
        Input::RangeModifier => Action::HoldRangeModifier,
        Input::Space if range_held => Action::ExtendSelection,
        Input::Space => Action::PointSelect,
        Input::Enter => Action::CommitSelected,
        Input::Up => Action::Move(Motion::Up),
        Input::Down => Action::Move(Motion::Down),
        Input::PageUp => Action::Move(Motion::PageUp),
        Input::PageDown => Action::Move(Motion::PageDown),
        Input::HalfPageUp => Action::Move(Motion::HalfPageUp),
        Input::HalfPageDown => Action::Move(Motion::HalfPageDown),
        Input::Top => Action::Move(Motion::Top),
        Input::Bottom => Action::Move(Motion::Bottom),
        Input::Resize { width, height } => Action::Resize { width, height },
        Input::Char(c) => match c {
            'q' => Action::Quit,
            'x' => Action::ToggleCurrent,
            't' => Action::ToggleAll,
            'a' => Action::SelectAll,
            'd' => Action::ClearSelection,
            'e' => Action::EnableOrDisableAll,
            'u' => Action::Undo,
            'k' => Action::Move(Motion::Up),
            'j' => Action::Move(Motion::Down),
            'g' => Action::Move(Motion::Top),
            'G' => Action::Move(Motion::Bottom),
            'b' => Action::Move(Motion::PageUp),
            'f' => Action::Move(Motion::PageDown),
            ' ' if range_held => Action::ExtendSelection,
            ' ' => Action::PointSelect,
            _ => Action::Ignore,
        },
    }
}

/// Apply one input to the session.
pub fn handle(mut session: Session, input: Input) -> (Session, Effect) {
    if session.is_quitting() {
        return (session, Effect::None);
    }

    let range_held = if input.is_keystroke() {
        session.take_range_modifier()
    } else {
        session.range_modifier_held()
    };
    let action = resolve(&input, range_held);
    trace!(?input, ?action, range_held, "Handling input");

    let effect = match action {
        Action::Quit => session.quit(),
        Action::Move(motion) => {
            session.move_cursor(motion);
            Effect::None
        }
        Action::ToggleCurrent => session.toggle_current(),
        Action::PointSelect => {
            session.point_select();
            Effect::None
        }
        Action::ExtendSelection => {
            session.extend_selection();
            Effect::None
        }
        Action::CommitSelected => session.toggle_selected(),
        Action::Undo => session.undo(),
        Action::ToggleAll => session.toggle_all(),
        Action::SelectAll => {
            session.select_all();
            Effect::None
        }
        Action::ClearSelection => {
            session.clear_selection();
            Effect::None
        }
        Action::EnableOrDisableAll => session.enable_or_disable_all(),
        Action::Resize { width, height } => {
            session.resize(width, height);
            Effect::None
        }
        Action::HoldRangeModifier => {
            session.hold_range_modifier();
            Effect::None
        }
        Action::Ignore => Effect::None,
    };

    (session, effect)
}
