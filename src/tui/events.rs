//! TUI event handling.
//!
//! Terminal input is read on a dedicated thread and forwarded over a channel
//! together with periodic ticks. Save outcomes from the background queue are
//! posted onto the same channel so the loop sees them in order with key
//! presses.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode,
};

use crate::session::Input;
use crate::store::SaveOutcome;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Terminal tick.
    Tick,
    /// Key press event.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// A background save finished.
    Saved(SaveOutcome),
}

/// Event handler using channels.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl EventHandler {
    /// Create a new event handler and start the input thread.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(ev) = forwarded {
                    if event_tx.send(ev).is_err() {
                        break;
                    }
                }
            }

            if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// Sender for events produced outside the input thread.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    /// Get the next event.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }

    /// Try to get the next event without blocking.
    pub fn try_next(&self) -> Option<Event> {
        self.rx.try_recv().ok()
    }
}

/// Key binding configuration.
///
/// Command characters (`x`, `t`, `a`, ...) are passed through as
/// [`Input::Char`]; only structural keys are bound here.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Quit keys.
    pub quit: Vec<KeyEvent>,
    /// Navigation up.
    pub up: Vec<KeyEvent>,
    /// Navigation down.
    pub down: Vec<KeyEvent>,
    /// Page up.
    pub page_up: Vec<KeyEvent>,
    /// Page down.
    pub page_down: Vec<KeyEvent>,
    /// Half page up.
    pub half_page_up: Vec<KeyEvent>,
    /// Half page down.
    pub half_page_down: Vec<KeyEvent>,
    /// First row.
    pub top: Vec<KeyEvent>,
    /// Last row.
    pub bottom: Vec<KeyEvent>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec![KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)],
            up: vec![KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)],
            down: vec![KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)],
            page_up: vec![KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)],
            page_down: vec![KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)],
            half_page_up: vec![KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)],
            half_page_down: vec![KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)],
            top: vec![KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)],
            bottom: vec![KeyEvent::new(KeyCode::End, KeyModifiers::NONE)],
        }
    }
}

fn matches(bindings: &[KeyEvent], key: &KeyEvent) -> bool {
    bindings
        .iter()
        .any(|k| k.code == key.code && k.modifiers == key.modifiers)
}

impl KeyBindings {
    /// Translate a key press into session inputs.
    ///
    /// Most keys produce one input. Shift+Space produces the range modifier
    /// followed by a space, and key releases produce nothing.
    pub fn translate(&self, key: &KeyEvent) -> Vec<Input> {
        if key.kind == KeyEventKind::Release {
            return Vec::new();
        }

        let structural = [
            (&self.quit, Input::Quit),
            (&self.up, Input::Up),
            (&self.down, Input::Down),
            (&self.page_up, Input::PageUp),
            (&self.page_down, Input::PageDown),
            (&self.half_page_up, Input::HalfPageUp),
            (&self.half_page_down, Input::HalfPageDown),
            (&self.top, Input::Top),
            (&self.bottom, Input::Bottom),
        ];
        if let Some((_, input)) = structural.iter().find(|(b, _)| matches(b, key)) {
            return vec![*input];
        }

        match key.code {
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                vec![Input::RangeModifier]
            }
            KeyCode::Char(' ') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                vec![Input::RangeModifier, Input::Space]
            }
            KeyCode::Char(' ') if key.modifiers.is_empty() => vec![Input::Space],
            KeyCode::Enter => vec![Input::Enter],
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                vec![Input::Char(c)]
            }
            _ => Vec::new(),
        }
    }
}
