//! TUI application main loop.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use tokio::runtime::Runtime;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::error::{LakeError, Result};
use crate::session::{Effect, Input};
use crate::store::{RecordStore, SaveQueue};
use crate::util::truncate_path;

use super::components::StatusBar;
use super::events::{Event, EventHandler, KeyBindings};
use super::state::{AppState, StatusKind};

/// Width of the Print column.
const PRINT_COLUMN_WIDTH: u16 = 5;

/// Key help shown under the table.
const HELP_LINES: [&str; 2] = [
    "Space: select/deselect row | Shift+Space: select range | Enter: toggle selected rows",
    "t: toggle all | a: select all | d: deselect all | e: toggle enable/disable all | x: toggle current row | u: undo | q: quit",
];

/// Farewell shown once the session has quit.
pub const FAREWELL: &str = "Bye!";

/// Run the editor against `store`.
///
/// Records are loaded before the terminal is touched, so a missing or
/// malformed store fails cleanly with the screen intact.
pub fn run(store: Arc<dyn RecordStore>, config: &Config) -> Result<()> {
    let records = store.load()?;
    info!(store = %store.describe(), records = records.len(), "Session starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("belgianlake-save")
        .enable_all()
        .build()
        .map_err(|e| LakeError::io("Failed to start save worker", e))?;

    let mut app = AppState::new(records, store.describe(), config);

    // Setup terminal
    enable_raw_mode().map_err(|e| {
        LakeError::io(
            "Cannot launch the editor - no interactive terminal available",
            e,
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| LakeError::io("Failed to enter alternate screen", e))?;

    // Shift+Space is only distinguishable from Space with enhanced key reporting.
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .map_err(|e| LakeError::io("Failed to enable key reporting", e))?;
    }
    debug!(enhanced, "Terminal ready");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| LakeError::io("Failed to create terminal", e))?;

    let events = EventHandler::new(Duration::from_millis(250));
    let saved_tx = events.sender();
    let mut queue = SaveQueue::spawn(runtime.handle(), Arc::clone(&store), move |outcome| {
        let _ = saved_tx.send(Event::Saved(outcome));
    });

    // Main loop
    let result = run_loop(&mut terminal, &mut app, &events, &mut queue);

    let restored = restore_terminal(&mut terminal, enhanced);

    finish(
        &runtime,
        queue,
        std::iter::from_fn(|| events.try_next()),
        &mut app,
        result,
        restored,
    )?;
    println!("{FAREWELL}");
    Ok(())
}

/// Leave raw mode and the alternate screen.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    enhanced: bool,
) -> Result<()> {
    if enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let raw = disable_raw_mode().map_err(|e| LakeError::io("Failed to disable raw mode", e));
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| LakeError::io("Failed to leave alternate screen", e));
    let cursor = terminal
        .show_cursor()
        .map_err(|e| LakeError::io("Failed to show cursor", e));
    raw.and(screen).and(cursor)
}

/// Drain the save queue, then report the first error of the session.
///
/// Every issued save finishes before this returns, whatever happened to the
/// event loop or the terminal.
fn finish(
    runtime: &Runtime,
    queue: SaveQueue,
    pending: impl Iterator<Item = Event>,
    app: &mut AppState,
    result: Result<()>,
    restored: Result<()>,
) -> Result<()> {
    debug!(pending = app.pending_saves, "Draining save queue");
    runtime.block_on(queue.shutdown());
    for event in pending {
        if let Event::Saved(outcome) = event {
            app.save_finished(&outcome);
        }
    }
    if app.failed_saves > 0 {
        warn!(failed = app.failed_saves, "Some saves did not complete");
        eprintln!(
            "Warning: {} save(s) failed; {} may be out of date",
            app.failed_saves, app.store_label
        );
    }

    result.and(restored)
}

/// Main event loop using EventHandler.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    events: &EventHandler,
    queue: &mut SaveQueue,
) -> Result<()> {
    let bindings = KeyBindings::default();

    if let Ok(size) = terminal.size() {
        app.apply(resize_input(size.width, size.height, app.show_help));
    }

    loop {
        terminal
            .draw(|f| draw_ui(f, app))
            .map_err(|e| LakeError::tui(format!("Failed to draw: {e}")))?;

        if app.session().is_quitting() {
            return Ok(());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                for input in bindings.translate(&key) {
                    dispatch(app, queue, input);
                }
            }
            Ok(Event::Resize(width, height)) => {
                app.apply(resize_input(width, height, app.show_help));
            }
            Ok(Event::Saved(outcome)) => app.save_finished(&outcome),
            Ok(Event::Tick) => {}
            Err(_) => return Err(LakeError::tui("Input thread stopped")),
        }
    }
}

/// Apply one input and hand any resulting save to the queue.
fn dispatch(app: &mut AppState, queue: &mut SaveQueue, input: Input) {
    if let Effect::Save(records) = app.apply(input) {
        match queue.submit(records) {
            Ok(ticket) => {
                trace!(%ticket, "Save issued");
                app.save_issued();
            }
            Err(e) => {
                warn!(error = %e, "Could not queue save");
                app.save_rejected(&e);
            }
        }
    }
}

/// Viewport input for a terminal of `width` x `height`.
///
/// The session pages by table body rows, so the status bar, help footer,
/// borders and header row are subtracted.
fn resize_input(width: u16, height: u16, show_help: bool) -> Input {
    let chrome = 1 + help_height(show_help) + 2 + 1;
    Input::Resize {
        width,
        height: height.saturating_sub(chrome).max(1),
    }
}

fn help_height(show_help: bool) -> u16 {
    if show_help {
        HELP_LINES.len() as u16
    } else {
        0
    }
}

/// Draw the UI.
fn draw_ui(f: &mut Frame, app: &mut AppState) {
    if app.session().is_quitting() {
        f.render_widget(Paragraph::new(FAREWELL), f.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(help_height(app.show_help)),
        ])
        .split(f.area());

    draw_table(f, app, chunks[0]);
    draw_status_bar(f, app, chunks[1]);
    if app.show_help {
        draw_help(f, app, chunks[2]);
    }
}

/// Draw the record table.
fn draw_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let path_width = usize::from(app.path_width);
    let theme = &app.theme;

    let rows: Vec<Row> = app
        .session()
        .rows()
        .into_iter()
        .map(|row| {
            let status = Cell::from(Span::styled(row.status, theme.status_style(row.enabled)));
            let path = Cell::from(truncate_path(&row.path, path_width));
            let style = if row.selected {
                theme.marked_style()
            } else {
                Style::default().fg(theme.foreground)
            };
            Row::new(vec![status, path]).style(style)
        })
        .collect();

    let header = Row::new(vec!["Print", "File"]).style(theme.header_style());
    let table = Table::new(
        rows,
        [
            Constraint::Length(PRINT_COLUMN_WIDTH),
            Constraint::Length(app.path_width),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(" {} ", app.store_label))
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    )
    .row_highlight_style(theme.selection_style());

    let cursor = if app.session().is_empty() {
        None
    } else {
        Some(app.session().cursor())
    };
    app.table_state.select(cursor);
    f.render_stateful_widget(table, area, &mut app.table_state);
}

/// Draw the status bar.
fn draw_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = &app.theme;
    let (total, enabled, selected) = app.counts();
    let session = app.session();

    let mut left = vec![
        Span::styled(
            " belgianlake ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::raw(format!("{enabled}/{total} enabled")),
        Span::raw(" │ "),
        Span::styled(format!("{selected} selected"), theme.marked_style()),
        Span::raw(" │ "),
        Span::raw(format!("undo {}", session.undo_depth())),
    ];
    if session.range_modifier_held() {
        left.push(Span::raw(" │ "));
        left.push(Span::styled("RANGE", Style::default().fg(theme.warning)));
    }

    let mut right = Vec::new();
    if app.pending_saves > 0 {
        right.push(Span::styled(
            format!("saving {} ", app.pending_saves),
            Style::default().fg(theme.warning),
        ));
    }
    if let Some(ref msg) = app.status_message {
        let style = match msg.kind {
            StatusKind::Info => theme.success_style(),
            StatusKind::Error => theme.error_style(),
        };
        right.push(Span::styled(format!("{} ", msg.text), style));
    }

    StatusBar::new()
        .left(left)
        .right(right)
        .style(Style::default().fg(theme.foreground))
        .render(f, area);
}

/// Draw the key help footer.
fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::from(Span::styled(*l, app.theme.muted_style())))
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
