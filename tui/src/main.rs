//! Todo TUI
//!
//! Terminal client for the todo REST API.
//!
//! ## Layout
//!
//! - Top: the add form (title input, optional description input)
//! - Middle: the todo list, one row per item
//! - Bottom: status/help bar
//!
//! ## Keys
//!
//! - Tab / Shift-Tab: cycle focus between the inputs and the list
//! - Enter: add the drafted todo (form) / toggle completion (list)
//! - j/k or ↑/↓: move the list selection
//! - d or Delete: delete the selected todo
//! - r: refetch the list from the server
//! - q (list) or Ctrl-C: quit
//!
//! The server base URL comes from `TODO_API_URL` when set. Set
//! `TODO_TUI_LOG` to a level (e.g. `warn`) to log swallowed request
//! failures to a file.

mod app;
mod transport;
mod ui;

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use todo_core::{TodoSession, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

use app::{App, Focus};
use transport::UreqTransport;

fn main() -> Result<()> {
    init_logging();

    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let transport = UreqTransport::new();
    let mut app = App::new(TodoSession::new(&base_url));

    // First paint shows a real server snapshot, or the empty state if the
    // fetch failed (the failure only reaches the log).
    app.refresh(&transport);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app, &transport);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    transport: &UreqTransport,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Clear status message on any key press
                app.status_message = None;

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }

                    KeyCode::Tab => app.focus_next(),
                    KeyCode::BackTab => app.focus_prev(),

                    KeyCode::Enter => match app.focus {
                        Focus::Title | Focus::Description => app.submit(transport),
                        Focus::List => app.toggle_selected(transport),
                    },

                    _ => match app.focus {
                        Focus::Title | Focus::Description => match key.code {
                            KeyCode::Char(c) => app.insert_char(c),
                            KeyCode::Backspace => app.delete_char(),
                            _ => {}
                        },
                        Focus::List => match key.code {
                            KeyCode::Char('q') => app.should_quit = true,
                            KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                            KeyCode::Char('j') | KeyCode::Down => app.move_down(),
                            KeyCode::Char(' ') => app.toggle_selected(transport),
                            KeyCode::Char('d') | KeyCode::Delete => {
                                app.delete_selected(transport)
                            }
                            KeyCode::Char('r') => app.refresh(transport),
                            _ => {}
                        },
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Initialize logging for TUI mode
///
/// The raw-mode screen owns stdout, so logs go to a file in the temp
/// directory, and only when `TODO_TUI_LOG` is set.
fn init_logging() {
    let Ok(log_level) = std::env::var("TODO_TUI_LOG") else {
        return;
    };

    let log_path = std::env::temp_dir().join("todo-tui.log");
    let log_file = match std::fs::File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("todo_core={log_level},todo_tui={log_level}"));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    tracing::info!("logging initialized to {:?}", log_path);
}
