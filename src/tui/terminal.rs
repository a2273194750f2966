//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::api::{ApiClient, Transport};
use crate::config::Settings;
use crate::storage::SessionStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits
pub fn run_tui<T: Transport>(
    client: ApiClient<T>,
    store: SessionStore,
    settings: &Settings,
) -> Result<()> {
    let mut app = App::new(client, store, settings);
    if app.is_authenticated() {
        app.request_refresh_all();
    }

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let result = run_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    result
}

fn run_loop<T: Transport>(terminal: &mut Tui, app: &mut App<T>, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| super::views::render(frame, app))?;

        // Queued requests run after the loading state has been drawn
        if app.has_pending() {
            app.run_pending();
            continue;
        }

        let Ok(event) = events.next() else {
            tracing::warn!("terminal event channel closed");
            break;
        };
        handle_event(app, event)?;

        if app.should_quit {
            break;
        }
    }

    tracing::info!("tui closed");
    Ok(())
}
