//! Terminal User Interface (TUI) module
//!
//! Interactive front end with two tabs: shorten a URL, and browse every
//! short link with its click count.
//!
//! Requests never block the screen. They run on tokio tasks and their
//! results come back through an [`action::Action`] channel that the event
//! loop drains every frame.

use std::io::{self, Stderr};
use std::sync::Arc;
use std::time::Instant;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

mod action;
mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

pub use action::Action;
pub use app::{App, CurrentScreen};

use crate::client::LinkApi;
use crate::clipboard::SystemClipboard;
use crate::config::StaticConfig;
use ui::ui;

type Tty = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(api: Arc<dyn LinkApi>, config: &StaticConfig) -> color_eyre::Result<()> {
    let mut terminal = setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(api, config, tx, Box::new(SystemClipboard::new()));
    info!("TUI started against {}", app.api_base);

    let res = run_app(&mut terminal, &mut app, &mut rx, config).await;

    restore_terminal();
    terminal.show_cursor()?;
    info!("TUI exited");

    res
}

fn setup_terminal() -> color_eyre::Result<Tty> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stderr);
    Ok(Terminal::new(backend)?)
}

/// Leave the alternate screen and raw mode
///
/// Best effort: also called from the panic hook, where the terminal may
/// be in any state.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stderr(), DisableBracketedPaste, LeaveAlternateScreen, Show);
}

/// Main application loop
async fn run_app(
    terminal: &mut Tty,
    app: &mut App,
    rx: &mut UnboundedReceiver<Action>,
    config: &StaticConfig,
) -> color_eyre::Result<()> {
    let tick_rate = config.ui.tick_rate();

    loop {
        terminal.draw(|f| ui(f, app))?;

        // Finished requests first, so a result never waits for a key press
        while let Ok(action) = rx.try_recv() {
            debug!("Applying action: {:?}", action);
            app.apply(action);
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event_handler::handle_key_event(app, key) {
                        return Ok(());
                    }
                }
                Event::Paste(text) if app.current_screen == CurrentScreen::Shorten => {
                    input_handler::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        app.on_tick(Instant::now());
    }
}
