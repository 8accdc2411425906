// UI submodules
mod common;
mod exiting;
mod help;
mod links_screen;
mod shorten_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar, status_line};
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use links_screen::draw_links_screen;
pub use shorten_screen::draw_shorten_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Overlays are drawn on top of the tab they were opened from
    match app.current_screen {
        CurrentScreen::Shorten | CurrentScreen::Links => {
            let tab = app.current_screen;
            draw_tab(frame, app, tab, main_chunks[1]);
        }
        CurrentScreen::Help => {
            let tab = app.previous_screen;
            draw_tab(frame, app, tab, main_chunks[1]);
            draw_help_screen(frame, main_chunks[1]);
        }
        CurrentScreen::Exiting => {
            let tab = app.previous_screen;
            draw_tab(frame, app, tab, main_chunks[1]);
            draw_exiting_screen(frame, app.is_busy(), main_chunks[1]);
        }
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}

fn draw_tab(frame: &mut Frame, app: &mut App, tab: CurrentScreen, area: Rect) {
    match tab {
        CurrentScreen::Links => draw_links_screen(frame, app, area),
        _ => draw_shorten_screen(frame, app, area),
    }
}
