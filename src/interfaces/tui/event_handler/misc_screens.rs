//! Event handlers for overlay screens
//!
//! Handles: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// Any of these closes the help popup
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.close_overlay();
    }
    false
}

/// Exit confirmation: y quits, n / Esc goes back
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_overlay();
            false
        }
        _ => false,
    }
}
