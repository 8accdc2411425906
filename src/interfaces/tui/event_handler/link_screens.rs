//! Event handlers for link-related screens
//!
//! Handles: Shorten, Links

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{handle_backspace, handle_text_input};

/// Handle shorten screen input
///
/// Plain characters always go to the input field, so shortcuts here use
/// Ctrl or non-character keys.
pub fn handle_shorten_screen(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('y') => {
                app.copy_shortened();
            }
            KeyCode::Char('u') => app.shorten.clear_input(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => app.submit_shorten(),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Tab => app.activate_links(),
        KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Esc => {
            if app.shorten.input().is_empty() {
                app.open_overlay(CurrentScreen::Exiting);
            } else {
                app.shorten.clear_input();
            }
        }
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}

/// Handle link table input
pub fn handle_links_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => app.load_links(),
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.copy_selected_link();
        }
        KeyCode::Tab => app.current_screen = CurrentScreen::Shorten,
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => {
            app.open_overlay(CurrentScreen::Help);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.open_overlay(CurrentScreen::Exiting);
        }
        _ => {}
    }
    false
}
