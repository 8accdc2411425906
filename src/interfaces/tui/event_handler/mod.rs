//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - link_screens: Shorten, Links
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod link_screens;
mod misc_screens;

use link_screens::*;
use misc_screens::*;

/// Handle a key press; returns true when the app should quit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Shorten => handle_shorten_screen(app, key),
        CurrentScreen::Links => handle_links_screen(app, key),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
