//! Input handling utilities
//!
//! Text editing for the URL field on the shorten screen

use super::app::App;

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if c.is_control() {
        return;
    }
    app.shorten.push_char(c);
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    app.shorten.pop_char();
}

/// Handle a bracketed paste; line breaks are dropped since the field is one line
pub fn handle_paste(app: &mut App, text: &str) {
    let mut input = app.shorten.input().to_string();
    input.extend(text.chars().filter(|c| !c.is_control()));
    app.shorten.set_input(input);
}
