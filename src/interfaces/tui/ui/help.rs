use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn entry(keys: &'static str, desc: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<18}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("SHORTEN"),
        entry("Enter", "Shorten the URL", Color::Green),
        entry("Ctrl+Y", "Copy the short URL", Color::Green),
        entry("Ctrl+U", "Clear the input", Color::Yellow),
        entry("Esc", "Clear input / quit", Color::Red),
        Line::from(""),
        section("LINKS"),
        entry("Up/Down, j/k", "Navigate list", Color::Cyan),
        entry("Home, g", "Jump to top", Color::Cyan),
        entry("End, G", "Jump to bottom", Color::Cyan),
        entry("PageUp/PageDown", "Scroll 10 items", Color::Cyan),
        entry("y", "Copy selected short URL", Color::Green),
        entry("r, F5", "Reload list", Color::Yellow),
        entry("q, Esc", "Quit application", Color::Magenta),
        Line::from(""),
        section("GLOBAL"),
        entry("Tab", "Switch Shorten / Links", Color::Cyan),
        entry("F1, ?", "Show this help", Color::Cyan),
        entry("Ctrl+C", "Quit immediately", Color::Magenta),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
