use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::flow::{AckKind, FlowState};
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version, tabs and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active_tab = if app.current_screen.is_tab() {
        app.current_screen
    } else {
        app.previous_screen
    };

    let mut spans = vec![
        Span::styled("Shortlink Console", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
    ];

    for screen in CurrentScreen::iter().filter(CurrentScreen::is_tab) {
        spans.push(Span::styled("| ", Style::default().fg(colors::MUTED)));
        let style = if screen == active_tab {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", screen.as_ref()), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled("| ", Style::default().fg(colors::MUTED)));
    spans.push(Span::styled(
        format!("Links: {} ", app.listing.records().len()),
        Style::default().fg(colors::WARNING),
    ));
    spans.push(Span::styled(
        format!("Clicks: {} ", app.listing.total_clicks()),
        Style::default().fg(colors::SUCCESS),
    ));
    spans.push(Span::styled("| ", Style::default().fg(colors::MUTED)));
    spans.push(Span::styled(
        app.api_base.clone(),
        Style::default().fg(colors::MUTED),
    ));

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Text and style of the status bar for the visible screen
pub fn status_line(app: &App, now: Instant) -> (String, Style) {
    let on_links = matches!(
        (app.current_screen, app.previous_screen),
        (CurrentScreen::Links, _) | (CurrentScreen::Help | CurrentScreen::Exiting, CurrentScreen::Links)
    );

    let ack = if on_links {
        app.links_ack.current(now)
    } else {
        app.shorten.acknowledgment(now)
    };
    if let Some(kind) = ack {
        let bg = match kind {
            AckKind::Copied => colors::SUCCESS,
            AckKind::CopyFailed => colors::ERROR,
        };
        return (
            kind.text().to_string(),
            Style::default().fg(Color::Black).bg(bg).bold(),
        );
    }

    let error_style = Style::default().fg(Color::White).bg(colors::ERROR).bold();
    let loading_style = Style::default().fg(colors::WARNING);

    if on_links {
        match app.listing.state() {
            FlowState::Failed(err) => (format!("[ERROR] {}", err), error_style),
            FlowState::Loading => ("Loading links...".to_string(), loading_style),
            _ => match app.listing.loaded_at() {
                Some(at) => (
                    format!(
                        "Loaded {} links at {}",
                        app.listing.records().len(),
                        at.format("%H:%M:%S")
                    ),
                    Style::default().fg(colors::PRIMARY),
                ),
                None => ("Ready".to_string(), Style::default().fg(colors::PRIMARY)),
            },
        }
    } else {
        match app.shorten.state() {
            FlowState::Failed(err) => (format!("[ERROR] {}", err), error_style),
            FlowState::Loading => ("Shortening...".to_string(), loading_style),
            FlowState::Success(_) => (
                "[SUCCESS] URL shortened".to_string(),
                Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
            ),
            FlowState::Idle => ("Ready".to_string(), Style::default().fg(colors::PRIMARY)),
        }
    }
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = status_line(app, Instant::now());

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Shorten => vec![
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+Y", "Copy", Color::Cyan),
            ("Ctrl+U", "Clear", Color::Yellow),
            ("Tab", "Links", Color::Cyan),
            ("F1", "Help", Color::Blue),
            ("Esc", "Quit", Color::Magenta),
        ],
        CurrentScreen::Links => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("y", "Copy", Color::Green),
            ("r", "Reload", Color::Yellow),
            ("Tab", "Shorten", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
        CurrentScreen::Help => vec![("Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
