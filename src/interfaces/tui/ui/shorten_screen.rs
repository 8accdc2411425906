use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::InputField;
use crate::flow::{AckKind, FlowError, FlowState};
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Label of the copy control while no acknowledgment is showing
pub const COPY_LABEL: &str = "Copy";

pub fn draw_shorten_screen(frame: &mut Frame, app: &App, area: Rect) {
    let validation = match app.shorten.state() {
        FlowState::Failed(err @ FlowError::Validation) => Some(err.user_message()),
        _ => None,
    };

    let field = InputField::new("Long URL", app.shorten.input())
        .active(app.current_screen == CurrentScreen::Shorten)
        .error(validation)
        .placeholder("https://example.com/a/very/long/path");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(field.height()), Constraint::Min(5)])
        .split(area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Shorten a URL")
        .title_style(Style::default().fg(colors::PRIMARY).bold());
    frame.render_widget(outer, area);

    field.render(frame, chunks[0]);
    draw_result_panel(frame, app, chunks[1], Instant::now());
}

fn draw_result_panel(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let (lines, border_color) = match app.shorten.state() {
        FlowState::Idle | FlowState::Failed(FlowError::Validation) => (
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("Type a long URL and press ", Style::default().fg(colors::MUTED)),
                    Span::styled("[Enter]", Style::default().fg(colors::SUCCESS).bold()),
                ]),
            ],
            colors::MUTED,
        ),
        FlowState::Loading => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Shortening...",
                    Style::default().fg(colors::WARNING).bold(),
                )),
            ],
            colors::WARNING,
        ),
        FlowState::Failed(err) => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    err.user_message(),
                    Style::default().fg(colors::ERROR).bold(),
                )),
            ],
            colors::ERROR,
        ),
        FlowState::Success(result) => {
            let copy_control = match app.shorten.acknowledgment(now) {
                Some(kind @ AckKind::Copied) => {
                    Span::styled(kind.text(), Style::default().fg(colors::SUCCESS).bold())
                }
                Some(kind @ AckKind::CopyFailed) => {
                    Span::styled(kind.text(), Style::default().fg(colors::ERROR).bold())
                }
                None => Span::styled(
                    format!("[Ctrl+Y] {}", COPY_LABEL),
                    Style::default().fg(colors::PRIMARY).bold(),
                ),
            };
            (
                vec![
                    Line::from(""),
                    Line::from(Span::styled("Shortened URL:", Style::default().fg(Color::White))),
                    Line::from(Span::styled(
                        result.short_url.clone(),
                        Style::default().fg(colors::PRIMARY).bold().underlined(),
                    )),
                    Line::from(""),
                    Line::from(copy_control),
                ],
                colors::SUCCESS,
            )
        }
    };

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title("Result"),
        )
        .wrap(Wrap { trim: false })
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(panel, area);
}
