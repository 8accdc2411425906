use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
};

use crate::flow::{FlowError, ListingView};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{EMPTY_LIST_TEXT, colors};
use crate::utils::truncate_url;

fn header_cell(name: &'static str) -> Span<'static> {
    Span::styled(
        name,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_links_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.listing.view() {
        ListingView::Idle => draw_message(
            frame,
            area,
            vec![hint_line("r", "to load links")],
        ),
        ListingView::Loading => draw_message(
            frame,
            area,
            vec![Line::from(Span::styled(
                "Loading links...",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::BOLD),
            ))],
        ),
        ListingView::Failed(err) => draw_failure(frame, area, err),
        ListingView::Empty | ListingView::Records(_) => draw_table(frame, app, area),
    }
}

fn hint_line(key: &str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", text), Style::default().fg(colors::MUTED)),
    ])
}

fn links_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
}

fn draw_message(frame: &mut Frame, area: Rect, body: Vec<Line<'static>>) {
    let mut text = vec![Line::from(""), Line::from("")];
    text.extend(body);

    let paragraph = Paragraph::new(text)
        .block(links_block("Short Links".to_string()))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_failure(frame: &mut Frame, area: Rect, err: FlowError) {
    draw_message(
        frame,
        area,
        vec![
            Line::from(Span::styled(
                err.user_message(),
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            hint_line("r", "to retry"),
        ],
    );
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec![
        header_cell("Original URL"),
        header_cell("Short URL"),
        header_cell("Clicks"),
    ])
    .bottom_margin(1);

    // border 2行 + header 1行 + header margin 1行 = 4行开销
    let visible_height = (area.height as usize).saturating_sub(4);
    app.last_visible_height = visible_height.max(1);

    let total = app.record_count();
    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    let app: &App = app;
    let records = app.listing.records();

    let rows: Vec<Row> = if records.is_empty() {
        vec![Row::new(vec![Span::styled(
            EMPTY_LIST_TEXT,
            Style::default().fg(colors::MUTED),
        )])]
    } else {
        // 虚拟渲染：只构建可见行的 Row
        records[offset..end]
            .iter()
            .map(|record| {
                Row::new(vec![
                    Span::styled(
                        truncate_url(&record.original_url, app.url_truncate_length),
                        Style::default().fg(Color::Blue),
                    ),
                    Span::styled(
                        record.short_url.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(record.clicks.to_string(), Style::default().fg(Color::Green)),
                ])
            })
            .collect()
    };

    let title = format!(
        "Short Links ({}) | Clicks: {}",
        total,
        app.listing.total_clicks()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(35),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(links_block(title))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if !records.is_empty() && app.selected_index >= offset && app.selected_index < end {
        virtual_state.select(Some(app.selected_index - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
