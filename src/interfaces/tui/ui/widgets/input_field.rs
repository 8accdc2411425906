//! 通用输入框组件
//!
//! 单行文本输入，支持：
//! - 激活状态高亮
//! - 验证错误显示
//! - 字符计数
//! - 光标定位

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Long URL", app.shorten.input())
///     .active(true)
///     .error(Some("Please enter a URL to shorten"))
///     .placeholder("https://...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
        }
    }

    /// 设置激活状态，激活时显示光标
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置验证错误
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 计算所需的高度（输入框 + 错误行）
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        if self.value.is_empty() {
            return match self.placeholder {
                Some(placeholder) => format!("{} ({})", self.title, placeholder),
                None => self.title.to_string(),
            };
        }
        format!("{} ({} chars)", self.title, self.value.chars().count())
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.is_active {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 渲染输入框
    ///
    /// `area` 高度应该是 [`InputField::height`]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        // 超出宽度时只显示末尾部分
        let inner_width = chunks[0].width.saturating_sub(2) as usize;
        let char_count = self.value.chars().count();
        let skip = (char_count + 1).saturating_sub(inner_width);
        let visible: String = self.value.chars().skip(skip).collect();

        let input = Paragraph::new(visible.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if self.is_active {
            let x = chunks[0].x + 1 + visible.chars().count() as u16;
            frame.set_cursor_position(Position::new(x, chunks[0].y + 1));
        }

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_title() {
        let field = InputField::new("Long URL", "https://例子.com");
        assert_eq!(field.display_title(), "Long URL (14 chars)");

        let field = InputField::new("Long URL", "").placeholder("https://...");
        assert_eq!(field.display_title(), "Long URL (https://...)");
    }

    #[test]
    fn test_input_field_height() {
        let field = InputField::new("Long URL", "x");
        assert_eq!(field.height(), 3);

        let field = InputField::new("Long URL", "").error(Some("Please enter a URL"));
        assert_eq!(field.height(), 4);
    }
}
