//! Status bar component

use crate::constants::LOADING;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar. While busy it shows a loading indicator,
    /// otherwise `message` when set and the key hints when not.
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>, hints: &str, busy: bool) {
        let status_text = match message {
            _ if busy => format!("🔄 {}", LOADING),
            Some(message) => message.to_string(),
            None => hints.to_string(),
        };

        let status_color = if busy {
            Color::Yellow
        } else if status_text.starts_with('❌') {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
