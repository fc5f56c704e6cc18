//! Overlay listing the in-memory log buffer, newest first.

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    scroll: u16,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self { logger, scroll: 0 }
    }

    fn level_color(entry: &str) -> Color {
        if entry.contains("] ERROR ") {
            Color::Red
        } else if entry.contains("] WARN ") {
            Color::Yellow
        } else if entry.contains("] DEBUG ") || entry.contains("] TRACE ") {
            Color::DarkGray
        } else {
            Color::White
        }
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll = 0;
                Action::None
            }
            KeyCode::Char('c') => {
                self.logger.clear();
                self.scroll = 0;
                Action::None
            }
            KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::ShowLogs(false),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, area);

        let lines: Vec<Line> = self
            .logger
            .get_logs()
            .into_iter()
            .map(|entry| {
                let color = Self::level_color(&entry);
                Line::from(Span::styled(entry, Style::default().fg(color)))
            })
            .collect();
        let max_scroll = (lines.len() as u16).saturating_sub(1);
        self.scroll = self.scroll.min(max_scroll);

        let logs = Paragraph::new(lines).scroll((self.scroll, 0)).block(
            Block::default()
                .title(DIALOG_TITLE_LOGS)
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(logs, area);
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn on_focus(&mut self) {
        self.scroll = 0;
    }
}
