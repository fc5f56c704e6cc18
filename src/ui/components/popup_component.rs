//! Modal renderer for requests queued on the dialog coordinator.

use crate::dialog::{DialogHost, DialogKind, DialogRequest, DialogResult};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Owns the [`DialogHost`]; there is exactly one per application.
pub struct PopupComponent {
    host: DialogHost,
}

impl PopupComponent {
    pub fn new(host: DialogHost) -> Self {
        Self { host }
    }

    /// Presents the next queued dialog when none is showing and hides one
    /// nobody waits for anymore. Returns true when what is shown changed.
    pub fn poll(&mut self) -> bool {
        let before = self.host.current().cloned();
        self.host.poll() != before.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.host.is_visible()
    }

    pub fn current(&self) -> Option<&DialogRequest> {
        self.host.current()
    }

    fn answer(&mut self, result: DialogResult) -> Action {
        if let Err(e) = self.host.respond(result) {
            log::warn!("Popup: {}", e);
        }
        // Show whatever was queued behind the answered dialog right away.
        self.host.poll();
        Action::None
    }

    fn buttons(request: &DialogRequest) -> Paragraph<'static> {
        let key = |k: &'static str, color: Color| Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD));
        let label = |l: &str| Span::styled(format!(" {}", l), Style::default().fg(Color::Gray));

        let mut spans = vec![key("Enter", Color::Green), label(&request.confirm_label)];
        if let Some(cancel) = &request.cancel_label {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
            spans.push(key("Esc", Color::Red));
            spans.push(label(cancel));
        }
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn style_for(kind: DialogKind) -> (&'static str, Color) {
        match kind {
            DialogKind::Confirm => ("⚠️", Color::Yellow),
            DialogKind::Alert => ("ℹ️", Color::Cyan),
            DialogKind::Success => ("✅", Color::Green),
            DialogKind::Error => ("❌", Color::Red),
        }
    }
}

impl Component for PopupComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.host.is_visible() {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.answer(DialogResult::CONFIRMED),
            KeyCode::Esc | KeyCode::Char('n') => self.answer(DialogResult::CANCELLED),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(request) = self.host.current() else {
            return;
        };
        let (icon, color) = Self::style_for(request.kind);

        let message_lines = request.message.lines().count().max(1) as u16;
        let area = LayoutManager::centered_rect_lines(50, message_lines + 6, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} ", icon, request.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [message_area, buttons_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        f.render_widget(
            Paragraph::new(request.message.clone())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(Color::White)),
            message_area,
        );

        f.render_widget(Self::buttons(request), buttons_area);
    }

    fn captures_input(&self) -> bool {
        self.host.is_visible()
    }
}
