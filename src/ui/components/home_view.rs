use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts::SEPARATOR, InstructionShortcut};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Landing screen with links to the other routes.
#[derive(Debug, Default)]
pub struct HomeView {
    authenticated: bool,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    fn shortcuts(&self) -> Vec<InstructionShortcut> {
        if self.authenticated {
            vec![("p", Color::Green, " Projects"), SEPARATOR, ("q", Color::Red, " Quit")]
        } else {
            vec![
                ("l", Color::Green, " Sign in"),
                SEPARATOR,
                ("r", Color::Cyan, " Register"),
                SEPARATOR,
                ("q", Color::Red, " Quit"),
            ]
        }
    }
}

impl Component for HomeView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('p') | KeyCode::Enter if self.authenticated => Action::Navigate(Route::Projects),
            KeyCode::Char('l') | KeyCode::Enter => Action::Navigate(Route::Login),
            KeyCode::Char('r') => Action::Navigate(Route::Register),
            KeyCode::Char('p') => Action::Navigate(Route::Projects),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect_lines(60, 9, rect);
        f.render_widget(Clear, area);
        let block = create_dialog_block(" Welcome ", Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [text_area, hints_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let text = vec![
            Line::from(Span::styled(
                "taskdeck",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Organise your projects and keep track of their tasks."),
        ];
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            text_area,
        );
        f.render_widget(create_instructions_paragraph(&self.shortcuts()), hints_area);
    }
}
