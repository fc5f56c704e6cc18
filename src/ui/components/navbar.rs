//! Top bar showing where the user is and who is signed in.

use crate::entities::Session;
use crate::ui::routes::Route;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct Navbar;

impl Navbar {
    pub fn render(f: &mut Frame, area: Rect, route: Route, session: Option<&Session>) {
        let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(Self::right_width(session))]).areas(area);

        let title = Line::from(vec![
            Span::styled(
                " taskdeck ",
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(Self::section(route), Style::default().fg(Color::Cyan)),
        ]);
        f.render_widget(Paragraph::new(title), left);

        let user = match session {
            Some(session) => Line::from(vec![
                Span::styled(format!("👤 {} ", session.display_name()), Style::default().fg(Color::White)),
                Span::styled("L", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" Logout ", Style::default().fg(Color::Gray)),
            ]),
            None => Line::from(Span::styled("Not signed in ", Style::default().fg(Color::DarkGray))),
        };
        f.render_widget(Paragraph::new(user).alignment(Alignment::Right), right);
    }

    fn section(route: Route) -> String {
        match route {
            Route::Home => "Home".to_string(),
            Route::Login => "Sign in".to_string(),
            Route::Register => "Create account".to_string(),
            Route::Projects => "Projects".to_string(),
            Route::ProjectTasks(id) => format!("Projects › #{}", id),
        }
    }

    fn right_width(session: Option<&Session>) -> u16 {
        match session {
            Some(session) => session.display_name().chars().count() as u16 + 14,
            None => 14,
        }
    }
}
