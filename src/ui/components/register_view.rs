use super::common::{
    create_dialog_block, create_error_paragraph, create_instructions_paragraph,
    shortcuts::{ENTER_SUBMIT, ESC_BACK, SEPARATOR, TAB_NEXT},
};
use super::form::{Form, FormEvent, TextField};
use crate::constants::ERROR_REGISTRATION_FIELDS_REQUIRED;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

const NAME: usize = 0;
const EMAIL: usize = 1;
const PASSWORD: usize = 2;

/// Account creation form. A successful registration signs the user in.
#[derive(Debug)]
pub struct RegisterView {
    form: Form,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for RegisterView {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                TextField::new("Name"),
                TextField::new("Email"),
                TextField::masked("Password"),
            ]),
            error: None,
            submitting: false,
        }
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }
        if self.form.is_blank(NAME) || self.form.is_blank(EMAIL) || self.form.raw_value(PASSWORD).is_empty() {
            self.error = Some(ERROR_REGISTRATION_FIELDS_REQUIRED.to_string());
            return Action::None;
        }

        self.error = None;
        self.submitting = true;
        Action::SubmitRegistration {
            name: self.form.value(NAME).to_string(),
            email: self.form.value(EMAIL).to_string(),
            password: self.form.raw_value(PASSWORD).to_string(),
        }
    }
}

impl Component for RegisterView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.form.handle_key(key) {
            FormEvent::Submit => self.submit(),
            FormEvent::Cancel => Action::Navigate(Route::Login),
            FormEvent::Edited | FormEvent::Ignored => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoggedIn(_) => {
                self.submitting = false;
                self.form.reset();
                action
            }
            // Auto-login failed after a successful signup.
            Action::Navigate(Route::Login) if self.submitting => {
                self.submitting = false;
                self.form.reset();
                action
            }
            Action::RegistrationFailed(message) => {
                self.submitting = false;
                self.error = Some(message);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::centered_rect_lines(50, self.form.height() + 5, rect);
        f.render_widget(Clear, area);
        let block = create_dialog_block(" Create account ", Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [fields, error, hints] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.form.render(f, fields);
        f.render_widget(create_error_paragraph(self.error.as_deref()), error);
        f.render_widget(
            create_instructions_paragraph(&[ENTER_SUBMIT, SEPARATOR, TAB_NEXT, SEPARATOR, ESC_BACK]),
            hints,
        );
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn on_focus(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(view: &mut RegisterView, code: KeyCode) -> Action {
        view.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn all_fields_required() {
        let mut view = RegisterView::new();
        for c in "Ada".chars() {
            press(&mut view, KeyCode::Char(c));
        }
        assert_eq!(press(&mut view, KeyCode::Enter), Action::None);
        assert_eq!(view.error.as_deref(), Some(ERROR_REGISTRATION_FIELDS_REQUIRED));
    }

    #[test]
    fn escape_goes_back_to_login() {
        let mut view = RegisterView::new();
        assert_eq!(press(&mut view, KeyCode::Esc), Action::Navigate(Route::Login));
    }
}
