use super::common::{
    create_dialog_block, create_error_paragraph, create_instructions_paragraph,
    shortcuts::{ENTER_SUBMIT, ESC_BACK, SEPARATOR, TAB_NEXT},
};
use super::form::{Form, FormEvent, TextField};
use crate::constants::ERROR_CREDENTIALS_REQUIRED;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    widgets::Clear,
    Frame,
};

const EMAIL: usize = 0;
const PASSWORD: usize = 1;

/// Email/password sign-in form.
#[derive(Debug)]
pub struct LoginView {
    form: Form,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![TextField::new("Email"), TextField::masked("Password")]),
            error: None,
            submitting: false,
        }
    }

    fn submit(&mut self) -> Action {
        if self.submitting {
            return Action::None;
        }
        if self.form.is_blank(EMAIL) || self.form.raw_value(PASSWORD).is_empty() {
            self.error = Some(ERROR_CREDENTIALS_REQUIRED.to_string());
            return Action::None;
        }

        self.error = None;
        self.submitting = true;
        Action::SubmitLogin {
            email: self.form.value(EMAIL).to_string(),
            password: self.form.raw_value(PASSWORD).to_string(),
        }
    }
}

impl Component for LoginView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Navigate(Route::Register);
        }
        match self.form.handle_key(key) {
            FormEvent::Submit => self.submit(),
            FormEvent::Cancel => Action::Navigate(Route::Home),
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
            Action::LoginFailed(message) => {
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
        let block = create_dialog_block(" Sign in ", Color::Cyan);
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
            create_instructions_paragraph(&[
                ENTER_SUBMIT,
                SEPARATOR,
                TAB_NEXT,
                SEPARATOR,
                ("Ctrl+R", Color::Cyan, " Register"),
                SEPARATOR,
                ESC_BACK,
            ]),
            hints,
        );
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn on_focus(&mut self) {
        self.error = None;
        self.submitting = false;
    }
}
