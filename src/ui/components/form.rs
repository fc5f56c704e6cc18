//! Minimal text form used by the login, registration and editor screens.

use super::common::create_input_paragraph;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Outcome of feeding a key to a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Cancel,
    Edited,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<TextField>,
    pub focus: usize,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.trimmed()).unwrap_or_default()
    }

    /// Raw (untrimmed) value, for passwords.
    pub fn raw_value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or_default()
    }

    pub fn is_blank(&self, index: usize) -> bool {
        self.fields.get(index).map(TextField::is_blank).unwrap_or(true)
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Enter => FormEvent::Submit,
            KeyCode::Esc => FormEvent::Cancel,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len().max(1);
                FormEvent::Edited
            }
            KeyCode::BackTab | KeyCode::Up => {
                let len = self.fields.len().max(1);
                self.focus = (self.focus + len - 1) % len;
                FormEvent::Edited
            }
            KeyCode::Backspace => match self.fields.get_mut(self.focus) {
                Some(field) => {
                    field.value.pop();
                    FormEvent::Edited
                }
                None => FormEvent::Ignored,
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => match self.fields.get_mut(self.focus) {
                Some(field) => {
                    field.value.push(c);
                    FormEvent::Edited
                }
                None => FormEvent::Ignored,
            },
            _ => FormEvent::Ignored,
        }
    }

    /// Height needed to render every field.
    pub fn height(&self) -> u16 {
        self.fields.len() as u16 * 3
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self.fields.iter().map(|_| Constraint::Length(3)).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (index, (field, chunk)) in self.fields.iter().zip(chunks.iter()).enumerate() {
            let paragraph = create_input_paragraph(&field.value, field.label, index == self.focus, field.masked);
            f.render_widget(paragraph, *chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = Form::new(vec![TextField::new("Email"), TextField::masked("Password")]);
        form.handle_key(key(KeyCode::Char('a')));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('p')));
        form.handle_key(key(KeyCode::Char('w')));
        form.handle_key(key(KeyCode::Backspace));

        assert_eq!(form.value(0), "a");
        assert_eq!(form.raw_value(1), "p");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = Form::new(vec![TextField::new("A"), TextField::new("B")]);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, 1);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn enter_and_esc_are_reported() {
        let mut form = Form::new(vec![TextField::new("A")]);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormEvent::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormEvent::Cancel);
    }
}
