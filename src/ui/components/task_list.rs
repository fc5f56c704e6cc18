use super::common::{
    create_dialog_block, create_error_paragraph, create_input_paragraph, create_instructions_paragraph,
    shortcuts::{ENTER_SUBMIT, ESC_BACK, ESC_CANCEL, SEPARATOR, TAB_NEXT},
};
use super::form::{Form, FormEvent, TextField};
use super::scrollbar_helper::ScrollbarHelper;
use crate::constants::{DUE_DATE_FORMAT, ERROR_INVALID_DUE_DATE, ERROR_TITLE_REQUIRED, LOADING};
use crate::entities::{Project, Task, TaskRequest};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const DUE_DATE: usize = 2;

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Browse,
    Add { form: Form, error: Option<String> },
    /// Inline title edit of the selected task.
    Rename { task_id: i64, field: TextField },
}

/// The `/projects/{id}/tasks` screen.
#[derive(Debug)]
pub struct TaskListView {
    pub project_id: Option<i64>,
    pub project: Option<Project>,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    list_state: ListState,
    scrollbar: ScrollbarHelper,
    mode: Mode,
}

impl Default for TaskListView {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an optional `YYYY-MM-DD` due date; blank means no due date.
pub fn parse_due_date(input: &str) -> Result<Option<NaiveDate>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| ERROR_INVALID_DUE_DATE.to_string())
}

impl TaskListView {
    pub fn new() -> Self {
        Self {
            project_id: None,
            project: None,
            tasks: Vec::new(),
            loading: false,
            error: None,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            mode: Mode::Browse,
        }
    }

    /// Switches to another project, dropping whatever was shown before.
    pub fn set_project(&mut self, project_id: i64) {
        if self.project_id != Some(project_id) {
            self.project = None;
            self.tasks.clear();
            self.list_state.select(None);
        }
        self.project_id = Some(project_id);
        self.error = None;
        self.mode = Mode::Browse;
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|index| self.tasks.get(index))
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self.mode, Mode::Browse)
    }

    fn clamp_selection(&mut self) {
        let selected = match self.list_state.selected() {
            _ if self.tasks.is_empty() => None,
            Some(index) => Some(index.min(self.tasks.len() - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.tasks.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Action {
        let Some(project_id) = self.project_id else {
            return Action::None;
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('a') => {
                self.mode = Mode::Add {
                    form: Form::new(vec![
                        TextField::new("Title"),
                        TextField::new("Description"),
                        TextField::new("Due date (YYYY-MM-DD)"),
                    ]),
                    error: None,
                };
                Action::None
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.mode = Mode::Rename {
                        task_id: task.id,
                        field: TextField::new("Title").with_value(task.title.clone()),
                    };
                }
                Action::None
            }
            KeyCode::Char(' ') => match self.selected_task() {
                Some(task) => Action::ToggleTask { id: task.id, project_id },
                None => Action::None,
            },
            KeyCode::Char('d') => match self.selected_task() {
                Some(task) => Action::DeleteTask { id: task.id, project_id },
                None => Action::None,
            },
            KeyCode::Char('r') => Action::LoadTasks(project_id),
            KeyCode::Esc | KeyCode::Backspace => Action::Navigate(Route::Projects),
            _ => Action::None,
        }
    }

    fn handle_add_key(&mut self, key: KeyEvent) -> Action {
        let (Some(project_id), Mode::Add { form, error }) = (self.project_id, &mut self.mode) else {
            return Action::None;
        };

        match form.handle_key(key) {
            FormEvent::Cancel => {
                self.mode = Mode::Browse;
                Action::None
            }
            FormEvent::Submit => {
                if form.is_blank(TITLE) {
                    *error = Some(ERROR_TITLE_REQUIRED.to_string());
                    return Action::None;
                }
                let due_date = match parse_due_date(form.value(DUE_DATE)) {
                    Ok(due_date) => due_date,
                    Err(message) => {
                        *error = Some(message);
                        return Action::None;
                    }
                };

                let request = TaskRequest {
                    title: form.value(TITLE).to_string(),
                    description: form.value(DESCRIPTION).to_string(),
                    due_date,
                    project_id,
                };
                self.mode = Mode::Browse;
                Action::CreateTask(request)
            }
            FormEvent::Edited | FormEvent::Ignored => Action::None,
        }
    }

    fn handle_rename_key(&mut self, key: KeyEvent) -> Action {
        let (Some(project_id), Mode::Rename { task_id, field }) = (self.project_id, &mut self.mode) else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                Action::None
            }
            // Blank titles are ignored; the field stays open.
            KeyCode::Enter if field.is_blank() => Action::None,
            KeyCode::Enter => {
                let task_id = *task_id;
                let title = field.trimmed().to_string();
                self.mode = Mode::Browse;
                match self.tasks.iter().find(|t| t.id == task_id) {
                    Some(task) if task.title != title => Action::UpdateTask {
                        id: task_id,
                        request: TaskRequest::retitled(task, project_id, title),
                    },
                    _ => Action::None,
                }
            }
            KeyCode::Backspace => {
                field.value.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                field.value.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn create_task_item(task: &Task) -> ListItem<'static> {
        let (icon, title_style) = if task.is_completed {
            (
                "✅",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("🔳", Style::default().fg(Color::White))
        };

        let mut spans = vec![Span::raw(format!("{} ", icon)), Span::styled(task.title.clone(), title_style)];
        if let Some(due) = task.due_date {
            spans.push(Span::styled(
                format!("  📅 {}", due.format(DUE_DATE_FORMAT)),
                Style::default().fg(Color::Yellow),
            ));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(Color::Gray),
            )));
        }
        ListItem::new(lines)
    }

    fn header_title(&self) -> String {
        match (&self.project, self.project_id) {
            (Some(project), _) => format!(" {} ({} tasks) ", project.title, self.tasks.len()),
            (None, Some(id)) => format!(" Project #{} ({} tasks) ", id, self.tasks.len()),
            (None, None) => " Tasks ".to_string(),
        }
    }

    fn render_add_form(f: &mut Frame, rect: Rect, form: &Form, error: Option<&str>) {
        let area = LayoutManager::centered_rect_lines(60, form.height() + 5, rect);
        f.render_widget(Clear, area);
        let block = create_dialog_block(" New task ", Color::Green);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [fields, error_area, hints] = Layout::vertical([
            Constraint::Length(form.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        form.render(f, fields);
        f.render_widget(create_error_paragraph(error), error_area);
        f.render_widget(
            create_instructions_paragraph(&[ENTER_SUBMIT, SEPARATOR, TAB_NEXT, SEPARATOR, ESC_CANCEL]),
            hints,
        );
    }
}

impl Component for TaskListView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Add { .. } => self.handle_add_key(key),
            Mode::Rename { .. } => self.handle_rename_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoadTasks(project_id) => {
                self.set_project(project_id);
                self.loading = true;
                action
            }
            Action::ProjectLoaded(project) => {
                if self.project_id == Some(project.id) {
                    self.project = Some(project);
                }
                Action::None
            }
            Action::TasksLoaded { project_id, tasks } => {
                if self.project_id == Some(project_id) {
                    log::debug!("Task list: {} tasks loaded for project {}", tasks.len(), project_id);
                    self.tasks = tasks;
                    self.loading = false;
                    self.error = None;
                    self.clamp_selection();
                }
                Action::None
            }
            Action::TasksFailed { project_id, message } => {
                if self.project_id == Some(project_id) {
                    self.loading = false;
                    self.error = Some(message);
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rename_height = if matches!(self.mode, Mode::Rename { .. }) { 3 } else { 0 };
        let [list_area, rename_area, hints_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(rename_height),
            Constraint::Length(1),
        ])
        .areas(rect);

        let block = Block::default().borders(Borders::ALL).title(self.header_title());

        if self.loading && self.tasks.is_empty() {
            f.render_widget(Paragraph::new(LOADING).block(block), list_area);
        } else if let Some(error) = self.error.as_deref().filter(|_| self.tasks.is_empty()) {
            f.render_widget(
                Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)).block(block),
                list_area,
            );
        } else if self.tasks.is_empty() {
            f.render_widget(
                Paragraph::new("No tasks in this project. Press 'a' to create a task.").block(block),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = self.tasks.iter().map(Self::create_task_item).collect();
            let total = items.len();
            let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(list_area, total);
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
            f.render_stateful_widget(list, content_area, &mut self.list_state);
            self.scrollbar.update_state(total, self.list_state.selected().unwrap_or(0));
            self.scrollbar.render(f, scrollbar_area);
        }

        if let Mode::Rename { field, .. } = &self.mode {
            f.render_widget(create_input_paragraph(&field.value, "Rename task", true, false), rename_area);
        }

        f.render_widget(
            create_instructions_paragraph(&[
                ("a", Color::Green, " Add"),
                SEPARATOR,
                ("Space", Color::Green, " Toggle"),
                SEPARATOR,
                ("e", Color::Cyan, " Rename"),
                SEPARATOR,
                ("d", Color::Red, " Delete"),
                SEPARATOR,
                ("r", Color::Cyan, " Reload"),
                SEPARATOR,
                ESC_BACK,
            ]),
            hints_area,
        );

        if let Mode::Add { form, error } = &self.mode {
            Self::render_add_form(f, rect, form, error.as_deref());
        }
    }

    fn captures_input(&self) -> bool {
        self.is_editing()
    }

    fn on_blur(&mut self) {
        self.mode = Mode::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn task(id: i64, title: &str, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: Some("notes".to_string()),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            is_completed: done,
            project_id: Some(3),
        }
    }

    fn press(view: &mut TaskListView, code: KeyCode) -> Action {
        view.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut TaskListView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    fn loaded_view() -> TaskListView {
        let mut view = TaskListView::new();
        view.update(Action::LoadTasks(3));
        view.update(Action::TasksLoaded {
            project_id: 3,
            tasks: vec![task(10, "Write docs", false), task(11, "Ship", true)],
        });
        view
    }

    #[test]
    fn due_date_parsing() {
        assert_eq!(parse_due_date("  "), Ok(None));
        assert_eq!(parse_due_date("2024-02-29"), Ok(NaiveDate::from_ymd_opt(2024, 2, 29)));
        assert_eq!(parse_due_date("29/02/2024"), Err(ERROR_INVALID_DUE_DATE.to_string()));
    }

    #[test]
    fn tasks_for_another_project_are_ignored() {
        let mut view = loaded_view();
        view.update(Action::TasksLoaded {
            project_id: 4,
            tasks: vec![],
        });
        assert_eq!(view.tasks.len(), 2);
    }

    #[test]
    fn toggle_and_delete_target_selection() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Down);
        assert_eq!(press(&mut view, KeyCode::Char(' ')), Action::ToggleTask { id: 11, project_id: 3 });
        assert_eq!(press(&mut view, KeyCode::Char('d')), Action::DeleteTask { id: 11, project_id: 3 });
    }

    #[test]
    fn add_form_validates_due_date() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Char('a'));
        type_text(&mut view, "Review");
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Tab);
        type_text(&mut view, "tomorrow");
        assert_eq!(press(&mut view, KeyCode::Enter), Action::None);
        assert!(view.is_editing());

        for _ in 0.."tomorrow".len() {
            press(&mut view, KeyCode::Backspace);
        }
        type_text(&mut view, "2024-06-01");
        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Action::CreateTask(TaskRequest {
                title: "Review".to_string(),
                description: String::new(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                project_id: 3,
            })
        );
    }

    #[test]
    fn rename_keeps_other_fields() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Char('e'));
        type_text(&mut view, " v2");

        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Action::UpdateTask {
                id: 10,
                request: TaskRequest {
                    title: "Write docs v2".to_string(),
                    description: "notes".to_string(),
                    due_date: NaiveDate::from_ymd_opt(2024, 5, 1),
                    project_id: 3,
                },
            }
        );
    }

    #[test]
    fn blank_rename_is_ignored() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Char('e'));
        for _ in 0.."Write docs".len() {
            press(&mut view, KeyCode::Backspace);
        }
        assert_eq!(press(&mut view, KeyCode::Enter), Action::None);
        assert!(view.is_editing());
    }
}
