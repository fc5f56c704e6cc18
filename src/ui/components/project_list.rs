use super::common::{
    create_dialog_block, create_error_paragraph, create_input_paragraph, create_instructions_paragraph,
    shortcuts::{ENTER_SUBMIT, ESC_CANCEL, SEPARATOR, TAB_NEXT},
};
use super::form::{Form, FormEvent, TextField};
use super::scrollbar_helper::ScrollbarHelper;
use crate::constants::{ERROR_DESCRIPTION_REQUIRED, ERROR_TITLE_REQUIRED, LOADING};
use crate::entities::{Project, ProjectRequest};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
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

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Browse,
    Search,
    /// Create when `editing` is `None`, otherwise edit that project.
    Editor { editing: Option<i64>, form: Form, error: Option<String> },
}

/// The `/projects` screen.
#[derive(Debug)]
pub struct ProjectListView {
    pub projects: Vec<Project>,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    list_state: ListState,
    scrollbar: ScrollbarHelper,
    mode: Mode,
}

impl Default for ProjectListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListView {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            query: String::new(),
            loading: false,
            error: None,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            mode: Mode::Browse,
        }
    }

    /// Projects matching the current search query, in server order.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.matches(&self.query)).collect()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let index = self.list_state.selected()?;
        self.visible_projects().into_iter().nth(index)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editor { .. })
    }

    pub fn clear(&mut self) {
        self.projects.clear();
        self.query.clear();
        self.loading = false;
        self.error = None;
        self.mode = Mode::Browse;
        self.list_state.select(None);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_projects().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.visible_projects().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
    }

    fn open_editor(&mut self, project: Option<&Project>) {
        let (editing, title, description) = match project {
            Some(p) => (Some(p.id), p.title.clone(), p.description.clone().unwrap_or_default()),
            None => (None, String::new(), String::new()),
        };
        self.mode = Mode::Editor {
            editing,
            form: Form::new(vec![
                TextField::new("Title").with_value(title),
                TextField::new("Description").with_value(description),
            ]),
            error: None,
        };
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Char('/') => {
                self.mode = Mode::Search;
                Action::None
            }
            KeyCode::Char('n') => {
                self.open_editor(None);
                Action::None
            }
            KeyCode::Char('e') => {
                if let Some(project) = self.selected_project().cloned() {
                    self.open_editor(Some(&project));
                }
                Action::None
            }
            KeyCode::Char('d') => match self.selected_project() {
                Some(project) => Action::DeleteProject(project.id),
                None => Action::None,
            },
            KeyCode::Enter => match self.selected_project() {
                Some(project) => Action::Navigate(Route::ProjectTasks(project.id)),
                None => Action::None,
            },
            KeyCode::Char('r') => Action::LoadProjects,
            KeyCode::Esc if !self.query.is_empty() => {
                self.query.clear();
                self.clamp_selection();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                self.query.clear();
                self.mode = Mode::Browse;
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => return Action::None,
        }
        self.list_state.select(None);
        self.clamp_selection();
        Action::None
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Action {
        let Mode::Editor { editing, form, error } = &mut self.mode else {
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
                if form.is_blank(DESCRIPTION) {
                    *error = Some(ERROR_DESCRIPTION_REQUIRED.to_string());
                    return Action::None;
                }

                let request = ProjectRequest {
                    title: form.value(TITLE).to_string(),
                    description: form.value(DESCRIPTION).to_string(),
                };
                let action = match editing {
                    Some(id) => Action::UpdateProject { id: *id, request },
                    None => Action::CreateProject(request),
                };
                self.mode = Mode::Browse;
                action
            }
            FormEvent::Edited | FormEvent::Ignored => Action::None,
        }
    }

    fn create_project_item(project: &Project) -> ListItem<'static> {
        let mut spans = vec![Span::styled(
            project.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(progress) = project.progress {
            spans.push(Span::styled(format!("  {:.0}%", progress), Style::default().fg(Color::Green)));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
            lines.push(Line::from(Span::styled(
                format!("  {}", description),
                Style::default().fg(Color::Gray),
            )));
        }
        ListItem::new(lines)
    }

    fn render_editor(f: &mut Frame, rect: Rect, editing: Option<i64>, form: &Form, error: Option<&str>) {
        let area = LayoutManager::centered_rect_lines(60, form.height() + 5, rect);
        f.render_widget(Clear, area);
        let title = if editing.is_some() { " Edit project " } else { " New project " };
        let block = create_dialog_block(title, Color::Green);
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

impl Component for ProjectListView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Editor { .. } => self.handle_editor_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::LoadProjects => {
                self.loading = true;
                action
            }
            Action::ProjectsLoaded(projects) => {
                log::debug!("Project list: {} projects loaded", projects.len());
                self.projects = projects;
                self.loading = false;
                self.error = None;
                self.clamp_selection();
                Action::None
            }
            Action::ProjectsFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let search_height = if self.mode == Mode::Search || !self.query.is_empty() { 3 } else { 0 };
        let [search_area, list_area, hints_area] = Layout::vertical([
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(rect);

        if search_height > 0 {
            f.render_widget(
                create_input_paragraph(&self.query, "Search", self.mode == Mode::Search, false),
                search_area,
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Projects ({}) ", self.projects.len()));
        let visible = self.visible_projects();

        if self.loading && self.projects.is_empty() {
            f.render_widget(Paragraph::new(LOADING).block(block), list_area);
        } else if let Some(error) = self.error.as_deref().filter(|_| visible.is_empty()) {
            f.render_widget(
                Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)).block(block),
                list_area,
            );
        } else if visible.is_empty() {
            let message = if self.query.is_empty() {
                "No projects yet. Press 'n' to create one."
            } else {
                "No project matches the search."
            };
            f.render_widget(Paragraph::new(message).block(block), list_area);
        } else {
            let items: Vec<ListItem> = visible.iter().map(|p| Self::create_project_item(p)).collect();
            let total = items.len();
            let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(list_area, total);
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
            f.render_stateful_widget(list, content_area, &mut self.list_state);
            self.scrollbar.update_state(total, self.list_state.selected().unwrap_or(0));
            self.scrollbar.render(f, scrollbar_area);
        }

        f.render_widget(
            create_instructions_paragraph(&[
                ("Enter", Color::Green, " Open"),
                SEPARATOR,
                ("n", Color::Green, " New"),
                SEPARATOR,
                ("e", Color::Cyan, " Edit"),
                SEPARATOR,
                ("d", Color::Red, " Delete"),
                SEPARATOR,
                ("/", Color::Cyan, " Search"),
                SEPARATOR,
                ("r", Color::Cyan, " Reload"),
            ]),
            hints_area,
        );

        if let Mode::Editor { editing, form, error } = &self.mode {
            Self::render_editor(f, rect, *editing, form, error.as_deref());
        }
    }

    fn captures_input(&self) -> bool {
        !matches!(self.mode, Mode::Browse)
    }

    fn on_blur(&mut self) {
        self.mode = Mode::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn project(id: i64, title: &str, description: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: Some(description.to_string()),
            created_at: None,
            updated_at: None,
            progress: None,
        }
    }

    fn press(view: &mut ProjectListView, code: KeyCode) -> Action {
        view.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn loaded_view() -> ProjectListView {
        let mut view = ProjectListView::new();
        view.update(Action::ProjectsLoaded(vec![
            project(1, "Website", "Marketing site"),
            project(2, "Backend", "API work"),
        ]));
        view
    }

    #[test]
    fn search_filters_and_selects_first_match() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Char('/'));
        for c in "api".chars() {
            press(&mut view, KeyCode::Char(c));
        }
        press(&mut view, KeyCode::Enter);

        assert_eq!(view.visible_projects().len(), 1);
        assert_eq!(press(&mut view, KeyCode::Enter), Action::Navigate(Route::ProjectTasks(2)));
    }

    #[test]
    fn create_requires_title_and_description() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Char('n'));
        for c in "Docs".chars() {
            press(&mut view, KeyCode::Char(c));
        }
        assert_eq!(press(&mut view, KeyCode::Enter), Action::None);
        assert!(view.is_editing());

        press(&mut view, KeyCode::Tab);
        for c in "Guides".chars() {
            press(&mut view, KeyCode::Char(c));
        }
        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Action::CreateProject(ProjectRequest {
                title: "Docs".to_string(),
                description: "Guides".to_string(),
            })
        );
        assert!(!view.is_editing());
    }

    #[test]
    fn edit_prefills_selected_project() {
        let mut view = loaded_view();
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Char('e'));
        press(&mut view, KeyCode::Char('!'));

        assert_eq!(
            press(&mut view, KeyCode::Enter),
            Action::UpdateProject {
                id: 2,
                request: ProjectRequest {
                    title: "Backend!".to_string(),
                    description: "API work".to_string(),
                },
            }
        );
    }

    #[test]
    fn delete_emits_request_for_selection() {
        let mut view = loaded_view();
        assert_eq!(press(&mut view, KeyCode::Char('d')), Action::DeleteProject(1));
    }
}
