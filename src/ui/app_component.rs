use crate::api::ApiError;
use crate::constants::*;
use crate::dialog::{DialogHost, DialogRequest};
use crate::entities::{MessageResponse, Session};
use crate::ui::components::{
    HomeView, LoginView, LogsPanel, Navbar, PopupComponent, ProjectListView, RegisterView, StatusBar, TaskListView,
};
use crate::ui::core::{
    actions::{Action, Reload},
    event_handler::EventType,
    task_manager::{Generation, TaskManager},
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::future::Future;
use tokio::sync::mpsc;

/// `"<prefix>: <server message>"`, the text shown for a failed operation.
fn failure_message(prefix: &str, error: &ApiError) -> String {
    format!("{}: {}", prefix, error.user_message())
}

/// The server's own message when it sent one, otherwise `fallback`.
fn server_message_or(fallback: &str, error: &ApiError) -> String {
    let message = error.user_message();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

fn mutation_outcome(
    result: Result<MessageResponse, ApiError>,
    success: &str,
    failure: &str,
    reload: Reload,
) -> Action {
    match result {
        Ok(_) => Action::OperationCompleted {
            message: success.to_string(),
            reload,
        },
        Err(e) => Action::OperationFailed(failure_message(failure, &e)),
    }
}

/// Root component: owns the screens, routes keys and actions between them
/// and runs every service call as a background operation.
pub struct AppComponent {
    // Screens
    home: HomeView,
    login: LoginView,
    register: RegisterView,
    projects: ProjectListView,
    tasks: TaskListView,

    // Overlays
    popup: PopupComponent,
    logs: LogsPanel,
    show_logs: bool,

    // Services
    ctx: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<(Generation, Action)>,

    // Simple UI state
    route: Route,
    current_user: Option<Session>,
    status_message: Option<String>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: AppContext, dialog_host: DialogHost) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            home: HomeView::new(),
            login: LoginView::new(),
            register: RegisterView::new(),
            projects: ProjectListView::new(),
            tasks: TaskListView::new(),
            popup: PopupComponent::new(dialog_host),
            logs: LogsPanel::new(ctx.logger.clone()),
            show_logs: false,
            ctx,
            task_manager,
            background_action_rx,
            route: Route::Home,
            current_user: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Restores the persisted session and opens `initial`.
    pub fn start(&mut self, initial: Route) {
        self.current_user = self.ctx.session.init();
        self.dispatch(Action::Navigate(initial));
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.current_user.as_ref()
    }

    pub fn login_view(&self) -> &LoginView {
        &self.login
    }

    pub fn projects(&self) -> &ProjectListView {
        &self.projects
    }

    pub fn tasks(&self) -> &TaskListView {
        &self.tasks
    }

    pub fn popup(&self) -> &PopupComponent {
        &self.popup
    }

    pub fn is_logs_visible(&self) -> bool {
        self.show_logs
    }

    /// Get the number of active background operations
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn is_busy(&self) -> bool {
        self.projects.loading || self.tasks.loading || self.login.submitting || self.register.submitting
    }

    /// Feeds `action` through the screens and then the app-level handler
    /// until nothing is left to do.
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while action != Action::None {
            let remaining = self.update(action);
            action = self.handle_app_action(remaining);
        }
    }

    /// Handles one terminal event. Returns true when the screen needs a redraw.
    pub fn handle_event(&mut self, event: EventType) -> bool {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key_events(key);
                self.dispatch(action);
                true
            }
            EventType::Mouse(mouse) => {
                let code = match mouse.kind {
                    MouseEventKind::ScrollUp => KeyCode::Up,
                    MouseEventKind::ScrollDown => KeyCode::Down,
                    _ => return false,
                };
                if self.popup.is_visible() || self.show_logs || self.active_view().captures_input() {
                    return false;
                }
                let action = self.active_view_mut().handle_key_events(KeyEvent::new(code, KeyModifiers::NONE));
                self.dispatch(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.on_tick(),
            EventType::Other => false,
        }
    }

    /// Presents queued dialogs and applies finished background operations.
    pub fn on_tick(&mut self) -> bool {
        let mut needs_render = self.popup.poll();

        for action in self.process_background_actions() {
            self.dispatch(action);
            needs_render = true;
        }
        needs_render
    }

    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok((generation, action)) = self.background_action_rx.try_recv() {
            if self.task_manager.is_current(generation) {
                actions.push(action);
            } else {
                log::debug!("Background: dropping result from a previous session");
            }
        }

        for task in self.task_manager.cleanup_finished_tasks() {
            log::debug!(
                "Background: operation #{} finished in {:?}: {}",
                task.id,
                task.elapsed,
                task.description
            );
        }
        actions
    }

    fn active_view(&self) -> &dyn Component {
        match self.route {
            Route::Home => &self.home,
            Route::Login => &self.login,
            Route::Register => &self.register,
            Route::Projects => &self.projects,
            Route::ProjectTasks(_) => &self.tasks,
        }
    }

    fn active_view_mut(&mut self) -> &mut dyn Component {
        match self.route {
            Route::Home => &mut self.home,
            Route::Login => &mut self.login,
            Route::Register => &mut self.register,
            Route::Projects => &mut self.projects,
            Route::ProjectTasks(_) => &mut self.tasks,
        }
    }

    fn navigate(&mut self, target: Route) -> Action {
        let authenticated = self.ctx.session.is_authenticated();
        let resolved = target.resolve(authenticated);
        if resolved != target {
            log::info!("Navigation: {} requires a session, redirecting to {}", target, resolved);
        } else {
            log::debug!("Navigation: {} -> {}", self.route, resolved);
        }

        if resolved != self.route {
            self.status_message = None;
        }
        self.active_view_mut().on_blur();
        self.route = resolved;
        self.home.set_authenticated(authenticated);
        self.active_view_mut().on_focus();

        match resolved {
            Route::Projects => Action::LoadProjects,
            Route::ProjectTasks(id) => Action::LoadTasks(id),
            _ => Action::None,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('L') if self.current_user.is_some() => {
                log::debug!("Global key: 'L' - signing out");
                Action::Logout
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require services
    fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(route) => self.navigate(route),

            Action::SubmitLogin { email, password } => {
                self.spawn_login(email, password);
                Action::None
            }
            Action::SubmitRegistration { name, email, password } => {
                self.spawn_registration(name, email, password);
                Action::None
            }
            Action::Registered => {
                self.spawn_notice(DialogRequest::success(DIALOG_TITLE_REGISTERED, SUCCESS_REGISTERED));
                Action::Navigate(Route::Login)
            }
            Action::LoggedIn(session) => {
                log::info!("Signed in as {}", session.display_name());
                let message = format!("Signed in as {}", session.display_name());
                self.current_user = Some(session);
                let next = self.navigate(Route::Projects);
                self.status_message = Some(message);
                next
            }
            Action::Logout => match self.ctx.session.logout() {
                Ok(()) => {
                    log::info!("Signed out");
                    // Nothing started for the previous user may land afterwards.
                    self.task_manager.reset();
                    self.current_user = None;
                    self.projects.clear();
                    self.tasks = TaskListView::new();
                    let next = self.navigate(Route::Login);
                    self.status_message = Some(SUCCESS_SIGNED_OUT.to_string());
                    next
                }
                Err(e) => Action::OperationFailed(format!("{}: {}", ERROR_SIGN_OUT_FAILED, e)),
            },

            Action::LoadProjects => {
                let api = self.ctx.api.clone();
                self.task_manager.spawn_operation("Load projects", async move {
                    match api.projects.list().await {
                        Ok(projects) => Action::ProjectsLoaded(projects),
                        Err(e) => Action::ProjectsFailed(failure_message(ERROR_LOAD_PROJECTS_FAILED, &e)),
                    }
                });
                Action::None
            }
            Action::CreateProject(request) => {
                let api = self.ctx.api.clone();
                self.spawn_mutation(
                    format!("Create project '{}'", request.title),
                    async move { api.projects.create(&request).await },
                    SUCCESS_PROJECT_CREATED,
                    ERROR_PROJECT_CREATE_FAILED,
                    Reload::Projects,
                );
                Action::None
            }
            Action::UpdateProject { id, request } => {
                let api = self.ctx.api.clone();
                self.spawn_mutation(
                    format!("Update project {}", id),
                    async move { api.projects.update(id, &request).await },
                    SUCCESS_PROJECT_UPDATED,
                    ERROR_PROJECT_UPDATE_FAILED,
                    Reload::Projects,
                );
                Action::None
            }
            Action::DeleteProject(id) => {
                let api = self.ctx.api.clone();
                self.spawn_confirmed_mutation(
                    format!("Delete project {}", id),
                    (CONFIRM_DELETE_PROJECT_TITLE, CONFIRM_DELETE_PROJECT_MESSAGE),
                    async move { api.projects.delete(id).await },
                    SUCCESS_PROJECT_DELETED,
                    ERROR_PROJECT_DELETE_FAILED,
                    Reload::Projects,
                );
                Action::None
            }

            Action::LoadTasks(project_id) => {
                let api = self.ctx.api.clone();
                self.task_manager
                    .spawn_operation(format!("Load project {}", project_id), async move {
                        match api.projects.get(project_id).await {
                            Ok(project) => Action::ProjectLoaded(project),
                            Err(e) => {
                                // The header falls back to the project id.
                                log::warn!("Could not load project {}: {}", project_id, e);
                                Action::None
                            }
                        }
                    });

                let api = self.ctx.api.clone();
                self.task_manager
                    .spawn_operation(format!("Load tasks of project {}", project_id), async move {
                        match api.tasks.list_by_project(project_id).await {
                            Ok(tasks) => Action::TasksLoaded { project_id, tasks },
                            Err(e) => Action::TasksFailed {
                                project_id,
                                message: failure_message(ERROR_LOAD_TASKS_FAILED, &e),
                            },
                        }
                    });
                Action::None
            }
            Action::CreateTask(request) => {
                let api = self.ctx.api.clone();
                let reload = Reload::Tasks(request.project_id);
                self.spawn_mutation(
                    format!("Create task '{}'", request.title),
                    async move { api.tasks.create(&request).await },
                    SUCCESS_TASK_CREATED,
                    ERROR_TASK_CREATE_FAILED,
                    reload,
                );
                Action::None
            }
            Action::UpdateTask { id, request } => {
                let api = self.ctx.api.clone();
                let reload = Reload::Tasks(request.project_id);
                self.spawn_mutation(
                    format!("Update task {}", id),
                    async move { api.tasks.update(id, &request).await },
                    SUCCESS_TASK_UPDATED,
                    ERROR_TASK_UPDATE_FAILED,
                    reload,
                );
                Action::None
            }
            Action::ToggleTask { id, project_id } => {
                let api = self.ctx.api.clone();
                self.spawn_mutation(
                    format!("Toggle task {}", id),
                    async move { api.tasks.toggle_completion(id).await },
                    SUCCESS_TASK_TOGGLED,
                    ERROR_TASK_TOGGLE_FAILED,
                    Reload::Tasks(project_id),
                );
                Action::None
            }
            Action::DeleteTask { id, project_id } => {
                let api = self.ctx.api.clone();
                self.spawn_confirmed_mutation(
                    format!("Delete task {}", id),
                    (CONFIRM_DELETE_TASK_TITLE, CONFIRM_DELETE_TASK_MESSAGE),
                    async move { api.tasks.delete(id).await },
                    SUCCESS_TASK_DELETED,
                    ERROR_TASK_DELETE_FAILED,
                    Reload::Tasks(project_id),
                );
                Action::None
            }

            Action::OperationCompleted { message, reload } => {
                log::info!("{}", message);
                self.status_message = Some(message);
                match (reload, self.route) {
                    (Reload::Projects, Route::Projects) => Action::LoadProjects,
                    (Reload::Tasks(id), Route::ProjectTasks(current)) if id == current => Action::LoadTasks(id),
                    _ => Action::None,
                }
            }
            Action::OperationFailed(message) => {
                log::error!("{}", message);
                self.status_message = Some(message.clone());
                self.spawn_notice(DialogRequest::error(DIALOG_TITLE_ERROR, message));
                Action::None
            }

            Action::ShowLogs(show) => {
                self.show_logs = show;
                if show {
                    self.logs.on_focus();
                }
                Action::None
            }
            Action::SetStatus(message) => {
                self.status_message = Some(message);
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Shows a single-button dialog without blocking the caller.
    fn spawn_notice(&mut self, request: DialogRequest) {
        let dialogs = self.ctx.dialogs.clone();
        self.task_manager
            .spawn_operation(format!("Show dialog '{}'", request.title), async move {
                if let Err(e) = dialogs.request(request).await {
                    log::warn!("Dialog not shown: {}", e);
                }
                Action::None
            });
    }

    fn spawn_login(&mut self, email: String, password: String) {
        let api = self.ctx.api.clone();
        let session_ctx = self.ctx.session.clone();

        self.task_manager.spawn_operation(format!("Sign in {}", email), async move {
            match api.auth.login(&email, &password).await {
                Ok(session) => match session_ctx.login(&session) {
                    Ok(()) => Action::LoggedIn(session),
                    Err(e) => Action::LoginFailed(format!("{}: {}", ERROR_SAVE_SESSION_FAILED, e)),
                },
                Err(e) => {
                    log::warn!("Sign in failed for {}: {}", email, e);
                    Action::LoginFailed(server_message_or(ERROR_LOGIN_FAILED, &e))
                }
            }
        });
    }

    /// Signup, then sign in with the same credentials. When the automatic
    /// sign-in fails the user lands on the login screen instead.
    fn spawn_registration(&mut self, name: String, email: String, password: String) {
        let api = self.ctx.api.clone();
        let session_ctx = self.ctx.session.clone();

        self.task_manager.spawn_operation(format!("Register {}", email), async move {
            if let Err(e) = api.auth.register(&name, &email, &password).await {
                log::warn!("Registration failed for {}: {}", email, e);
                return Action::RegistrationFailed(server_message_or(ERROR_REGISTRATION_FAILED, &e));
            }
            log::info!("Registered {}", email);

            let session = match api.auth.login(&email, &password).await {
                Ok(session) => session.with_name(name),
                Err(e) => {
                    log::warn!("Sign in after registration failed for {}: {}", email, e);
                    return Action::Registered;
                }
            };

            match session_ctx.login(&session) {
                Ok(()) => Action::LoggedIn(session),
                Err(e) => Action::RegistrationFailed(format!("{}: {}", ERROR_SAVE_SESSION_FAILED, e)),
            }
        });
    }

    fn spawn_mutation<Fut>(&mut self, description: String, call: Fut, success: &'static str, failure: &'static str, reload: Reload)
    where
        Fut: Future<Output = Result<MessageResponse, ApiError>> + Send + 'static,
    {
        self.task_manager.spawn_operation(description, async move {
            mutation_outcome(call.await, success, failure, reload)
        });
    }

    /// Like [`Self::spawn_mutation`], but only runs `call` once the user
    /// confirmed the `(title, message)` dialog.
    fn spawn_confirmed_mutation<Fut>(
        &mut self,
        description: String,
        prompt: (&'static str, &'static str),
        call: Fut,
        success: &'static str,
        failure: &'static str,
        reload: Reload,
    ) where
        Fut: Future<Output = Result<MessageResponse, ApiError>> + Send + 'static,
    {
        let dialogs = self.ctx.dialogs.clone();
        self.task_manager.spawn_operation(description.clone(), async move {
            match dialogs.confirm(prompt.0, prompt.1).await {
                Ok(answer) if answer.confirmed => mutation_outcome(call.await, success, failure, reload),
                Ok(_) => {
                    log::info!("{}: cancelled", description);
                    Action::SetStatus(STATUS_DELETE_CANCELLED.to_string())
                }
                Err(e) => {
                    log::warn!("{}: {}", description, e);
                    Action::None
                }
            }
        });
    }

    fn hints(&self) -> &'static str {
        match self.route {
            Route::Home => "q: quit • G: logs",
            Route::Login | Route::Register => "Tab: next field • Enter: submit • Esc: back • Ctrl+C: quit",
            Route::Projects => "Enter: open • n: new • /: search • G: logs • L: logout • q: quit",
            Route::ProjectTasks(_) => "a: add • Space: toggle • Esc: projects • G: logs • L: logout • q: quit",
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        // The popup is modal: nothing underneath sees keys while it shows.
        if self.popup.is_visible() {
            return self.popup.handle_key_events(key);
        }
        if self.show_logs {
            return self.logs.handle_key_events(key);
        }

        let capturing = self.active_view().captures_input();
        let action = self.active_view_mut().handle_key_events(key);
        if action != Action::None || capturing || self.active_view().captures_input() {
            return action;
        }
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.login.update(action);
        let action = self.register.update(action);
        let action = self.projects.update(action);
        self.tasks.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        self.active_view_mut().render(f, layout.content);
        Navbar::render(f, layout.navbar, self.route, self.current_user.as_ref());
        StatusBar::render(
            f,
            layout.status,
            self.status_message.as_deref(),
            self.hints(),
            self.is_busy(),
        );

        if self.show_logs {
            self.logs.render(f, rect);
        }
        if self.popup.is_visible() {
            self.popup.render(f, rect);
        }
    }
}
