use crate::entities::{Project, ProjectRequest, Session, Task, TaskRequest};
use crate::ui::routes::Route;

/// What to reload from the server once a mutation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reload {
    Projects,
    Tasks(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Route),

    // Authentication
    SubmitLogin {
        email: String,
        password: String,
    },
    SubmitRegistration {
        name: String,
        email: String,
        password: String,
    },
    LoggedIn(Session),
    LoginFailed(String),
    /// Account created, but signing in with it did not work.
    Registered,
    RegistrationFailed(String),
    Logout,

    // Project operations
    LoadProjects,
    ProjectsLoaded(Vec<Project>),
    ProjectsFailed(String),
    CreateProject(ProjectRequest),
    UpdateProject {
        id: i64,
        request: ProjectRequest,
    },
    DeleteProject(i64),

    // Task operations
    LoadTasks(i64),
    ProjectLoaded(Project),
    TasksLoaded {
        project_id: i64,
        tasks: Vec<Task>,
    },
    TasksFailed {
        project_id: i64,
        message: String,
    },
    CreateTask(TaskRequest),
    UpdateTask {
        id: i64,
        request: TaskRequest,
    },
    ToggleTask {
        id: i64,
        project_id: i64,
    },
    DeleteTask {
        id: i64,
        project_id: i64,
    },

    // Results of background operations
    OperationCompleted {
        message: String,
        reload: Reload,
    },
    OperationFailed(String),

    // UI operations
    ShowLogs(bool),
    SetStatus(String),

    // App control
    Quit,
    None,
}
