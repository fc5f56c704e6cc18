//! Navigation surface of the client.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    Projects,
    ProjectTasks(i64),
}

impl Route {
    /// Parses a path. Anything unrecognised routes to [`Route::Home`].
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["projects"] => Self::Projects,
            ["projects", id, "tasks"] => id.parse().map(Self::ProjectTasks).unwrap_or(Self::Home),
            _ => Self::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Projects => "/projects".to_string(),
            Self::ProjectTasks(id) => format!("/projects/{}/tasks", id),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Projects | Self::ProjectTasks(_))
    }

    /// Where to actually go, given whether a session exists.
    pub fn resolve(self, authenticated: bool) -> Self {
        if self.requires_session() && !authenticated {
            Self::Login
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
