use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_completed: bool,
    /// The service does not echo the owning project back, so this is only
    /// populated when the client fills it in.
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Body of `POST /api/tasks` and `PUT /api/tasks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub project_id: i64,
}

impl TaskRequest {
    /// Request carrying `task` unchanged except for its title.
    pub fn retitled(task: &Task, project_id: i64, title: String) -> Self {
        Self {
            title,
            description: task.description.clone().unwrap_or_default(),
            due_date: task.due_date,
            project_id,
        }
    }
}
