use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Percentage of completed tasks, computed by the server.
    #[serde(default)]
    pub progress: Option<f64>,
}

impl Project {
    /// Case-insensitive match of `query` against title and description.
    /// An empty (or blank) query matches every project.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or(false)
    }
}

/// Body of `POST /api/projects` and `PUT /api/projects/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
}
