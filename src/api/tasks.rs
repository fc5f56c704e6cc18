use super::{ApiClient, ApiError};
use crate::entities::{MessageResponse, Task, TaskRequest};

const TASKS: &str = "/api/tasks";

#[derive(Debug, Clone)]
pub struct TasksApi {
    client: ApiClient,
}

impl TasksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Tasks of one project. The service omits the owning project from each
    /// task, so it is filled in from `project_id`.
    pub async fn list_by_project(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        let path = format!("{}/project/{}", TASKS, project_id);
        let tasks: Option<Vec<Task>> = self.client.send_json(self.client.get(&path)).await?;

        Ok(tasks
            .unwrap_or_default()
            .into_iter()
            .map(|mut task| {
                task.project_id.get_or_insert(project_id);
                task
            })
            .collect())
    }

    pub async fn create(&self, task: &TaskRequest) -> Result<MessageResponse, ApiError> {
        self.client.send_message(self.client.post(TASKS).json(task)).await
    }

    pub async fn update(&self, id: i64, task: &TaskRequest) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/{}", TASKS, id);
        self.client.send_message(self.client.put(&path).json(task)).await
    }

    /// Flips the completion flag server-side.
    pub async fn toggle_completion(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/{}/toggle", TASKS, id);
        let request = self.client.put(&path).json(&serde_json::json!({}));
        self.client.send_message(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/{}", TASKS, id);
        self.client.send_message(self.client.delete(&path)).await
    }
}
