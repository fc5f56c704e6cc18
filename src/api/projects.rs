use super::{ApiClient, ApiError};
use crate::entities::{MessageResponse, Project, ProjectRequest};

const PROJECTS: &str = "/api/projects";

#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: ApiClient,
}

impl ProjectsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Projects owned by the signed-in user.
    pub async fn list(&self) -> Result<Vec<Project>, ApiError> {
        let projects: Option<Vec<Project>> = self.client.send_json(self.client.get(PROJECTS)).await?;
        Ok(projects.unwrap_or_default())
    }

    pub async fn get(&self, id: i64) -> Result<Project, ApiError> {
        let path = format!("{}/{}", PROJECTS, id);
        self.client.send_json(self.client.get(&path)).await
    }

    pub async fn create(&self, project: &ProjectRequest) -> Result<MessageResponse, ApiError> {
        self.client.send_message(self.client.post(PROJECTS).json(project)).await
    }

    pub async fn update(&self, id: i64, project: &ProjectRequest) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/{}", PROJECTS, id);
        self.client.send_message(self.client.put(&path).json(project)).await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let path = format!("{}/{}", PROJECTS, id);
        self.client.send_message(self.client.delete(&path)).await
    }
}
