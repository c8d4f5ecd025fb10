use domain_tasks::{CreateTask, DeleteResponse, ReplaceTask, Task};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the task-manager REST API.
///
/// `base_url` is the server root, e.g. `http://localhost:4000`; the client
/// appends `/api/tasks` itself.
#[derive(Clone)]
pub struct TasksClient {
    http: Client,
    base_url: String,
}

impl TasksClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: i64) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    /// GET /api/tasks
    pub async fn fetch_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self.http.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Api("Failed to load tasks".to_string()));
        }
        Ok(response.json().await?)
    }

    /// POST /api/tasks
    pub async fn create_task(&self, input: &CreateTask) -> ClientResult<Task> {
        let response = self
            .http
            .post(self.collection_url())
            .json(input)
            .send()
            .await?;
        let response = Self::check(response, "Failed to create task").await?;
        Ok(response.json().await?)
    }

    /// PUT /api/tasks/{id}
    pub async fn update_task(&self, id: i64, input: &ReplaceTask) -> ClientResult<Task> {
        let response = self.http.put(self.task_url(id)).json(input).send().await?;
        let response = Self::check(response, "Failed to update task").await?;
        Ok(response.json().await?)
    }

    /// DELETE /api/tasks/{id}
    ///
    /// Returns the removed task from the `{message, task}` response body.
    pub async fn delete_task(&self, id: i64) -> ClientResult<Task> {
        let response = self.http.delete(self.task_url(id)).send().await?;
        let response = Self::check(response, "Failed to delete task").await?;
        let body: DeleteResponse = response.json().await?;
        Ok(body.task)
    }

    /// PATCH /api/tasks/{id}/toggle
    pub async fn toggle_task(&self, id: i64) -> ClientResult<Task> {
        let url = format!("{}/toggle", self.task_url(id));
        let response = self.http.patch(url).send().await?;
        let response = Self::check(response, "Failed to toggle task").await?;
        Ok(response.json().await?)
    }

    /// On a non-success status, pull the message out of the error body,
    /// falling back to `generic` when the body is missing or malformed.
    async fn check(response: Response, generic: &str) -> ClientResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| generic.to_string());
        debug!(%status, "API request failed: {}", message);
        Err(ClientError::Api(message))
    }
}
