use api_client::{ClientResult, TasksClient};
use async_trait::async_trait;
use domain_tasks::{CreateTask, ReplaceTask, Task};

/// Client seam for the UI controller.
///
/// Mirrors the five REST operations one to one. The controller is generic
/// over this trait so it can be driven by a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TasksApi: Send + Sync {
    async fn fetch_tasks(&self) -> ClientResult<Vec<Task>>;
    async fn create_task(&self, input: CreateTask) -> ClientResult<Task>;
    async fn update_task(&self, id: i64, input: ReplaceTask) -> ClientResult<Task>;
    async fn delete_task(&self, id: i64) -> ClientResult<Task>;
    async fn toggle_task(&self, id: i64) -> ClientResult<Task>;
}

#[async_trait]
impl TasksApi for TasksClient {
    async fn fetch_tasks(&self) -> ClientResult<Vec<Task>> {
        TasksClient::fetch_tasks(self).await
    }

    async fn create_task(&self, input: CreateTask) -> ClientResult<Task> {
        TasksClient::create_task(self, &input).await
    }

    async fn update_task(&self, id: i64, input: ReplaceTask) -> ClientResult<Task> {
        TasksClient::update_task(self, id, &input).await
    }

    async fn delete_task(&self, id: i64) -> ClientResult<Task> {
        TasksClient::delete_task(self, id).await
    }

    async fn toggle_task(&self, id: i64) -> ClientResult<Task> {
        TasksClient::toggle_task(self, id).await
    }
}
