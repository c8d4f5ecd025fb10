mod rest;

use axum::{
    routing::{get, patch, put},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateTask, DeleteResponse, ReplaceTask, Task, TaskPriority};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::list_tasks,
        rest::create_task,
        rest::replace_task,
        rest::delete_task,
        rest::toggle_task,
    ),
    components(
        schemas(Task, TaskPriority, CreateTask, ReplaceTask, DeleteResponse)
    ),
    tags(
        (name = "tasks", description = "Task management operations")
    )
)]
pub struct ApiDoc;

/// Create the tasks router, intended to be nested under `/api/tasks`
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(rest::list_tasks).post(rest::create_task))
        .route("/{id}", put(rest::replace_task).delete(rest::delete_task))
        .route("/{id}/toggle", patch(rest::toggle_task))
        .with_state(shared_service)
}
