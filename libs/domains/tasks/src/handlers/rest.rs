use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_helpers::AppJson;
use std::sync::Arc;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, DeleteResponse, ReplaceTask, Task};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// Parse a path identifier. Anything that is not an integer is reported as
/// not-found, not as a distinct error.
fn parse_id(raw: &str) -> TaskResult<i64> {
    raw.parse().map_err(|_| TaskError::NotFound)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks in insertion order", body = Vec<Task>)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    AppJson(payload): AppJson<serde_json::Value>,
) -> TaskResult<impl IntoResponse> {
    let input = CreateTask::parse(&payload)?;
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace an existing task (full replace of mutable fields)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = ReplaceTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn replace_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<serde_json::Value>,
) -> TaskResult<Json<Task>> {
    // The id is resolved before the payload is read, so an unknown or
    // non-integer id reports not-found even when the body is also invalid.
    let id = parse_id(&id)?;
    service.ensure_exists(id).await?;
    let input = ReplaceTask::parse(&payload)?;
    let task = service.replace_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted, body carries the removed record", body = DeleteResponse),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<DeleteResponse>> {
    let task = service.remove_task(parse_id(&id)?).await?;
    Ok(Json(DeleteResponse::new(task)))
}

/// Flip the 'completed' flag
#[utoipa::path(
    patch,
    path = "/{id}/toggle",
    tag = "tasks",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task toggled", body = Task),
        (status = 404, description = "Task not found")
    )
)]
pub async fn toggle_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Path(id): Path<String>,
) -> TaskResult<Json<Task>> {
    let task = service.toggle_task(parse_id(&id)?).await?;
    Ok(Json(task))
}
