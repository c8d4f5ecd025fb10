use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, ReplaceTask, Task};
use crate::repository::TaskRepository;

/// Service layer for Task business logic.
///
/// Validation and not-found reporting happen here; the repository below
/// never sees an invalid payload.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all tasks in insertion order
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list().await
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Report not-found for an unknown id without touching anything.
    ///
    /// The boundary resolves the id before it reads the payload, so an
    /// unknown id reports not-found even when the body is also invalid.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn ensure_exists(&self, id: i64) -> TaskResult<()> {
        if self.exists(id).await? {
            Ok(())
        } else {
            Err(TaskError::NotFound)
        }
    }

    /// Replace the mutable fields of an existing task
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn replace_task(&self, id: i64, input: ReplaceTask) -> TaskResult<Task> {
        // Not-found is checked before validation: unknown id wins over an
        // invalid payload.
        self.ensure_exists(id).await?;
        input.validate()?;
        self.repository
            .replace(id, input)
            .await?
            .ok_or(TaskError::NotFound)
    }

    /// Remove a task, returning the removed record
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn remove_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .remove(id)
            .await?
            .ok_or(TaskError::NotFound)
    }

    /// Flip a task's completed flag
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn toggle_task(&self, id: i64) -> TaskResult<Task> {
        self.repository
            .toggle(id)
            .await?
            .ok_or(TaskError::NotFound)
    }

    async fn exists(&self, id: i64) -> TaskResult<bool> {
        Ok(self.repository.list().await?.iter().any(|t| t.id == id))
    }
}
