use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::{CreateTask, ReplaceTask, Task};

/// Repository trait for Task storage
///
/// This trait defines the data access interface for tasks. The shipped
/// implementation is in-memory ([`crate::MemTaskRepository`]); lookups
/// return `None` for unknown ids and the service layer decides how to
/// report that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List all tasks in insertion order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Append a new task, assigning the next identifier and timestamp
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Overwrite the mutable fields of an existing task
    async fn replace(&self, id: i64, input: ReplaceTask) -> TaskResult<Option<Task>>;

    /// Remove a task, returning the removed record
    async fn remove(&self, id: i64) -> TaskResult<Option<Task>>;

    /// Flip a task's completed flag
    async fn toggle(&self, id: i64) -> TaskResult<Option<Task>>;
}
