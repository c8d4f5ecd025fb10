use domain_tasks::{CreateTask, ReplaceTask, Task};
use tracing::instrument;

use crate::api::TasksApi;

/// Which slice of the task list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    /// Pure, pinned mapping from filter to task predicate.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

/// UI state controller.
///
/// Holds a mirror of the server's task list (never authoritative), the
/// active filter, a loading flag, and the last error message. Local state
/// changes only after the server confirms an operation; there are no
/// optimistic updates and no automatic retries.
pub struct TaskListController<A: TasksApi> {
    api: A,
    tasks: Vec<Task>,
    filter: TaskFilter,
    loading: bool,
    error: Option<String>,
}

impl<A: TasksApi> TaskListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: TaskFilter::All,
            loading: false,
            error: None,
        }
    }

    /// Load the full task list from the server.
    ///
    /// On failure the local list is left exactly as it was; the list is
    /// never partially populated.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.fetch_tasks().await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.error = Some("Could not load tasks".to_string());
            }
        }
        self.loading = false;
    }

    /// Create a task and append it locally on success.
    pub async fn add(&mut self, input: CreateTask) {
        self.error = None;
        match self.api.create_task(input).await {
            Ok(task) => self.tasks.push(task),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Replace a task and patch it locally on success.
    pub async fn update(&mut self, id: i64, input: ReplaceTask) {
        self.error = None;
        match self.api.update_task(id, input).await {
            Ok(updated) => self.patch(updated),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Delete a task and drop it locally on success.
    pub async fn remove(&mut self, id: i64) {
        self.error = None;
        match self.api.delete_task(id).await {
            Ok(_) => self.tasks.retain(|t| t.id != id),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Toggle a task's completed flag and patch it locally on success.
    pub async fn toggle(&mut self, id: i64) {
        self.error = None;
        match self.api.toggle_task(id).await {
            Ok(updated) => self.patch(updated),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// The filtered view. Derived on every call; never mutates the list.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn patch(&mut self, updated: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
            *existing = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTasksApi;
    use api_client::ClientError;
    use chrono::Utc;
    use domain_tasks::TaskPriority;

    fn task(id: i64, completed: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: String::new(),
            priority: TaskPriority::Medium,
            completed,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_load_populates_tasks() {
        let mut api = MockTasksApi::new();
        api.expect_fetch_tasks()
            .returning(|| Ok(vec![task(1, false), task(2, true)]));

        let mut controller = TaskListController::new(api);
        controller.load().await;

        assert_eq!(controller.tasks().len(), 2);
        assert!(controller.error().is_none());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_load_failure_sets_generic_message_and_keeps_list() {
        let mut api = MockTasksApi::new();
        let mut seq = mockall::Sequence::new();
        api.expect_fetch_tasks()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![task(1, false)]));
        api.expect_fetch_tasks()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(ClientError::Api("boom".to_string())));

        let mut controller = TaskListController::new(api);
        controller.load().await;
        controller.load().await;

        assert_eq!(controller.error(), Some("Could not load tasks"));
        assert_eq!(controller.tasks().len(), 1, "failed reload keeps prior list");
    }

    #[tokio::test]
    async fn test_add_appends_on_success_without_refetch() {
        let mut api = MockTasksApi::new();
        api.expect_create_task().returning(|_| Ok(task(5, false)));
        api.expect_fetch_tasks().times(0);

        let mut controller = TaskListController::new(api);
        controller
            .add(CreateTask {
                title: "new".to_string(),
                description: String::new(),
                priority: TaskPriority::Low,
            })
            .await;

        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].id, 5);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_list_and_sets_message() {
        let mut api = MockTasksApi::new();
        api.expect_fetch_tasks()
            .returning(|| Ok(vec![task(1, false)]));
        api.expect_toggle_task()
            .returning(|_| Err(ClientError::Api("Task not found.".to_string())));

        let mut controller = TaskListController::new(api);
        controller.load().await;
        controller.toggle(99).await;

        assert_eq!(controller.error(), Some("Task not found."));
        assert_eq!(controller.tasks().len(), 1);
        assert!(!controller.tasks()[0].completed);
    }

    #[tokio::test]
    async fn test_mutation_clears_previous_error() {
        let mut api = MockTasksApi::new();
        api.expect_toggle_task()
            .returning(|_| Err(ClientError::Api("nope".to_string())));
        api.expect_delete_task().returning(|id| Ok(task(id, false)));

        let mut controller = TaskListController::new(api);
        controller.toggle(1).await;
        assert!(controller.error().is_some());

        controller.remove(1).await;
        assert!(controller.error().is_none());
    }

    #[tokio::test]
    async fn test_toggle_patches_in_place() {
        let mut api = MockTasksApi::new();
        api.expect_fetch_tasks()
            .returning(|| Ok(vec![task(1, false), task(2, false)]));
        api.expect_toggle_task().returning(|id| Ok(task(id, true)));

        let mut controller = TaskListController::new(api);
        controller.load().await;
        controller.toggle(2).await;

        assert!(!controller.tasks()[0].completed);
        assert!(controller.tasks()[1].completed);
        assert_eq!(controller.tasks().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_drops_exactly_one() {
        let mut api = MockTasksApi::new();
        api.expect_fetch_tasks()
            .returning(|| Ok(vec![task(1, false), task(2, true)]));
        api.expect_delete_task().returning(|id| Ok(task(id, true)));

        let mut controller = TaskListController::new(api);
        controller.load().await;
        controller.remove(2).await;

        assert_eq!(controller.tasks().len(), 1);
        assert_eq!(controller.tasks()[0].id, 1);
    }

    #[tokio::test]
    async fn test_filters_partition_the_list() {
        let mut api = MockTasksApi::new();
        api.expect_fetch_tasks()
            .returning(|| Ok(vec![task(1, false), task(2, true), task(3, false)]));

        let mut controller = TaskListController::new(api);
        controller.load().await;

        controller.set_filter(TaskFilter::Pending);
        let pending: Vec<i64> = controller.visible_tasks().iter().map(|t| t.id).collect();

        controller.set_filter(TaskFilter::Completed);
        let completed: Vec<i64> = controller.visible_tasks().iter().map(|t| t.id).collect();

        // No overlap, and the union covers the whole list.
        assert!(pending.iter().all(|id| !completed.contains(id)));
        let mut union: Vec<i64> = pending.iter().chain(completed.iter()).copied().collect();
        union.sort_unstable();
        assert_eq!(union, vec![1, 2, 3]);

        controller.set_filter(TaskFilter::All);
        assert_eq!(controller.visible_tasks().len(), 3);
        // Deriving views did not mutate the underlying list.
        assert_eq!(controller.tasks().len(), 3);
    }
}
