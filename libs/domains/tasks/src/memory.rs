//! In-memory task store.
//!
//! The store exclusively owns the canonical task list; callers receive
//! clones. State lives for the process lifetime only.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{CreateTask, ReplaceTask, Task};
use crate::repository::TaskRepository;

/// In-memory implementation of [`TaskRepository`].
///
/// Cloning shares the underlying store, so one instance created at process
/// start can be handed to every router. Identifiers come from a
/// post-incremented counter held under the same lock as the list, so they
/// stay strictly increasing and are never reused, even after deletion.
#[derive(Clone)]
pub struct MemTaskRepository {
    inner: Arc<RwLock<Store>>,
}

struct Store {
    tasks: Vec<Task>,
    next_id: i64,
}

impl Store {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

impl MemTaskRepository {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Store {
                tasks: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for MemTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MemTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let store = self.inner.read().await;
        Ok(store.tasks.clone())
    }

    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut store = self.inner.write().await;
        let task = Task {
            id: store.allocate_id(),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            priority: input.priority,
            completed: false,
            created_at: Utc::now(),
        };
        store.tasks.push(task.clone());
        Ok(task)
    }

    async fn replace(&self, id: i64, input: ReplaceTask) -> TaskResult<Option<Task>> {
        let mut store = self.inner.write().await;
        let Some(idx) = store.position(id) else {
            return Ok(None);
        };

        // Full replace of the mutable fields; id and created_at are preserved.
        let task = &mut store.tasks[idx];
        task.title = input.title.trim().to_string();
        task.description = input.description.trim().to_string();
        task.priority = input.priority;
        task.completed = input.completed;

        Ok(Some(task.clone()))
    }

    async fn remove(&self, id: i64) -> TaskResult<Option<Task>> {
        let mut store = self.inner.write().await;
        match store.position(id) {
            Some(idx) => Ok(Some(store.tasks.remove(idx))),
            None => Ok(None),
        }
    }

    async fn toggle(&self, id: i64) -> TaskResult<Option<Task>> {
        let mut store = self.inner.write().await;
        let Some(idx) = store.position(id) else {
            return Ok(None);
        };

        let task = &mut store.tasks[idx];
        task.completed = !task.completed;
        Ok(Some(task.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;

    fn create_input(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: String::new(),
            priority: TaskPriority::Medium,
        }
    }

    #[tokio::test]
    async fn test_ids_are_strictly_increasing() {
        let repo = MemTaskRepository::new();
        let mut last_id = 0;
        for i in 0..5 {
            let task = repo.create(create_input(&format!("task {}", i))).await.unwrap();
            assert!(task.id > last_id);
            last_id = task.id;
        }
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_deletion() {
        let repo = MemTaskRepository::new();
        let first = repo.create(create_input("a")).await.unwrap();
        repo.remove(first.id).await.unwrap();
        let second = repo.create(create_input("b")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_create_trims_title_and_description() {
        let repo = MemTaskRepository::new();
        let task = repo
            .create(CreateTask {
                title: "  Buy milk  ".to_string(),
                description: "  2 liters  ".to_string(),
                priority: TaskPriority::Low,
            })
            .await
            .unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2 liters");
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = MemTaskRepository::new();
        for title in ["first", "second", "third"] {
            repo.create(create_input(title)).await.unwrap();
        }
        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_replace_preserves_id_and_created_at() {
        let repo = MemTaskRepository::new();
        let original = repo.create(create_input("before")).await.unwrap();

        let updated = repo
            .replace(
                original.id,
                ReplaceTask {
                    title: "after".to_string(),
                    description: "changed".to_string(),
                    priority: TaskPriority::High,
                    completed: true,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.priority, TaskPriority::High);
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_returns_none() {
        let repo = MemTaskRepository::new();
        repo.create(create_input("only")).await.unwrap();
        let result = repo
            .replace(9999, ReplaceTask {
                title: "x".to_string(),
                description: String::new(),
                priority: TaskPriority::Low,
                completed: false,
            })
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_twice_round_trips() {
        let repo = MemTaskRepository::new();
        let task = repo.create(create_input("flip")).await.unwrap();

        let once = repo.toggle(task.id).await.unwrap().unwrap();
        assert!(once.completed);
        let twice = repo.toggle(task.id).await.unwrap().unwrap();
        assert_eq!(twice.completed, task.completed);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_returns_exact_record() {
        let repo = MemTaskRepository::new();
        let keep = repo.create(create_input("keep")).await.unwrap();
        let drop = repo.create(create_input("drop")).await.unwrap();

        let removed = repo.remove(drop.id).await.unwrap().unwrap();
        assert_eq!(removed.id, drop.id);
        assert_eq!(removed.title, "drop");

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
    }

    #[tokio::test]
    async fn test_clone_shares_store() {
        let repo = MemTaskRepository::new();
        let other = repo.clone();
        repo.create(create_input("shared")).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
