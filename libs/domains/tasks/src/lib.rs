//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← REST boundary (axum)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory store)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{MemTaskRepository, TaskService};
//!
//! let repository = MemTaskRepository::new();
//! let service = TaskService::new(repository);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use memory::MemTaskRepository;
pub use models::{CreateTask, DeleteResponse, ReplaceTask, Task, TaskPriority};
pub use repository::TaskRepository;
pub use service::TaskService;
