use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{TaskError, TaskResult};

const TITLE_MESSAGE: &str = "Task 'title' is required and must be a non-empty string.";
const DESCRIPTION_MESSAGE: &str = "Task 'description' must be a string.";
const PRIORITY_MESSAGE: &str = "Task 'priority' must be one of: low, medium, high.";
const COMPLETED_MESSAGE: &str = "Task 'completed' must be a boolean.";

/// Task priority levels
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskPriority {
    Low,
    /// Default priority
    #[default]
    Medium,
    High,
}

/// Task entity - represents a to-do item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, strictly increasing, never reused
    pub id: i64,
    /// Task title, never empty after trimming
    pub title: String,
    /// Task description
    pub description: String,
    /// Task priority
    pub priority: TaskPriority,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp, immutable after creation
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
}

/// DTO for replacing an existing task.
///
/// Full-replace semantics: every mutable field is supplied on each update.
/// Omitted `description` and `completed` fall back to their creation
/// defaults, not to the task's current values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceTask {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: TaskPriority,
    #[serde(default)]
    pub completed: bool,
}

/// Response body for a successful delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub task: Task,
}

impl DeleteResponse {
    pub fn new(task: Task) -> Self {
        Self {
            message: "Task deleted".to_string(),
            task,
        }
    }
}

impl CreateTask {
    /// Deserialize a raw JSON payload, reporting each bad field with the
    /// service's message instead of serde's.
    pub fn parse(payload: &Value) -> TaskResult<Self> {
        Ok(Self {
            title: parse_title(payload)?,
            description: parse_description(payload)?,
            priority: parse_priority(payload)?,
        })
    }
}

impl ReplaceTask {
    /// Like [`CreateTask::parse`], with the optional `completed` flag.
    pub fn parse(payload: &Value) -> TaskResult<Self> {
        Ok(Self {
            title: parse_title(payload)?,
            description: parse_description(payload)?,
            priority: parse_priority(payload)?,
            completed: parse_completed(payload)?,
        })
    }
}

fn parse_title(payload: &Value) -> TaskResult<String> {
    match payload.get("title") {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(TaskError::Validation(TITLE_MESSAGE.to_string())),
    }
}

fn parse_description(payload: &Value) -> TaskResult<String> {
    match payload.get("description") {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(TaskError::Validation(DESCRIPTION_MESSAGE.to_string())),
    }
}

fn parse_priority(payload: &Value) -> TaskResult<TaskPriority> {
    payload
        .get("priority")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| TaskError::Validation(PRIORITY_MESSAGE.to_string()))
}

fn parse_completed(payload: &Value) -> TaskResult<bool> {
    match payload.get("completed") {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(TaskError::Validation(COMPLETED_MESSAGE.to_string())),
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(TITLE_MESSAGE)));
    }
    Ok(())
}
