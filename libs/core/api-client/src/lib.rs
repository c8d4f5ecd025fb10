//! Typed async client for the task-manager REST API.
//!
//! One method per endpoint, no retries, no caching. Failures carry the
//! server's error message where one is available, or a generic
//! per-operation message otherwise.

mod client;
mod error;

pub use client::TasksClient;
pub use error::{ClientError, ClientResult};
