//! # Axum Helpers
//!
//! A collection of utilities and helpers shared by the task-manager HTTP
//! services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the `{ "error": <message> }` wire error format
//! - **[`extractors`]**: JSON extractor with standardized rejections
//! - **[`http`]**: CORS layer construction
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
mod shutdown;

pub use errors::{AppError, ErrorResponse};
pub use extractors::AppJson;
pub use http::{create_cors_layer, create_permissive_cors_layer};
pub use server::{create_app, create_router, health_router};
pub use shutdown::shutdown_signal;
