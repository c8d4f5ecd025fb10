//! Custom extractors for Axum handlers.

pub mod app_json;

pub use app_json::AppJson;
