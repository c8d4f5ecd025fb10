//! Task Manager HTTP API.
//!
//! Library surface exists so integration tests can assemble the same router
//! the binary serves.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;
