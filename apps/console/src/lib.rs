//! Console frontend for the task-manager API.
//!
//! Holds the pieces the UI is made of, all of them headless and
//! deterministic:
//!
//! - [`api`]: the client seam the controller talks through
//! - [`controller`]: task list + filter state, reconciled against the server
//! - [`carousel`]: the auto-scrolling track as an explicit state machine
//! - [`view`]: filtered view derivation and text rendering

pub mod api;
pub mod carousel;
pub mod controller;
pub mod view;

pub use carousel::{Carousel, Phase};
pub use controller::{TaskFilter, TaskListController};
