use axum::Router;
use domain_tasks::{handlers, TaskService};

pub fn router(state: &crate::state::AppState) -> Router {
    let service = TaskService::new(state.tasks.clone());
    handlers::router(service)
}
