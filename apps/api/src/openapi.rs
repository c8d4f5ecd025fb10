use utoipa::OpenApi;

/// Top-level OpenAPI document, nesting each domain's doc at its mount point.
#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/api/tasks", api = domain_tasks::ApiDoc)
    ),
    info(
        title = "Task Manager API",
        description = "Minimal in-memory task management API"
    )
)]
pub struct ApiDoc;
