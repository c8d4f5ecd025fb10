use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};

use task_api::config::Config;
use task_api::state::AppState;
use task_api::{api, openapi};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);
    tracing::info!(
        name = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Starting task manager API"
    );

    // The in-memory store is created once here and shared by every handler;
    // its contents live exactly as long as the process.
    let state = AppState::new();

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes)
        .await?
        .merge(health_router(config.app));

    create_app(router, &config.server).await?;
    Ok(())
}
