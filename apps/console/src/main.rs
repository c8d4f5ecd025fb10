use std::time::{Duration, Instant};

use api_client::TasksClient;
use core_config::{env_or_default, Environment};
use task_console::view::{self, EMPTY_MESSAGE, ITEM_GAP};
use task_console::{Carousel, Phase, TaskFilter, TaskListController};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    core_config::tracing::install_color_eyre();
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let base_url = env_or_default("API_BASE_URL", "http://localhost:4000");
    tracing::info!(%base_url, "connecting to task API");

    let mut controller = TaskListController::new(TasksClient::new(base_url));
    controller.load().await;

    if let Some(message) = controller.error() {
        tracing::warn!("{}", message);
        println!("{}", message);
        return Ok(());
    }

    for filter in [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed] {
        controller.set_filter(filter);
        print_view(&controller);
    }

    controller.set_filter(TaskFilter::All);
    run_ticker(&controller).await;

    Ok(())
}

fn print_view<A: task_console::api::TasksApi>(controller: &TaskListController<A>) {
    println!("--- {:?} ---", controller.filter());
    let visible = controller.visible_tasks();
    if visible.is_empty() {
        println!("{}", EMPTY_MESSAGE);
        return;
    }
    for task in visible {
        println!("{}", view::format_task(task));
    }
}

/// Scroll the track for a couple of seconds to show the loop wrapping.
async fn run_ticker<A: task_console::api::TasksApi>(controller: &TaskListController<A>) {
    let visible = controller.visible_tasks();
    let mut carousel = Carousel::new();
    carousel.measure(&view::card_widths(&visible), ITEM_GAP);
    if carousel.phase() != Phase::Running {
        return;
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        ticker.tick().await;
        carousel.frame(Instant::now());
        println!("track offset: {:.1}px", carousel.translate_x());
    }
}
