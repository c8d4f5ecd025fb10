//! Text rendering for the task track.
//!
//! The console has no layout engine, so card widths are derived from the
//! rendered text: a fixed chrome width plus a per-character advance. The
//! carousel only needs widths that are stable for a given list, which this
//! is.

use domain_tasks::Task;

/// Message shown instead of the track when the (filtered) list is empty.
pub const EMPTY_MESSAGE: &str = "No tasks yet.";

/// Horizontal gap between cards, in px.
pub const ITEM_GAP: f64 = 20.0;

const CARD_CHROME_WIDTH: f64 = 48.0;
const CHAR_ADVANCE: f64 = 7.2;
const CARD_MIN_WIDTH: f64 = 160.0;

/// Approximate rendered width of one task card.
pub fn card_width(task: &Task) -> f64 {
    let text = format_task(task);
    (text.chars().count() as f64 * CHAR_ADVANCE + CARD_CHROME_WIDTH).max(CARD_MIN_WIDTH)
}

/// Widths for a whole (filtered) list, in render order.
pub fn card_widths(tasks: &[&Task]) -> Vec<f64> {
    tasks.iter().map(|t| card_width(t)).collect()
}

/// One task as a card label: `[x] #3 Buy milk (low)`.
pub fn format_task(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    format!("[{}] #{} {} ({})", check, task.id, task.title, task.priority)
}

/// The track contents: the filtered list rendered twice back-to-back, so
/// the wrap point lands on an identical frame.
pub fn track_items<'a>(tasks: &'a [&'a Task]) -> Vec<&'a Task> {
    tasks.iter().chain(tasks.iter()).copied().collect()
}
