use domain_tasks::MemTaskRepository;

/// Shared application state.
///
/// Cloning is cheap; the repository shares its store internally.
#[derive(Clone)]
pub struct AppState {
    pub tasks: MemTaskRepository,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: MemTaskRepository::new(),
        }
    }
}
