use crate::modules::sequencer::core::store::PatternStore;
use std::sync::Arc;

/// One store instance constructed at startup and shared by every request
/// handler; no global state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PatternStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(PatternStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
