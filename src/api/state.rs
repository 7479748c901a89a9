//! Shared application state

use std::sync::Arc;

use crate::event_store::EventStore;

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The event store, created once at startup
    pub store: Arc<EventStore>,
}

impl AppState {
    /// Create state around an existing store
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(EventStore::new()))
    }
}
