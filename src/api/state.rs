//! Shared application state

use std::sync::Arc;

use crate::event_store::EventStore;
use crate::ingest::Ingestor;
use crate::reports::Reporter;

/// State shared by every request handler
///
/// Holds no data of its own; each request goes through the store.
pub struct AppState {
    pub ingestor: Ingestor,
    pub reporter: Reporter,
}

impl AppState {
    /// Create state wired to the given store
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            ingestor: Ingestor::new(store.clone()),
            reporter: Reporter::new(store),
        }
    }
}
