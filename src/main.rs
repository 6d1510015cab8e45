//! Payroll Events Server - Binary Entry Point
//!
//! This is the main entry point for the payroll-server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use payroll_events::api::{serve, AppState};
use payroll_events::config::{ServerConfig, StoreKind};
use payroll_events::event_store::{EventStore, InMemoryEventStore, JsonlEventStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        version = payroll_events::VERSION,
        addr = %config.addr,
        store = ?config.store,
        "starting payroll server"
    );

    let store: Arc<dyn EventStore> = match config.store {
        StoreKind::File => Arc::new(JsonlEventStore::open(config.event_store_config())?),
        StoreKind::Memory => Arc::new(InMemoryEventStore::new()),
    };

    let state = Arc::new(AppState::new(store));
    serve(&config.addr, state, config.max_upload_bytes).await
}
