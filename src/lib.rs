//! Payroll Events Server
//!
//! Ingests a time-ordered file of employee lifecycle and payroll events,
//! persists them, and serves aggregated reports over HTTP.
//!
//! # Features
//!
//! - **Bulk Ingestion**: An upload is parsed in full and committed in one write, or not at all
//! - **Five Event Kinds**: ONBOARD, SALARY, BONUS, REIMBURSEMENT, EXIT
//! - **Reports**: Headcount, monthly joins/exits, salary and payout totals, yearly listing
//! - **Pluggable Storage**: JSONL file store or in-memory store behind one trait
//!
//! # Modules
//!
//! - `types`: Event record and report shapes
//! - `event_store`: Storage contract and implementations
//! - `ingest`: Row parser and bulk ingestor
//! - `reports`: Pure report functions and the store-backed `Reporter`
//! - `api`: Axum router and handlers
//! - `config`: Environment-driven server configuration
//! - `utils`: Atomic file writes and date helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use payroll_events::{InMemoryEventStore, Ingestor, Reporter};
//!
//! let store = Arc::new(InMemoryEventStore::new());
//! Ingestor::new(store.clone())
//!     .ingest_str("1,EMP001,John,Doe,Developer,ONBOARD,1000,01-01-2023,Notes")
//!     .unwrap();
//! assert_eq!(Reporter::new(store).employee_count().unwrap(), 1);
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod ingest;
pub mod reports;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::AppState;
pub use config::ServerConfig;
pub use event_store::{EventStore, EventStoreConfig, InMemoryEventStore, JsonlEventStore};
pub use ingest::{IngestError, Ingestor, ParseError};
pub use reports::{ReportError, Reporter};
pub use types::{EmployeeEvent, EventKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
