//! Event Store Module
//!
//! Storage for employee events. Reports never query the store directly;
//! they scan everything and group in memory, so the contract is just
//! bulk insert, full scan and size.
//!
//! # Architecture
//!
//! ```text
//! Write Path (upload):
//! ┌─────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ POST    │───►│ Parser   │───►│ buffer every │───►│ insert_all()     │
//! │ /upload │    │ per line │    │ parsed row   │    │ tmp file+rename  │
//! └─────────┘    └──────────┘    └──────────────┘    └──────────────────┘
//!
//! Read Path (reports):
//! ┌───────────┐    ┌────────────────┐
//! │ scan_all()│───►│ group and fold │───► JSON
//! └───────────┘    └────────────────┘
//! ```

mod jsonl;
mod memory;
mod store;

pub use jsonl::JsonlEventStore;
pub use memory::InMemoryEventStore;
pub use store::{EventStore, EventStoreConfig, StoreError, StoreResult, EVENTS_FILE_NAME};
