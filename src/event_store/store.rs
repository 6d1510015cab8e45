//! Event Store - storage contract for employee events
//!
//! Every report is computed from a full scan, so the contract is small:
//! an all-or-nothing bulk insert, a full scan, and a record count.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::EmployeeEvent;

/// File name of the persisted `employee_events` table
pub const EVENTS_FILE_NAME: &str = "employee_events.jsonl";

/// Configuration for the file-backed store
#[derive(Debug, Clone)]
pub struct EventStoreConfig {
    /// Path to the data directory
    pub data_dir: PathBuf,
}

impl Default for EventStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl EventStoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to employee_events.jsonl
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(EVENTS_FILE_NAME)
    }
}

/// Result type for EventStore operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by an event store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store corrupted at line {line}: {reason}")]
    Corrupted { line: usize, reason: String },
}

/// Persistent collection of employee events
///
/// Implementations must make `insert_all` atomic: after a failed call,
/// `scan_all` returns exactly what it returned before.
pub trait EventStore: Send + Sync {
    /// Insert every record in one atomic write, assigning ids
    ///
    /// Returns the records as stored, ids populated.
    fn insert_all(&self, records: Vec<EmployeeEvent>) -> StoreResult<Vec<EmployeeEvent>>;

    /// Every record ever inserted, in unspecified order
    fn scan_all(&self) -> StoreResult<Vec<EmployeeEvent>>;

    /// Number of stored records
    fn size(&self) -> StoreResult<usize> {
        Ok(self.scan_all()?.len())
    }
}

/// Assign consecutive ids starting at `next_id`, returning the next free id
pub(crate) fn assign_ids(records: &mut [EmployeeEvent], next_id: u64) -> u64 {
    let mut id = next_id;
    for record in records.iter_mut() {
        record.id = Some(id);
        id += 1;
    }
    id
}
