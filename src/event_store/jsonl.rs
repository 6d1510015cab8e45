//! JSONL-backed event store
//!
//! Persists the `employee_events` table as one JSON object per line. A bulk
//! insert rewrites the whole file through a temp file and rename, so a batch
//! is never partially visible.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::types::EmployeeEvent;
use crate::utils::{atomic_write_with, cleanup_stale_temp};

use super::store::{assign_ids, EventStore, EventStoreConfig, StoreError, StoreResult};

#[derive(Debug)]
struct State {
    next_id: u64,
    count: usize,
}

/// Event store persisted to `<data_dir>/employee_events.jsonl`
#[derive(Debug)]
pub struct JsonlEventStore {
    config: EventStoreConfig,
    state: RwLock<State>,
}

impl JsonlEventStore {
    /// Open (or create) the store described by `config`
    ///
    /// Scans any existing file to recover the next id. A corrupt line fails
    /// the open rather than being skipped.
    pub fn open(config: EventStoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(config.data_dir())?;

        let path = config.events_path();
        if cleanup_stale_temp(&path)? {
            tracing::warn!(path = %path.display(), "removed stale temp file from interrupted write");
        }

        let existing = read_events(&path)?;
        let next_id = existing.iter().filter_map(|e| e.id).max().unwrap_or(0) + 1;
        tracing::info!(
            path = %path.display(),
            records = existing.len(),
            next_id,
            "opened event store"
        );

        Ok(Self {
            config,
            state: RwLock::new(State {
                next_id,
                count: existing.len(),
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &EventStoreConfig {
        &self.config
    }

    /// Path of the backing file
    pub fn path(&self) -> PathBuf {
        self.config.events_path()
    }
}

impl EventStore for JsonlEventStore {
    fn insert_all(&self, mut records: Vec<EmployeeEvent>) -> StoreResult<Vec<EmployeeEvent>> {
        let mut state = self.state.write();
        if records.is_empty() {
            return Ok(records);
        }

        let next_id = assign_ids(&mut records, state.next_id);

        let mut lines = String::new();
        for record in &records {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }

        let path = self.path();
        let mut existing = if path.exists() {
            fs::read(&path)?
        } else {
            Vec::new()
        };
        if existing.last().is_some_and(|b| *b != b'\n') {
            existing.push(b'\n');
        }

        atomic_write_with(&path, |w| {
            w.write_all(&existing)?;
            w.write_all(lines.as_bytes())
        })?;

        state.next_id = next_id;
        state.count += records.len();
        tracing::debug!(inserted = records.len(), total = state.count, "bulk insert committed");

        Ok(records)
    }

    fn scan_all(&self) -> StoreResult<Vec<EmployeeEvent>> {
        let _state = self.state.read();
        read_events(&self.path())
    }

    fn size(&self) -> StoreResult<usize> {
        Ok(self.state.read().count)
    }
}

/// Load every event from a JSONL file; a missing file is an empty table
fn read_events(path: &std::path::Path) -> StoreResult<Vec<EmployeeEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut events = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let event = serde_json::from_str::<EmployeeEvent>(&line).map_err(|e| {
            StoreError::Corrupted {
                line: line_num + 1,
                reason: e.to_string(),
            }
        })?;
        events.push(event);
    }

    Ok(events)
}
