//! In-memory event store

use parking_lot::RwLock;

use crate::types::EmployeeEvent;

use super::store::{assign_ids, EventStore, StoreResult};

#[derive(Debug)]
struct Inner {
    events: Vec<EmployeeEvent>,
    next_id: u64,
}

/// Event store kept entirely in memory
///
/// Used by tests and by `PAYROLL_STORE=memory`. Contents are lost on exit.
#[derive(Debug)]
pub struct InMemoryEventStore {
    inner: RwLock<Inner>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                events: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `events`
    pub fn with_events(mut events: Vec<EmployeeEvent>) -> Self {
        let next_id = assign_ids(&mut events, 1);
        Self {
            inner: RwLock::new(Inner { events, next_id }),
        }
    }
}

impl EventStore for InMemoryEventStore {
    fn insert_all(&self, mut records: Vec<EmployeeEvent>) -> StoreResult<Vec<EmployeeEvent>> {
        let mut inner = self.inner.write();
        inner.next_id = assign_ids(&mut records, inner.next_id);
        inner.events.extend(records.iter().cloned());
        Ok(records)
    }

    fn scan_all(&self) -> StoreResult<Vec<EmployeeEvent>> {
        Ok(self.inner.read().events.clone())
    }

    fn size(&self) -> StoreResult<usize> {
        Ok(self.inner.read().events.len())
    }
}
