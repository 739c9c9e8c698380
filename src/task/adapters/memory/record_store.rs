//! In-memory record store for tests and local demos.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::TaskId,
    ports::{
        FetchQuery, OrderBy, RemoteStoreError, RemoteStoreResult, RemoteTaskStore, SortDirection,
        TaskRecord,
    },
};

/// Thread-safe in-memory stand-in for the hosted record store.
///
/// Assigns increasing identifiers, stamps `CreatedOn`/`ModifiedOn` from the
/// clock and honours the fetch ordering on `Id`, `CreatedOn` and
/// `ModifiedOn`. It can be switched off to exercise failure handling.
#[derive(Clone)]
pub struct InMemoryRecordStore {
    state: Arc<RwLock<InMemoryRecordState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Default)]
struct InMemoryRecordState {
    records: BTreeMap<TaskId, TaskRecord>,
    last_id: u64,
    unavailable: bool,
}

impl InMemoryRecordStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryRecordState::default())),
            clock,
        }
    }

    /// Inserts a record as if it had been created earlier.
    ///
    /// A record carrying an identifier keeps it; otherwise the next free
    /// identifier is assigned.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn seed(&self, record: TaskRecord) -> RemoteStoreResult<TaskRecord> {
        let now = self.clock.utc();
        let mut state = self.write_state()?;
        let id = match record.id {
            Some(id) => {
                state.last_id = state.last_id.max(id.value());
                id
            }
            None => state.allocate_id(),
        };
        let stored = TaskRecord {
            id: Some(id),
            created_on: record.created_on.or(Some(now)),
            modified_on: record.modified_on.or(Some(now)),
            ..record
        };
        state.records.insert(id, stored.clone());
        Ok(stored)
    }

    /// Makes every subsequent call fail (or succeed again).
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn set_unavailable(&self, unavailable: bool) -> RemoteStoreResult<()> {
        self.write_state()?.unavailable = unavailable;
        Ok(())
    }

    /// Returns the stored record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn record(&self, id: TaskId) -> RemoteStoreResult<Option<TaskRecord>> {
        Ok(self.read_state()?.records.get(&id).cloned())
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn len(&self) -> RemoteStoreResult<usize> {
        Ok(self.read_state()?.records.len())
    }

    /// Returns `true` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn is_empty(&self) -> RemoteStoreResult<bool> {
        Ok(self.read_state()?.records.is_empty())
    }

    fn read_state(&self) -> RemoteStoreResult<RwLockReadGuard<'_, InMemoryRecordState>> {
        self.state
            .read()
            .map_err(|err| RemoteStoreError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> RemoteStoreResult<RwLockWriteGuard<'_, InMemoryRecordState>> {
        self.state
            .write()
            .map_err(|err| RemoteStoreError::unavailable(std::io::Error::other(err.to_string())))
    }

    /// Takes the write lock, failing when the store is switched off.
    fn online_state(&self) -> RemoteStoreResult<RwLockWriteGuard<'_, InMemoryRecordState>> {
        let state = self.write_state()?;
        if state.unavailable {
            return Err(RemoteStoreError::unavailable(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "in-memory store is switched off",
            )));
        }
        Ok(state)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl InMemoryRecordState {
    fn allocate_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId::from_raw(self.last_id)
    }
}

fn timestamp_field(record: &TaskRecord, field: &str) -> Option<DateTime<Utc>> {
    match field {
        "CreatedOn" => record.created_on,
        "ModifiedOn" => record.modified_on,
        _ => None,
    }
}

/// Compares two records on one ordering key, breaking ties by identifier.
fn compare_records(left: &TaskRecord, right: &TaskRecord, order: &OrderBy) -> Ordering {
    let by_field = timestamp_field(left, &order.field_name)
        .cmp(&timestamp_field(right, &order.field_name))
        .then_with(|| left.id.cmp(&right.id));
    match order.direction {
        SortDirection::Asc => by_field,
        SortDirection::Desc => by_field.reverse(),
    }
}

#[async_trait]
impl RemoteTaskStore for InMemoryRecordStore {
    async fn fetch_records(&self, query: &FetchQuery) -> RemoteStoreResult<Vec<TaskRecord>> {
        let state = self.online_state()?;
        let mut records: Vec<TaskRecord> = state.records.values().cloned().collect();
        records.sort_by(|left, right| {
            query
                .order_by
                .iter()
                .map(|order| compare_records(left, right, order))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });
        Ok(records)
    }

    async fn create_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord> {
        let now = self.clock.utc();
        let mut state = self.online_state()?;
        let id = state.allocate_id();
        let stored = TaskRecord {
            id: Some(id),
            created_on: Some(now),
            modified_on: Some(now),
            ..record.clone()
        };
        state.records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord> {
        let id = record.id.ok_or(RemoteStoreError::MissingIdentifier)?;
        let now = self.clock.utc();
        let mut state = self.online_state()?;
        let existing = state
            .records
            .get(&id)
            .ok_or(RemoteStoreError::NotFound(id))?;
        let stored = TaskRecord {
            id: Some(id),
            owner: existing.owner.clone(),
            created_on: existing.created_on,
            created_by: existing.created_by.clone(),
            modified_on: Some(now),
            ..record.clone()
        };
        state.records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_record(&self, id: TaskId) -> RemoteStoreResult<()> {
        let mut state = self.online_state()?;
        state
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(RemoteStoreError::NotFound(id))
    }
}
