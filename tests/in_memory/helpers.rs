//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskflow::{
    board::BoardController,
    task::{
        adapters::memory::InMemoryRecordStore,
        domain::TaskId,
        ports::TaskRecord,
        services::{TaskStateManager, TaskTransport},
    },
};

/// State manager over the in-memory store.
pub type TestManager = TaskStateManager<InMemoryRecordStore>;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> InMemoryRecordStore {
    InMemoryRecordStore::new()
}

/// Builds a shared state manager over a clone of `store`.
pub fn manager(store: &InMemoryRecordStore) -> Arc<TestManager> {
    Arc::new(TaskStateManager::new(TaskTransport::new(Arc::new(
        store.clone(),
    ))))
}

/// Builds a board controller over a clone of `store`.
pub fn controller(store: &InMemoryRecordStore) -> BoardController<InMemoryRecordStore> {
    BoardController::new(manager(store))
}

/// Seeds a task record and returns its identifier.
///
/// # Errors
///
/// Returns an error if the store rejects the record or assigns no id.
pub fn seed_task(
    store: &InMemoryRecordStore,
    title: &str,
    status: &str,
    priority: &str,
) -> Result<TaskId, eyre::Report> {
    let stored = store.seed(TaskRecord {
        name: Some(title.to_owned()),
        title: Some(title.to_owned()),
        status: Some(status.to_owned()),
        priority: Some(priority.to_owned()),
        ..TaskRecord::default()
    })?;
    stored
        .id
        .ok_or_else(|| eyre::eyre!("seeded record has no identifier"))
}
