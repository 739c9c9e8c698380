//! Port contracts for the remote task store.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod record;
pub mod remote;

pub use record::{FetchQuery, OrderBy, SortDirection, TASK_FIELDS, TaskRecord};
pub use remote::{RemoteStoreError, RemoteStoreResult, RemoteTaskStore};

#[cfg(test)]
pub use remote::MockRemoteTaskStore;
