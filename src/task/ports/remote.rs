//! Remote store port for task record persistence.

use super::record::{FetchQuery, TaskRecord};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote store operations.
pub type RemoteStoreResult<T> = Result<T, RemoteStoreError>;

/// Contract of the hosted record store holding the task collection.
///
/// Persistence, ordering and identifier assignment are the store's
/// responsibility.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTaskStore: Send + Sync {
    /// Fetches task records using the query's field list and ordering.
    async fn fetch_records(&self, query: &FetchQuery) -> RemoteStoreResult<Vec<TaskRecord>>;

    /// Creates a record and returns it as stored, including its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Rejected`] when the store reports failure.
    async fn create_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord>;

    /// Replaces an existing record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::MissingIdentifier`] when the record has no
    /// identifier and [`RemoteStoreError::NotFound`] when the store does not
    /// know it.
    async fn update_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord>;

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::NotFound`] or
    /// [`RemoteStoreError::Rejected`] when the store reports failure.
    async fn delete_record(&self, id: TaskId) -> RemoteStoreResult<()>;
}

/// Errors returned by remote store implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteStoreError {
    /// A required credential is not configured.
    #[error("missing remote store credential: set {0}")]
    MissingCredential(&'static str),

    /// The store answered with a non-success HTTP status.
    #[error("remote store returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The store processed the request and reported failure.
    #[error("remote store rejected the request: {0}")]
    Rejected(String),

    /// The response could not be interpreted.
    #[error("malformed remote store response: {0}")]
    MalformedResponse(String),

    /// The record does not exist.
    #[error("task record not found: {0}")]
    NotFound(TaskId),

    /// The record needs an identifier for this operation.
    #[error("task record has no identifier")]
    MissingIdentifier,

    /// The store could not be reached.
    #[error("remote store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteStoreError {
    /// Wraps a connectivity or I/O failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
