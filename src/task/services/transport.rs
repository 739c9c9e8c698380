//! Translation layer between board tasks and remote task records.

use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskTags, TaskTitle,
        format_due_date, parse_due_date,
    },
    ports::{FetchQuery, RemoteStoreError, RemoteTaskStore, TaskRecord},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Remote operation a transport error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportOperation {
    /// Fetching the collection.
    List,
    /// Creating a task.
    Create,
    /// Updating a task.
    Update,
    /// Deleting a task.
    Delete,
}

impl TransportOperation {
    /// Returns a short lowercase name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for TransportOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a remote task operation.
///
/// The display text is the human-readable cause; the operation is kept as
/// a field so callers can phrase their own notification around it.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The remote store call failed.
    #[error("{source}")]
    Remote {
        /// Operation that failed.
        operation: TransportOperation,
        /// Underlying store failure.
        source: RemoteStoreError,
    },

    /// The store returned a record that is not a usable task.
    #[error("malformed task record: {reason}")]
    MalformedRecord {
        /// Operation that received the record.
        operation: TransportOperation,
        /// What was wrong with the record.
        reason: String,
    },
}

impl TransportError {
    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> TransportOperation {
        match self {
            Self::Remote { operation, .. } | Self::MalformedRecord { operation, .. } => *operation,
        }
    }

    const fn remote(operation: TransportOperation, source: RemoteStoreError) -> Self {
        Self::Remote { operation, source }
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Sole gateway from the board to the remote task store.
///
/// Converts between [`Task`] values and [`TaskRecord`]s and keeps no state
/// of its own; caching belongs to the state manager.
pub struct TaskTransport<S>
where
    S: RemoteTaskStore,
{
    store: Arc<S>,
    query: FetchQuery,
}

impl<S> Clone for TaskTransport<S>
where
    S: RemoteTaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            query: self.query.clone(),
        }
    }
}

impl<S> TaskTransport<S>
where
    S: RemoteTaskStore,
{
    /// Creates a transport fetching all task fields, most recently modified
    /// first.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            query: FetchQuery::default(),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Fetches the whole collection in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the call fails or any record is not a
    /// usable task.
    pub async fn list_tasks(&self) -> TransportResult<Vec<Task>> {
        let operation = TransportOperation::List;
        debug!(%operation, "fetching task records");
        let records = self
            .store
            .fetch_records(&self.query)
            .await
            .map_err(|err| log_failure(TransportError::remote(operation, err)))?;

        let tasks = records
            .into_iter()
            .map(|record| task_from_record(record, operation))
            .collect::<TransportResult<Vec<_>>>()
            .map_err(log_failure)?;
        info!(%operation, count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Creates a task from a draft and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the store reports failure or the
    /// created record carries no identifier.
    pub async fn create_task(&self, draft: &TaskDraft) -> TransportResult<Task> {
        let operation = TransportOperation::Create;
        debug!(%operation, title = %draft.title(), "creating task");
        let created = self
            .store
            .create_record(&record_from_draft(draft))
            .await
            .map_err(|err| log_failure(TransportError::remote(operation, err)))?;

        let task = task_from_record(created, operation).map_err(log_failure)?;
        info!(%operation, task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Replaces the stored task with the full given state.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the store reports failure or returns
    /// an unusable record.
    pub async fn update_task(&self, task: &Task) -> TransportResult<Task> {
        let operation = TransportOperation::Update;
        debug!(%operation, task_id = %task.id(), status = %task.status(), "updating task");
        let updated = self
            .store
            .update_record(&record_from_task(task))
            .await
            .map_err(|err| log_failure(TransportError::remote(operation, err)))?;

        let task = task_from_record(updated, operation).map_err(log_failure)?;
        info!(%operation, task_id = %task.id(), "updated task");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the store reports failure.
    pub async fn delete_task(&self, id: TaskId) -> TransportResult<()> {
        let operation = TransportOperation::Delete;
        debug!(%operation, task_id = %id, "deleting task");
        self.store
            .delete_record(id)
            .await
            .map_err(|err| log_failure(TransportError::remote(operation, err)))?;
        info!(%operation, task_id = %id, "deleted task");
        Ok(())
    }
}

fn log_failure(err: TransportError) -> TransportError {
    warn!(operation = %err.operation(), error = %err, "task transport failed");
    err
}

/// Builds a create request. The store shows `Name`, so it mirrors the title.
fn record_from_draft(draft: &TaskDraft) -> TaskRecord {
    TaskRecord {
        name: Some(draft.title().as_str().to_owned()),
        title: Some(draft.title().as_str().to_owned()),
        description: draft.description().map(str::to_owned),
        status: Some(draft.status().as_str().to_owned()),
        priority: Some(draft.priority().as_str().to_owned()),
        due_date: draft.due_date().map(format_due_date),
        tags: Some(draft.tags().to_delimited()),
        ..TaskRecord::default()
    }
}

fn record_from_task(task: &Task) -> TaskRecord {
    TaskRecord {
        id: Some(task.id()),
        name: Some(task.title().as_str().to_owned()),
        title: Some(task.title().as_str().to_owned()),
        description: task.description().map(str::to_owned),
        status: Some(task.status().as_str().to_owned()),
        priority: Some(task.priority().as_str().to_owned()),
        due_date: task.due_date().map(format_due_date),
        tags: Some(task.tags().to_delimited()),
        ..TaskRecord::default()
    }
}

/// Converts a stored record into a task.
///
/// Missing status and priority fall back to their defaults; unknown labels
/// are rejected.
fn task_from_record(record: TaskRecord, operation: TransportOperation) -> TransportResult<Task> {
    let malformed = |reason: String| TransportError::MalformedRecord { operation, reason };

    let id = record
        .id
        .ok_or_else(|| malformed("record has no identifier".to_owned()))?;
    let raw_title = record
        .title
        .or(record.name)
        .ok_or_else(|| malformed(format!("record {id} has no title")))?;
    let title =
        TaskTitle::new(raw_title).map_err(|err| malformed(format!("record {id}: {err}")))?;
    let status = record
        .status
        .as_deref()
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(|err| malformed(format!("record {id}: {err}")))?
        .unwrap_or_default();
    let priority = record
        .priority
        .as_deref()
        .map(TaskPriority::try_from)
        .transpose()
        .map_err(|err| malformed(format!("record {id}: {err}")))?
        .unwrap_or_default();
    let due_date = record
        .due_date
        .as_deref()
        .map(parse_due_date)
        .transpose()
        .map_err(|err| malformed(format!("record {id}: {err}")))?
        .flatten();
    let tags = TaskTags::parse_delimited(record.tags.as_deref().unwrap_or_default());

    Ok(Task::from_persisted(PersistedTaskData {
        id,
        title,
        description: record.description,
        status,
        priority,
        due_date,
        tags,
        created_on: record.created_on,
        modified_on: record.modified_on,
    }))
}
