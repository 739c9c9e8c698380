//! Authoritative in-memory task collection for the board.

use super::{
    snapshot::{BoardSnapshot, OperationKind, OperationStatus},
    transport::{TaskTransport, TransportError},
};
use crate::task::{
    domain::{Task, TaskDraft, TaskId, TaskStatus},
    ports::RemoteTaskStore,
};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Failure of [`TaskStateManager::load`].
///
/// Unlike mutation failures this one changes the collection: it becomes
/// empty and the phase becomes `Failed`.
#[derive(Debug, Clone, Error)]
#[error("failed to load tasks: {0}")]
pub struct LoadError(#[from] pub TransportError);

/// Errors returned by task state manager operations.
#[derive(Debug, Clone, Error)]
pub enum TaskStateError {
    /// A mutation failed remotely; the collection is unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Loading the collection failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The task is not part of the collection.
    #[error("task {0} is not on the board")]
    UnknownTask(TaskId),
}

/// Result type for task state manager operations.
pub type TaskStateResult<T> = Result<T, TaskStateError>;

/// Outcome of [`TaskStateManager::change_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// The task already had the requested status; nothing was sent.
    Unchanged(Task),
    /// The store confirmed the new status.
    Updated(Task),
}

impl StatusChange {
    /// Returns the task as it now stands.
    #[must_use]
    pub const fn task(&self) -> &Task {
        match self {
            Self::Unchanged(task) | Self::Updated(task) => task,
        }
    }

    /// Returns `true` when the store was updated.
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}

/// Owns the board's task collection and mediates every change to it.
///
/// Mutations are applied only after the remote store confirms them, each in
/// a single step keyed by task id, so results arriving out of order still
/// merge into a valid collection. Confirmed mutations touch the collection
/// only while it is `Ready`; a `Failed` collection stays empty. Views read with [`Self::snapshot`] or
/// follow changes through [`Self::subscribe`].
pub struct TaskStateManager<S>
where
    S: RemoteTaskStore,
{
    transport: TaskTransport<S>,
    state: watch::Sender<BoardSnapshot>,
}

impl<S> TaskStateManager<S>
where
    S: RemoteTaskStore,
{
    /// Creates a manager in the `Idle` phase with an empty collection.
    #[must_use]
    pub fn new(transport: TaskTransport<S>) -> Self {
        let (state, _) = watch::channel(BoardSnapshot::default());
        Self { transport, state }
    }

    /// Returns the transport used for remote calls.
    #[must_use]
    pub const fn transport(&self) -> &TaskTransport<S> {
        &self.transport
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.borrow().clone()
    }

    /// Returns a receiver that observes every applied change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.state.subscribe()
    }

    /// Returns the task with the given id, if it is on the board.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<Task> {
        self.state.borrow().task(id).cloned()
    }

    /// Fetches the collection from the remote store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::Load`] after moving the collection to the
    /// `Failed` phase with no tasks.
    pub async fn load(&self) -> TaskStateResult<()> {
        self.state.send_modify(BoardSnapshot::begin_loading);
        match self.transport.list_tasks().await {
            Ok(tasks) => {
                info!(count = tasks.len(), "task collection ready");
                self.state.send_modify(|snapshot| snapshot.finish_loading(tasks));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "task collection failed to load");
                let message = err.to_string();
                self.state.send_modify(|snapshot| snapshot.fail_loading(message));
                Err(LoadError(err).into())
            }
        }
    }

    /// Creates a task remotely and adds it to the front of the collection.
    ///
    /// If the collection is not `Ready` when the store answers, the task is
    /// returned but not added.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::Transport`] when creation fails; the
    /// collection is left unchanged.
    pub async fn add_task(&self, draft: TaskDraft) -> TaskStateResult<Task> {
        self.begin(OperationKind::Create);
        match self.transport.create_task(&draft).await {
            Ok(task) => {
                let inserted = task.clone();
                self.state.send_modify(|snapshot| {
                    if !snapshot.insert_front(inserted) {
                        debug!(
                            task_id = %task.id(),
                            "collection not ready, created task left to the next load"
                        );
                    }
                    snapshot.finish_operation(OperationKind::Create, OperationStatus::Succeeded);
                });
                Ok(task)
            }
            Err(err) => Err(self.fail(OperationKind::Create, err)),
        }
    }

    /// Moves a task to another column.
    ///
    /// Sends the task's full current state with only the status replaced.
    /// When the task already has `status` nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::UnknownTask`] when the task is not on the
    /// board and [`TaskStateError::Transport`] when the update fails; in both
    /// cases the collection is left unchanged.
    pub async fn change_status(
        &self,
        id: TaskId,
        status: TaskStatus,
    ) -> TaskStateResult<StatusChange> {
        let current = self.task(id).ok_or(TaskStateError::UnknownTask(id))?;
        if current.status() == status {
            debug!(task_id = %id, %status, "status unchanged, skipping update");
            return Ok(StatusChange::Unchanged(current));
        }

        self.begin(OperationKind::Update);
        match self.transport.update_task(&current.with_status(status)).await {
            Ok(updated) => {
                let replacement = updated.clone();
                self.state.send_modify(|snapshot| {
                    if !snapshot.replace(replacement) {
                        debug!(task_id = %id, "task not on a ready board when its update landed");
                    }
                    snapshot.finish_operation(OperationKind::Update, OperationStatus::Succeeded);
                });
                Ok(StatusChange::Updated(updated))
            }
            Err(err) => Err(self.fail(OperationKind::Update, err)),
        }
    }

    /// Deletes a task remotely and drops it from the collection.
    ///
    /// Removing an id that is not on the board still issues the delete and
    /// leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::Transport`] when deletion fails; the
    /// collection is left unchanged.
    pub async fn remove_task(&self, id: TaskId) -> TaskStateResult<()> {
        self.begin(OperationKind::Delete);
        match self.transport.delete_task(id).await {
            Ok(()) => {
                self.state.send_modify(|snapshot| {
                    snapshot.remove(id);
                    snapshot.finish_operation(OperationKind::Delete, OperationStatus::Succeeded);
                });
                Ok(())
            }
            Err(err) => Err(self.fail(OperationKind::Delete, err)),
        }
    }

    fn begin(&self, kind: OperationKind) {
        self.state.send_modify(|snapshot| snapshot.begin_operation(kind));
    }

    fn fail(&self, kind: OperationKind, err: TransportError) -> TaskStateError {
        let outcome = OperationStatus::Failed {
            reason: err.to_string(),
        };
        self.state.send_modify(|snapshot| snapshot.finish_operation(kind, outcome));
        err.into()
    }
}
