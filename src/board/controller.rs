//! Board interactions: loading, the create form, drag and drop, deletion.

use super::{form::TaskForm, layout::BoardView};
use crate::task::{
    domain::{TaskDomainError, TaskId, TaskStatus},
    ports::RemoteTaskStore,
    services::{OperationKind, StatusChange, TaskStateManager},
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The action went through.
    Success,
    /// The action failed.
    Error,
}

/// Transient message shown after a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
}

impl Notification {
    /// Creates a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NotificationLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for error notifications.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NotificationLevel::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Drives the board on top of a shared [`TaskStateManager`].
///
/// The controller owns only presentation state (the form and the current
/// drag); every task change goes through the manager.
pub struct BoardController<S>
where
    S: RemoteTaskStore,
{
    manager: Arc<TaskStateManager<S>>,
    form: TaskForm,
    form_open: bool,
    dragged: Option<TaskId>,
}

impl<S> BoardController<S>
where
    S: RemoteTaskStore,
{
    /// Creates a controller with a closed, empty form.
    #[must_use]
    pub fn new(manager: Arc<TaskStateManager<S>>) -> Self {
        Self {
            manager,
            form: TaskForm::default(),
            form_open: false,
            dragged: None,
        }
    }

    /// Returns the shared state manager.
    #[must_use]
    pub const fn manager(&self) -> &Arc<TaskStateManager<S>> {
        &self.manager
    }

    /// Derives the current board view.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_snapshot(&self.manager.snapshot())
    }

    /// Loads the collection. Returns a notification only on failure.
    pub async fn start(&self) -> Option<Notification> {
        match self.manager.load().await {
            Ok(()) => None,
            Err(err) => {
                debug!(error = %err, "board failed to start");
                Some(Notification::error("Failed to load tasks"))
            }
        }
    }

    /// Opens the create form.
    pub const fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Closes the create form without submitting; typed input is kept.
    pub const fn cancel_form(&mut self) {
        self.form_open = false;
    }

    /// Returns `true` while the create form is shown.
    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Returns the form input.
    #[must_use]
    pub const fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Returns the form input for editing.
    pub const fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Returns `false` while a creation is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self
            .manager
            .snapshot()
            .operations()
            .is_pending(OperationKind::Create)
    }

    /// Validates the form and creates the task.
    ///
    /// On success the form is reset and closed; on failure it keeps its
    /// input so the user can retry.
    pub async fn submit_form(&mut self) -> Notification {
        let draft = match self.form.to_draft() {
            Ok(draft) => draft,
            Err(TaskDomainError::EmptyTitle) => {
                return Notification::error("Task title is required!");
            }
            Err(err) => return Notification::error(err.to_string()),
        };
        match self.manager.add_task(draft).await {
            Ok(_) => {
                self.form.reset();
                self.form_open = false;
                Notification::success("Task created successfully!")
            }
            Err(err) => Notification::error(format!("Failed to create task: {err}")),
        }
    }

    /// Starts dragging a task card.
    pub const fn begin_drag(&mut self, id: TaskId) {
        self.dragged = Some(id);
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<TaskId> {
        self.dragged
    }

    /// Drops the dragged card on the column for `status`.
    ///
    /// Dropping with nothing dragged, or on the card's own column, does
    /// nothing and returns `None`.
    pub async fn drop_on(&mut self, status: TaskStatus) -> Option<Notification> {
        let id = self.dragged.take()?;
        match self.manager.change_status(id, status).await {
            Ok(StatusChange::Updated(_)) => {
                Some(Notification::success(format!("Task moved to {status}!")))
            }
            Ok(StatusChange::Unchanged(_)) => None,
            Err(err) => Some(Notification::error(format!(
                "Failed to update task status: {err}"
            ))),
        }
    }

    /// Deletes a task.
    pub async fn delete(&self, id: TaskId) -> Notification {
        match self.manager.remove_task(id).await {
            Ok(()) => Notification::success("Task deleted successfully!"),
            Err(err) => Notification::error(format!("Failed to delete task: {err}")),
        }
    }
}
