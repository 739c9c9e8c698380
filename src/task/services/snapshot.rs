//! Read model published by the task state manager.

use crate::task::domain::{Task, TaskId, TaskStatus};

/// Loading phase of the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CollectionPhase {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The collection mirrors the remote store.
    Ready,
    /// The last fetch failed; the collection is empty.
    Failed {
        /// Human-readable failure.
        message: String,
    },
}

impl CollectionPhase {
    /// Returns `true` while the collection is `Idle` or `Loading`.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

/// Kind of mutation tracked by [`OperationStatuses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Task creation.
    Create,
    /// Task update (status change).
    Update,
    /// Task deletion.
    Delete,
}

/// Outcome of the most recent mutation of one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationStatus {
    /// No mutation of this kind has run.
    #[default]
    Idle,
    /// A mutation of this kind is in flight.
    Pending,
    /// The last mutation of this kind succeeded.
    Succeeded,
    /// The last mutation of this kind failed.
    Failed {
        /// Human-readable failure.
        reason: String,
    },
}

/// Reported for a kind while any mutation of it is in flight.
const PENDING: &OperationStatus = &OperationStatus::Pending;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct OperationSlot {
    last: OperationStatus,
    in_flight: usize,
}

/// One status per mutation kind.
///
/// A kind stays pending until every mutation of that kind has resolved; the
/// last one to resolve sets the reported outcome. The pending state is
/// advisory: it lets a view disable duplicate submissions but does not
/// serialize mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationStatuses {
    create: OperationSlot,
    update: OperationSlot,
    delete: OperationSlot,
}

impl OperationStatuses {
    /// Returns the status for `kind`.
    #[must_use]
    pub const fn get(&self, kind: OperationKind) -> &OperationStatus {
        let slot = self.slot(kind);
        if slot.in_flight > 0 {
            PENDING
        } else {
            &slot.last
        }
    }

    /// Returns `true` while a mutation of `kind` is in flight.
    #[must_use]
    pub const fn is_pending(&self, kind: OperationKind) -> bool {
        self.slot(kind).in_flight > 0
    }

    /// Returns how many mutations of `kind` are in flight.
    #[must_use]
    pub const fn in_flight(&self, kind: OperationKind) -> usize {
        self.slot(kind).in_flight
    }

    pub(crate) const fn begin(&mut self, kind: OperationKind) {
        let slot = self.slot_mut(kind);
        slot.in_flight = slot.in_flight.saturating_add(1);
    }

    pub(crate) fn finish(&mut self, kind: OperationKind, outcome: OperationStatus) {
        let slot = self.slot_mut(kind);
        slot.in_flight = slot.in_flight.saturating_sub(1);
        slot.last = outcome;
    }

    const fn slot(&self, kind: OperationKind) -> &OperationSlot {
        match kind {
            OperationKind::Create => &self.create,
            OperationKind::Update => &self.update,
            OperationKind::Delete => &self.delete,
        }
    }

    const fn slot_mut(&mut self, kind: OperationKind) -> &mut OperationSlot {
        match kind {
            OperationKind::Create => &mut self.create,
            OperationKind::Update => &mut self.update,
            OperationKind::Delete => &mut self.delete,
        }
    }
}

/// Consistent view of the board state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    phase: CollectionPhase,
    tasks: Vec<Task>,
    operations: OperationStatuses,
}

impl BoardSnapshot {
    /// Returns the collection phase.
    #[must_use]
    pub const fn phase(&self) -> &CollectionPhase {
        &self.phase
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the per-operation statuses.
    #[must_use]
    pub const fn operations(&self) -> &OperationStatuses {
        &self.operations
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks in one column, in display order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.status() == status)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub(crate) fn begin_loading(&mut self) {
        self.phase = CollectionPhase::Loading;
    }

    pub(crate) fn finish_loading(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.phase = CollectionPhase::Ready;
    }

    pub(crate) fn fail_loading(&mut self, message: String) {
        self.tasks.clear();
        self.phase = CollectionPhase::Failed { message };
    }

    /// Returns `true` when confirmed mutations are applied to the collection.
    ///
    /// Only a `Ready` collection mirrors the store; in any other phase the
    /// next successful load brings confirmed changes in.
    #[must_use]
    pub const fn accepts_mutations(&self) -> bool {
        matches!(self.phase, CollectionPhase::Ready)
    }

    /// Inserts a newly created task at the front, or replaces the entry with
    /// the same id so identifiers stay unique. Returns `false` when the
    /// collection is not `Ready`.
    pub(crate) fn insert_front(&mut self, task: Task) -> bool {
        if !self.accepts_mutations() {
            return false;
        }
        if !self.replace(task.clone()) {
            self.tasks.insert(0, task);
        }
        true
    }

    /// Replaces the entry with the same id; returns `false` if absent or
    /// the collection is not `Ready`.
    pub(crate) fn replace(&mut self, task: Task) -> bool {
        if !self.accepts_mutations() {
            return false;
        }
        match self.tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the id; returns `false` if absent or the
    /// collection is not `Ready`.
    pub(crate) fn remove(&mut self, id: TaskId) -> bool {
        if !self.accepts_mutations() {
            return false;
        }
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    pub(crate) const fn begin_operation(&mut self, kind: OperationKind) {
        self.operations.begin(kind);
    }

    pub(crate) fn finish_operation(&mut self, kind: OperationKind, outcome: OperationStatus) {
        self.operations.finish(kind, outcome);
    }
}
