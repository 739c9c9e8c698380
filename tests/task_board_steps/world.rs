//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskflow::{
    board::{BoardController, Notification},
    task::{
        adapters::memory::InMemoryRecordStore,
        domain::{TaskId, TaskStatus},
        services::{TaskStateManager, TaskTransport},
    },
};

/// Controller type used by the BDD world.
pub type TestController = BoardController<InMemoryRecordStore>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub store: InMemoryRecordStore,
    pub controller: TestController,
    pub last_notification: Option<Notification>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryRecordStore::new();
        let transport = TaskTransport::new(Arc::new(store.clone()));
        let controller = BoardController::new(Arc::new(TaskStateManager::new(transport)));

        Self {
            store,
            controller,
            last_notification: None,
        }
    }

    /// Finds a task on the board by its title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.controller
            .manager()
            .snapshot()
            .tasks()
            .iter()
            .find(|task| task.title().as_str() == title)
            .map(|task| task.id())
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses a column label used in scenarios.
pub fn parse_status(label: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(label).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
