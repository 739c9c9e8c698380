//! Domain model for board tasks.
//!
//! The task domain models persisted tasks, unsaved drafts and their
//! validated fields while keeping the remote record shape outside of the
//! domain boundary.

mod draft;
mod error;
mod ids;
mod tags;
mod task;

pub use draft::{TaskDraft, format_due_date, parse_due_date};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use tags::{TAG_DELIMITER, TaskTags};
pub use task::{PersistedTaskData, Task, TaskPriority, TaskStatus};
