//! Create-task form state.

use crate::task::domain::{TaskDomainError, TaskDraft, TaskPriority, TaskTags, parse_due_date};

/// Raw input of the create-task form.
///
/// Fields hold text exactly as typed; [`TaskForm::to_draft`] validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Title text; required.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Selected priority.
    pub priority: TaskPriority,
    /// Due date text, `YYYY-MM-DD` or empty.
    pub due_date: String,
    /// Comma-separated tags.
    pub tags: String,
}

impl TaskForm {
    /// Validates the input and builds a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title and
    /// [`TaskDomainError::InvalidDueDate`] for an unparseable due date.
    pub fn to_draft(&self) -> Result<TaskDraft, TaskDomainError> {
        let mut draft = TaskDraft::new(self.title.as_str())?
            .with_description(self.description.as_str())
            .with_priority(self.priority)
            .with_tags(TaskTags::parse_delimited(&self.tags));
        if let Some(due_date) = parse_due_date(&self.due_date)? {
            draft = draft.with_due_date(due_date);
        }
        Ok(draft)
    }

    /// Restores the empty form with `Medium` priority.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
