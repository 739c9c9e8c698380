//! Unsaved task input.

use super::{TaskDomainError, TaskPriority, TaskStatus, TaskTags, TaskTitle};
use chrono::{DateTime, NaiveDate};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated input for creating a task.
///
/// A draft has no identifier and is never part of the task collection; the
/// remote store turns it into a [`super::Task`] on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    tags: TaskTags,
}

impl TaskDraft {
    /// Creates a draft with the required title and default fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: None,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            due_date: None,
            tags: TaskTags::default(),
        })
    }

    /// Sets the description. Blank text clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        let trimmed = text.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TaskTags) -> Self {
        self.tags = tags;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TaskTags {
        &self.tags
    }
}

/// Parses due-date text as entered in forms or stored in records.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (truncated to their date).
/// Blank text means no due date.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] for any other input.
pub fn parse_due_date(text: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|stamp| stamp.date_naive()))
        .map(Some)
        .map_err(|_| TaskDomainError::InvalidDueDate(trimmed.to_owned()))
}

/// Formats a due date the way records store it.
#[must_use]
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}
