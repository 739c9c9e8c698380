//! Raw record shape exchanged with the remote task store.

use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields requested when fetching task records.
pub const TASK_FIELDS: [&str; 13] = [
    "Id",
    "Name",
    "Tags",
    "Owner",
    "CreatedOn",
    "CreatedBy",
    "ModifiedOn",
    "ModifiedBy",
    "title",
    "description",
    "status",
    "priority",
    "dueDate",
];

/// Task record as stored by the remote store.
///
/// Every field is optional on the wire; the transport decides which ones a
/// usable task requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Store-assigned identifier; absent on create requests.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Display name used by the store's own tooling.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Comma-delimited tags.
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Owning user as reported by the store.
    #[serde(rename = "Owner", default, skip_serializing)]
    pub owner: Option<serde_json::Value>,
    /// Creation timestamp.
    #[serde(rename = "CreatedOn", default, skip_serializing)]
    pub created_on: Option<DateTime<Utc>>,
    /// Creating user as reported by the store.
    #[serde(rename = "CreatedBy", default, skip_serializing)]
    pub created_by: Option<serde_json::Value>,
    /// Last modification timestamp.
    #[serde(rename = "ModifiedOn", default, skip_serializing)]
    pub modified_on: Option<DateTime<Utc>>,
    /// Last modifying user as reported by the store.
    #[serde(rename = "ModifiedBy", default, skip_serializing)]
    pub modified_by: Option<serde_json::Value>,
    /// Task title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Task description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status label, for example `"To Do"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Priority label, for example `"Medium"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Due date as `YYYY-MM-DD` or an ISO timestamp.
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Sort direction for fetch ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// Ordering hint for a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Record field to sort on.
    #[serde(rename = "fieldName")]
    pub field_name: String,
    /// Sort direction.
    #[serde(rename = "SortType")]
    pub direction: SortDirection,
}

/// Parameters of a record fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchQuery {
    /// Fields to return.
    pub fields: Vec<String>,
    /// Ordering applied by the store.
    #[serde(rename = "orderBy")]
    pub order_by: Vec<OrderBy>,
}

impl Default for FetchQuery {
    /// All task fields, most recently modified first.
    fn default() -> Self {
        Self {
            fields: TASK_FIELDS.iter().map(|field| (*field).to_owned()).collect(),
            order_by: vec![OrderBy {
                field_name: "ModifiedOn".to_owned(),
                direction: SortDirection::Desc,
            }],
        }
    }
}
