//! Request and response envelopes of the hosted record store API.

use crate::task::{
    domain::TaskId,
    ports::{RemoteStoreError, RemoteStoreResult, TaskRecord},
};
use serde::{Deserialize, Serialize};

/// Body of create and update calls.
#[derive(Debug, Serialize)]
pub(super) struct RecordsRequest<'a> {
    pub records: &'a [TaskRecord],
}

/// Body of delete calls.
#[derive(Debug, Serialize)]
pub(super) struct DeleteRequest {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<TaskId>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FetchResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Option<Vec<TaskRecord>>,
    #[serde(default)]
    message: Option<String>,
}

impl FetchResponse {
    /// Returns the fetched records; a missing `data` field means none.
    pub(super) fn into_records(self) -> RemoteStoreResult<Vec<TaskRecord>> {
        if self.success == Some(false) {
            return Err(rejected(self.message, "failed to fetch tasks"));
        }
        Ok(self.data.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct MutationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    results: Vec<RecordResult>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordResult {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<TaskRecord>,
    #[serde(default)]
    message: Option<String>,
}

impl MutationResponse {
    /// Returns the first result's record when the whole call succeeded.
    pub(super) fn into_record(self, fallback: &str) -> RemoteStoreResult<TaskRecord> {
        if !self.success {
            return Err(rejected(self.message, fallback));
        }
        let first = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| rejected(self.message, fallback))?;
        if !first.success {
            return Err(rejected(first.message, fallback));
        }
        first
            .data
            .ok_or_else(|| RemoteStoreError::MalformedResponse("result carries no record".to_owned()))
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl DeleteResponse {
    pub(super) fn into_unit(self) -> RemoteStoreResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(rejected(self.message, "failed to delete task"))
        }
    }
}

fn rejected(message: Option<String>, fallback: &str) -> RemoteStoreError {
    RemoteStoreError::Rejected(
        message
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned()),
    )
}
