//! HTTP implementation of the remote task store port.

use super::{
    config::StoreConfig,
    wire::{DeleteRequest, DeleteResponse, FetchResponse, MutationResponse, RecordsRequest},
};
use crate::task::{
    domain::TaskId,
    ports::{FetchQuery, RemoteStoreError, RemoteStoreResult, RemoteTaskStore, TaskRecord},
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

const PROJECT_ID_HEADER: &str = "x-project-id";
const PUBLIC_KEY_HEADER: &str = "x-public-key";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for the hosted record store.
///
/// Credentials are checked before every request, so a missing credential
/// fails the first call instead of sending an unauthenticated request.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    http_client: Client,
    config: StoreConfig,
}

impl HttpRecordStore {
    /// Creates a client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Unavailable`] when the HTTP client cannot
    /// be built.
    pub fn new(config: StoreConfig) -> RemoteStoreResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(RemoteStoreError::unavailable)?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Builds an authenticated request against the task collection.
    fn request(&self, method: Method, action: &str) -> RemoteStoreResult<RequestBuilder> {
        let (project_id, public_key) = self.config.credentials().require()?;
        let url = self.config.collection_url(action);
        let request_id = Uuid::new_v4();
        debug!(%method, %url, %request_id, "sending record store request");
        Ok(self
            .http_client
            .request(method, url)
            .header(PROJECT_ID_HEADER, project_id)
            .header(PUBLIC_KEY_HEADER, public_key)
            .header(REQUEST_ID_HEADER, request_id.to_string()))
    }

    /// Sends the request and decodes a JSON body from a success response.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> RemoteStoreResult<T> {
        let response = builder.send().await.map_err(|err| {
            warn!(error = %err, "record store request failed");
            RemoteStoreError::unavailable(err)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_owned()
            } else {
                body
            };
            warn!(status = status.as_u16(), %message, "record store returned an error status");
            return Err(RemoteStoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(RemoteStoreError::unavailable)?;
        serde_json::from_slice(&body)
            .map_err(|err| RemoteStoreError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl RemoteTaskStore for HttpRecordStore {
    async fn fetch_records(&self, query: &FetchQuery) -> RemoteStoreResult<Vec<TaskRecord>> {
        let builder = self.request(Method::POST, "fetch")?.json(query);
        let response: FetchResponse = self.send_json(builder).await?;
        response.into_records()
    }

    async fn create_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord> {
        let body = RecordsRequest {
            records: std::slice::from_ref(record),
        };
        let builder = self.request(Method::POST, "records")?.json(&body);
        let response: MutationResponse = self.send_json(builder).await?;
        response.into_record("failed to create task")
    }

    async fn update_record(&self, record: &TaskRecord) -> RemoteStoreResult<TaskRecord> {
        if record.id.is_none() {
            return Err(RemoteStoreError::MissingIdentifier);
        }
        let body = RecordsRequest {
            records: std::slice::from_ref(record),
        };
        let builder = self.request(Method::PUT, "records")?.json(&body);
        let response: MutationResponse = self.send_json(builder).await?;
        response.into_record("failed to update task")
    }

    async fn delete_record(&self, id: TaskId) -> RemoteStoreResult<()> {
        let body = DeleteRequest {
            record_ids: vec![id],
        };
        let builder = self.request(Method::DELETE, "records")?.json(&body);
        let response: DeleteResponse = self.send_json(builder).await?;
        response.into_unit()
    }
}
