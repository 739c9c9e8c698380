//! Connection settings for the hosted record store.

use crate::task::ports::{RemoteStoreError, RemoteStoreResult};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable holding the store project identifier.
pub const PROJECT_ID_ENV: &str = "TASKFLOW_PROJECT_ID";
/// Environment variable holding the store public key.
pub const PUBLIC_KEY_ENV: &str = "TASKFLOW_PUBLIC_KEY";
/// Environment variable overriding the store base URL.
pub const STORE_URL_ENV: &str = "TASKFLOW_STORE_URL";
/// Environment variable overriding the task collection name.
pub const TABLE_ENV: &str = "TASKFLOW_TABLE";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "TASKFLOW_TIMEOUT_SECS";

/// Base URL used when [`STORE_URL_ENV`] is unset.
pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:8787/";
/// Collection name used when [`TABLE_ENV`] is unset.
pub const DEFAULT_TABLE: &str = "task2";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while reading store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreConfigError {
    /// The base URL does not parse or cannot carry a path.
    #[error("invalid store URL '{0}'")]
    InvalidUrl(String),

    /// The timeout is not a positive number of seconds.
    #[error("invalid timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// The two opaque credentials addressing the remote store.
///
/// Either may be missing; the store adapter refuses to issue requests until
/// both are present.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreCredentials {
    project_id: Option<String>,
    public_key: Option<String>,
}

impl StoreCredentials {
    /// Creates credentials, treating blank values as missing.
    #[must_use]
    pub fn new(project_id: Option<String>, public_key: Option<String>) -> Self {
        Self {
            project_id: non_blank(project_id),
            public_key: non_blank(public_key),
        }
    }

    /// Returns `true` when both credentials are present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.project_id.is_some() && self.public_key.is_some()
    }

    /// Returns the project identifier and public key.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::MissingCredential`] naming the first
    /// missing environment variable.
    pub fn require(&self) -> RemoteStoreResult<(&str, &str)> {
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(RemoteStoreError::MissingCredential(PROJECT_ID_ENV))?;
        let public_key = self
            .public_key
            .as_deref()
            .ok_or(RemoteStoreError::MissingCredential(PUBLIC_KEY_ENV))?;
        Ok((project_id, public_key))
    }
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("project_id", &self.project_id)
            .field("public_key", &self.public_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// HTTP store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: Url,
    table: String,
    credentials: StoreCredentials,
    timeout: Duration,
    connect_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration with default collection and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError::InvalidUrl`] when `base_url` cannot carry
    /// a path (for example `mailto:` URLs).
    pub fn new(base_url: Url, credentials: StoreCredentials) -> Result<Self, StoreConfigError> {
        if base_url.cannot_be_a_base() {
            return Err(StoreConfigError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            table: DEFAULT_TABLE.to_owned(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when a present value is invalid. Missing
    /// credentials are not an error here.
    pub fn from_env() -> Result<Self, StoreConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, keyed by environment
    /// variable name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when a present value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreConfigError> {
        let raw_url =
            non_blank(lookup(STORE_URL_ENV)).unwrap_or_else(|| DEFAULT_STORE_URL.to_owned());
        let base_url =
            Url::parse(&raw_url).map_err(|_| StoreConfigError::InvalidUrl(raw_url.clone()))?;
        let credentials = StoreCredentials::new(lookup(PROJECT_ID_ENV), lookup(PUBLIC_KEY_ENV));
        let mut config = Self::new(base_url, credentials)?;

        if let Some(table) = non_blank(lookup(TABLE_ENV)) {
            config.table = table;
        }
        if let Some(raw_timeout) = non_blank(lookup(TIMEOUT_ENV)) {
            let seconds = raw_timeout
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| StoreConfigError::InvalidTimeout(raw_timeout.clone()))?;
            config.timeout = Duration::from_secs(seconds);
        }
        Ok(config)
    }

    /// Sets the collection name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the collection name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &StoreCredentials {
        &self.credentials
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Builds `{base}/tables/{table}/{action}`.
    pub(crate) fn collection_url(&self, action: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["tables", self.table.as_str(), action]);
        }
        url
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = StoreConfig::from_lookup(|_| None).expect("defaults are valid");

        assert_eq!(config.base_url().as_str(), DEFAULT_STORE_URL);
        assert_eq!(config.table(), DEFAULT_TABLE);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.credentials().is_complete());
    }

    #[test]
    fn reads_every_variable() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (STORE_URL_ENV, "https://store.example.com/api/"),
            (PROJECT_ID_ENV, "project-1"),
            (PUBLIC_KEY_ENV, "key-1"),
            (TABLE_ENV, "board_tasks"),
            (TIMEOUT_ENV, "5"),
        ]))
        .expect("configuration should parse");

        assert_eq!(config.table(), "board_tasks");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(
            config.credentials().require().expect("credentials present"),
            ("project-1", "key-1")
        );
        assert_eq!(
            config.collection_url("fetch").as_str(),
            "https://store.example.com/api/tables/board_tasks/fetch"
        );
    }

    #[rstest]
    #[case(&[(PUBLIC_KEY_ENV, "key-1")], PROJECT_ID_ENV)]
    #[case(&[(PROJECT_ID_ENV, "project-1")], PUBLIC_KEY_ENV)]
    #[case(&[(PROJECT_ID_ENV, "  "), (PUBLIC_KEY_ENV, "key-1")], PROJECT_ID_ENV)]
    fn missing_credential_names_the_variable(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        let config = StoreConfig::from_lookup(lookup_from(pairs)).expect("config parses");
        let err = config
            .credentials()
            .require()
            .expect_err("credential should be missing");

        assert!(matches!(err, RemoteStoreError::MissingCredential(name) if name == expected));
    }

    #[rstest]
    #[case(STORE_URL_ENV, "not a url")]
    #[case(STORE_URL_ENV, "mailto:someone@example.com")]
    #[case(TIMEOUT_ENV, "0")]
    #[case(TIMEOUT_ENV, "soon")]
    fn invalid_values_are_rejected(#[case] key: &str, #[case] value: &str) {
        let result = StoreConfig::from_lookup(lookup_from(&[(key, value)]));
        assert!(result.is_err(), "{key}={value} should be rejected");
    }

    #[test]
    fn debug_output_redacts_public_key() {
        let credentials =
            StoreCredentials::new(Some("project-1".to_owned()), Some("secret".to_owned()));
        let rendered = format!("{credentials:?}");

        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("project-1"));
    }
}
