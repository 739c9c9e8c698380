//! JSON-over-HTTP adapter for the hosted record store.
//!
//! Every call targets `{base}/tables/{table}/{action}` and carries the
//! project credentials plus a per-request correlation identifier.

mod client;
mod config;
mod wire;

pub use client::HttpRecordStore;
pub use config::{
    DEFAULT_STORE_URL, DEFAULT_TABLE, PROJECT_ID_ENV, PUBLIC_KEY_ENV, STORE_URL_ENV,
    StoreConfig, StoreConfigError, StoreCredentials, TABLE_ENV, TIMEOUT_ENV,
};
