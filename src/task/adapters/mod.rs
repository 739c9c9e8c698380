//! Adapter implementations of the remote task store port.
//!
//! - [`http`]: JSON-over-HTTP client for the hosted record store
//! - [`memory`]: in-process store for tests and local runs

pub mod http;
pub mod memory;
