//! In-memory adapter implementations for testing.
//!
//! The in-memory store behaves like the hosted record store closely enough
//! to drive the transport and state manager without network access.

mod record_store;

pub use record_store::InMemoryRecordStore;
