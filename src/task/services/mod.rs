//! Application services for the board's task collection.
//!
//! - [`TaskTransport`] is the only component that talks to the remote store.
//! - [`TaskStateManager`] owns the collection and applies confirmed changes.

mod snapshot;
mod state;
mod transport;

pub use snapshot::{
    BoardSnapshot, CollectionPhase, OperationKind, OperationStatus, OperationStatuses,
};
pub use state::{LoadError, StatusChange, TaskStateError, TaskStateManager, TaskStateResult};
pub use transport::{TaskTransport, TransportError, TransportOperation, TransportResult};
