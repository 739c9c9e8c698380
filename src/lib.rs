//! Taskflow: a Kanban task board backed by a remote record store.
//!
//! The crate keeps an authoritative in-memory collection of tasks, moves
//! them between `To Do`, `In Progress` and `Completed`, and mirrors every
//! change to a remote table through a single transport.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and validation with no infrastructure
//!   dependencies
//! - **Ports**: The remote record store interface and its record shape
//! - **Adapters**: HTTP and in-memory record stores
//! - **Services**: The task transport and the task state manager
//!
//! # Modules
//!
//! - [`task`]: Task domain, remote store port, adapters and services
//! - [`board`]: Column layout, create form and user-facing notifications

pub mod board;
pub mod task;
