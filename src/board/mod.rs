//! Board presentation layer over the task state manager.
//!
//! Groups the collection into status columns, keeps the create-form input
//! and turns user actions into state manager calls with a notification for
//! each outcome.

mod controller;
mod form;
mod layout;

pub use controller::{BoardController, Notification, NotificationLevel};
pub use form::TaskForm;
pub use layout::{BoardColumn, BoardLayout, BoardStats, BoardView};
