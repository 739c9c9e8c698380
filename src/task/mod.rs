//! Task collection management for the board.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts for the remote record store in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Transport and state services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
