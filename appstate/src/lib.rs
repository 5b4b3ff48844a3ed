//! Active state for the Go vanity server.
//!
//! This crate provides the `StateManager` that owns the current
//! (configuration, routing table) pair and implements the
//! `VanityStateProvider` trait from `common`.
//!
//! # Architecture
//!
//! ```text
//! Transport Layer (api)
//!          ↓
//!     appstate (this crate)
//!          ↓
//!     common (Configuration, RoutingTable)
//! ```
//!
//! - `appstate` depends on: common
//! - `api` depends on: common (and appstate only in tests)
//! - Server binary depends on: appstate, api

pub mod source;
pub mod state;

pub use source::ConfigSource;
pub use state::{Snapshot, StateManager};
