//! Common types shared across the Go vanity server crates.
//!
//! This crate sits at the bottom of the dependency hierarchy:
//! - Has NO dependencies on other workspace crates
//! - Defines the configuration document and the routing table derived from it
//! - Defines the `VanityStateProvider` trait every transport talks to
//!
//! ```text
//! Configuration ──build──▶ RoutingTable ──lookup──▶ RepositoryDescriptor
//! ```

pub mod backend;
pub mod config;
pub mod errors;
pub mod repository;
pub mod routing;
pub mod vcs;

pub use backend::VanityStateProvider;
pub use config::{Configuration, PathSpec, DEFAULT_CACHE_MAX_AGE};
pub use errors::{StateError, StateResult};
pub use repository::{normalize_path, RepositoryDescriptor};
pub use routing::RoutingTable;
pub use vcs::Vcs;
