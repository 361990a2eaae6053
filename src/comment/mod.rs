//! The comment collection: threaded replies on shared public tasks.
//!
//! Any authenticated visitor can comment on a public task; authors can
//! delete their own comments. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
