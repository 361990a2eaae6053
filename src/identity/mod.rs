//! User identity and sessions.
//!
//! Authentication itself is delegated to a hosted identity service; this
//! context wraps it behind a port and models what the application observes.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
