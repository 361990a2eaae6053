//! The task collection: user-authored to-do items, optionally public.
//!
//! Tasks are created and deleted from the private dashboard; public tasks
//! are reachable by direct link and collect comments. The owner's list is
//! mirrored into the view through a live query. The module follows
//! hexagonal architecture:
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
