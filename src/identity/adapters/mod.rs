//! Adapter implementations for the identity context.

pub mod memory;

pub use memory::InMemoryIdentityProvider;
