//! Adapter implementations for the comment context.

pub mod memory;

pub use memory::InMemoryCommentRepository;
