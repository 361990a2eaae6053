//! Port contracts for the comment context.

mod repository;

pub use repository::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
