//! Repository port for comment persistence and per-task lookup.

use crate::comment::domain::{Comment, CommentId};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::DuplicateComment`] when the
    /// comment ID already exists.
    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Deletes a comment by identifier.
    ///
    /// Deleting an unknown identifier is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] on store failure.
    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()>;

    /// Returns all comments attached to the given task, one-shot, in
    /// insertion order.
    async fn find_by_task(&self, task_id: TaskId) -> CommentRepositoryResult<Vec<Comment>>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
