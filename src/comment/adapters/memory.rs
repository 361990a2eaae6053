//! In-memory comment repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::comment::{
    domain::{Comment, CommentId},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use crate::task::domain::TaskId;

/// Thread-safe in-memory comment repository.
///
/// Comments are held in insertion order, which is also the order
/// per-task queries return them in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    state: Arc<RwLock<Vec<Comment>>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.iter().any(|existing| existing.id() == comment.id()) {
            return Err(CommentRepositoryError::DuplicateComment(comment.id()));
        }
        state.push(comment.clone());
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.retain(|comment| comment.id() != id);
        Ok(())
    }

    async fn find_by_task(&self, task_id: TaskId) -> CommentRepositoryResult<Vec<Comment>> {
        let state = self.state.read().map_err(|err| {
            CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .filter(|comment| comment.task_id() == task_id)
            .cloned()
            .collect())
    }
}
