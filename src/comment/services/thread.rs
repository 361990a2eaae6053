//! Service layer for comment threads on public tasks.

use crate::comment::{
    domain::{Comment, CommentBody, CommentDomainError, CommentId},
    ports::{CommentRepository, CommentRepositoryError},
};
use crate::identity::domain::Session;
use crate::task::domain::TaskId;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for comment thread operations.
#[derive(Debug, Error)]
pub enum CommentThreadError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CommentDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CommentRepositoryError),
}

/// Result type for comment thread service operations.
pub type CommentThreadResult<T> = Result<T, CommentThreadError>;

/// Comment thread orchestration service.
#[derive(Clone)]
pub struct CommentThreadService<R, C>
where
    R: CommentRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CommentThreadService<R, C>
where
    R: CommentRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new comment thread service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Posts a comment on the given task, authored by the session's user.
    ///
    /// The author's email and display name are captured from the session
    /// at this point and stored with the comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentThreadError::Domain`] when the text is empty and
    /// [`CommentThreadError::Repository`] when persistence fails.
    pub async fn post(
        &self,
        task_id: TaskId,
        session: &Session,
        text: impl Into<String> + Send,
    ) -> CommentThreadResult<Comment> {
        let body = CommentBody::new(text)?;
        let comment = Comment::new(task_id, session.profile(), body, &*self.clock);
        self.repository.insert(&comment).await?;
        Ok(comment)
    }

    /// Deletes a comment by identifier.
    ///
    /// The view only offers this to the comment's author; the check is
    /// advisory and the store remains the final authority.
    ///
    /// # Errors
    ///
    /// Returns [`CommentThreadError::Repository`] when the store rejects
    /// the delete.
    pub async fn delete(&self, id: CommentId) -> CommentThreadResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Returns all comments on the given task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CommentThreadError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_task(&self, task_id: TaskId) -> CommentThreadResult<Vec<Comment>> {
        Ok(self.repository.find_by_task(task_id).await?)
    }
}
