//! Service layer for the task board: creation, deletion, and live lists.

use crate::identity::domain::EmailAddress;
use crate::task::{
    domain::{Task, TaskBody, TaskDomainError, TaskId},
    ports::{TaskFeed, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    share_base_url: String,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    ///
    /// `share_base_url` is the prefix of canonical share links; a trailing
    /// slash is tolerated and stripped.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, share_base_url: impl Into<String>) -> Self {
        let mut share_base_url = share_base_url.into();
        while share_base_url.ends_with('/') {
            share_base_url.pop();
        }
        Self {
            repository,
            clock,
            share_base_url,
        }
    }

    /// Creates a new task owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the text is empty and
    /// [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        owner: EmailAddress,
        text: impl Into<String> + Send,
        is_public: bool,
    ) -> TaskBoardResult<Task> {
        let body = TaskBody::new(text)?;
        let task = Task::new(body, owner, is_public, &*self.clock);
        self.repository.insert(&task).await?;
        Ok(task)
    }

    /// Deletes a task by identifier, unconditionally.
    ///
    /// Ownership is not checked here and comments referencing the task are
    /// left in place; access enforcement belongs to the store's rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store rejects the
    /// delete.
    pub async fn delete(&self, id: TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup
    /// fails.
    pub async fn find(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Opens a live query over the owner's tasks, newest first.
    ///
    /// The returned feed must be dropped when the consuming view goes
    /// away; dropping it releases the store-side listener.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store rejects the
    /// subscription.
    pub async fn watch_owned(&self, owner: &EmailAddress) -> TaskBoardResult<TaskFeed> {
        Ok(self.repository.watch_owned(owner).await?)
    }

    /// Returns the canonical public URL for a task.
    #[must_use]
    pub fn share_url(&self, id: TaskId) -> String {
        format!("{}/task/{id}", self.share_base_url)
    }
}
