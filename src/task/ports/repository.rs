//! Repository port for task persistence, lookup, and live queries.

use crate::identity::domain::EmailAddress;
use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes a task by identifier, unconditionally.
    ///
    /// Deleting an unknown identifier is a no-op; comments referencing the
    /// task are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on store failure.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Opens a live query over the given owner's tasks.
    ///
    /// The feed always holds the owner's full task list ordered by
    /// creation time descending; every store mutation affecting the owner
    /// replaces the list wholesale.
    async fn watch_owned(&self, owner: &EmailAddress) -> TaskRepositoryResult<TaskFeed>;
}

/// Cancellable handle over a live task query.
///
/// Dropping the feed releases its listener; the repository stops
/// publishing to it once no handles remain.
#[derive(Debug)]
pub struct TaskFeed {
    receiver: watch::Receiver<Vec<Task>>,
}

impl TaskFeed {
    /// Wraps a watch receiver produced by a repository.
    #[must_use]
    pub const fn new(receiver: watch::Receiver<Vec<Task>>) -> Self {
        Self { receiver }
    }

    /// Returns the current full result list, newest first.
    #[must_use]
    pub fn current(&self) -> Vec<Task> {
        self.receiver.borrow().clone()
    }

    /// Waits until the result list has been replaced.
    ///
    /// After this resolves, [`TaskFeed::current`] returns the complete new
    /// list; deliveries are never incremental diffs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFeedClosed`] when the repository side has gone away.
    pub async fn changed(&mut self) -> Result<(), TaskFeedClosed> {
        self.receiver.changed().await.map_err(|_| TaskFeedClosed)
    }
}

/// The repository side of a task feed has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task feed closed")]
pub struct TaskFeedClosed;

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
