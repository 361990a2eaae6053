//! In-memory task repository with live owner-scoped queries.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::watch;

use crate::identity::domain::EmailAddress;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskFeed, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Stands in for the hosted document store: every mutation republishes
/// the affected owner's full ordered list to that owner's live feeds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    feeds: HashMap<EmailAddress, watch::Sender<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns the owner's tasks ordered by creation time descending.
fn owned_snapshot(state: &InMemoryTaskState, owner: &EmailAddress) -> Vec<Task> {
    let mut list: Vec<Task> = state
        .tasks
        .values()
        .filter(|task| task.owner() == owner)
        .cloned()
        .collect();
    list.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    list
}

/// Replaces the owner's published list, pruning the feed once every
/// handle has been dropped.
fn publish(state: &mut InMemoryTaskState, owner: &EmailAddress) {
    let is_closed = match state.feeds.get(owner) {
        None => return,
        Some(sender) => sender.is_closed(),
    };
    if is_closed {
        state.feeds.remove(owner);
        return;
    }

    let snapshot = owned_snapshot(state, owner);
    if let Some(sender) = state.feeds.get(owner) {
        sender.send_replace(snapshot);
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        publish(&mut state, task.owner());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if let Some(removed) = state.tasks.remove(&id) {
            publish(&mut state, removed.owner());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn watch_owned(&self, owner: &EmailAddress) -> TaskRepositoryResult<TaskFeed> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let receiver = match state.feeds.get(owner) {
            Some(sender) if !sender.is_closed() => sender.subscribe(),
            _ => {
                let snapshot = owned_snapshot(&state, owner);
                let (sender, receiver) = watch::channel(snapshot);
                state.feeds.insert(owner.clone(), sender);
                receiver
            }
        };
        Ok(TaskFeed::new(receiver))
    }
}
