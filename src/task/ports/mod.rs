//! Port contracts for the task context.

mod repository;

pub use repository::{
    TaskFeed, TaskFeedClosed, TaskRepository, TaskRepositoryError, TaskRepositoryResult,
};
