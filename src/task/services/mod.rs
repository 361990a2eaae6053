//! Orchestration services for the task context.

mod board;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
