//! Domain model for the task collection.
//!
//! Tasks are flat records: user-authored text, an owner key, a public
//! flag, and a creation timestamp used only for ordering. Lifecycle is
//! create-then-optionally-delete; no update surface exists.

mod body;
mod error;
mod ids;
mod task;

pub use body::TaskBody;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::Task;
