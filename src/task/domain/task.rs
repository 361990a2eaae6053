//! Task aggregate root.

use super::{TaskBody, TaskId};
use crate::identity::domain::EmailAddress;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Serialises with the store's collection field names (`tarefa`, `user`,
/// `public`, `created`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(rename = "tarefa")]
    body: TaskBody,
    #[serde(rename = "user")]
    owner: EmailAddress,
    #[serde(rename = "public")]
    is_public: bool,
    #[serde(rename = "created")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by the given user.
    ///
    /// `created_at` is stamped once from the clock and never changes; the
    /// owner is likewise immutable after creation.
    #[must_use]
    pub fn new(body: TaskBody, owner: EmailAddress, is_public: bool, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            body,
            owner,
            is_public,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn body(&self) -> &TaskBody {
        &self.body
    }

    /// Returns the owning user's key.
    #[must_use]
    pub const fn owner(&self) -> &EmailAddress {
        &self.owner
    }

    /// Returns whether the task is visible to non-owners via direct link.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.is_public
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
