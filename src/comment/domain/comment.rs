//! Comment aggregate and its validated text.

use super::CommentDomainError;
use crate::identity::domain::{DisplayName, EmailAddress, UserProfile};
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Creates a new random comment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a comment identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-authored comment text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentBody(String);

impl CommentBody {
    /// Creates validated comment text.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyBody`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CommentDomainError::EmptyBody);
        }
        Ok(Self(raw))
    }

    /// Returns the stored text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Comment attached to a public task.
///
/// Author identity is captured once at creation time and never
/// re-resolved against the identity provider. Serialises with the
/// store's collection field names (`comment`, `taskId`, `user`, `name`,
/// `created`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    #[serde(rename = "comment")]
    body: CommentBody,
    #[serde(rename = "taskId")]
    task_id: TaskId,
    #[serde(rename = "user")]
    author_email: EmailAddress,
    #[serde(rename = "name")]
    author_name: DisplayName,
    #[serde(rename = "created")]
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment on the given task, authored by the given
    /// profile.
    #[must_use]
    pub fn new(task_id: TaskId, author: &UserProfile, body: CommentBody, clock: &impl Clock) -> Self {
        Self {
            id: CommentId::new(),
            body,
            task_id,
            author_email: author.email().clone(),
            author_name: author.name().clone(),
            created_at: clock.utc(),
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn body(&self) -> &CommentBody {
        &self.body
    }

    /// Returns the owning task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author's stable user key.
    #[must_use]
    pub const fn author_email(&self) -> &EmailAddress {
        &self.author_email
    }

    /// Returns the author's display name as captured at creation.
    #[must_use]
    pub const fn author_name(&self) -> &DisplayName {
        &self.author_name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the given user key authored this comment.
    ///
    /// This check gates the delete affordance in the view; it is
    /// advisory, not a security boundary.
    #[must_use]
    pub fn authored_by(&self, email: &EmailAddress) -> bool {
        &self.author_email == email
    }
}
