//! Error types for comment domain validation.

use thiserror::Error;

/// Errors returned while constructing domain comment values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyBody,
}
