//! Identity provider port wrapping the hosted session service.

use crate::identity::domain::Session;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for identity provider operations.
pub type IdentityProviderResult<T> = Result<T, IdentityProviderError>;

/// Opaque bearer value identifying a browser session.
///
/// Carried in the session cookie; only the identity provider can resolve
/// it back to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wraps an existing token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Issues a fresh random token.
    #[must_use]
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a successful sign-in: the issued token plus its session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    /// Token to hand back to the browser.
    pub token: SessionToken,
    /// The session the token resolves to.
    pub session: Session,
}

/// Session and sign-in/out contract of the hosted identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a token to its session.
    ///
    /// Returns `None` when the token is unknown or has been signed out.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Provider`] when the hosted service
    /// cannot be reached.
    async fn session(&self, token: &SessionToken) -> IdentityProviderResult<Option<Session>>;

    /// Starts a session through the named upstream provider.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::UnsupportedProvider`] for unknown
    /// provider names, or [`IdentityProviderError::Provider`] for service
    /// failures.
    async fn sign_in(&self, provider_name: &str) -> IdentityProviderResult<SignedIn>;

    /// Ends the session behind the token.
    ///
    /// Signing out an unknown token is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Provider`] when the hosted service
    /// cannot be reached.
    async fn sign_out(&self, token: &SessionToken) -> IdentityProviderResult<()>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    /// The upstream provider name is not configured.
    #[error("unsupported sign-in provider: {0}")]
    UnsupportedProvider(String),

    /// Hosted-service failure.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityProviderError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
