//! Validated identity scalars, user profiles, and session state.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated email address used as the stable user key.
///
/// Task ownership and comment authorship are recorded against this value;
/// it never changes for a given user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidEmail`] if the value does not
    /// contain exactly one `@` with non-empty local and domain parts.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the email address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated human-readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Creates a validated display name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyDisplayName`] if the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(IdentityDomainError::EmptyDisplayName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the display name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    email: EmailAddress,
    name: DisplayName,
}

impl UserProfile {
    /// Creates a profile from validated parts.
    #[must_use]
    pub const fn new(email: EmailAddress, name: DisplayName) -> Self {
        Self { email, name }
    }

    /// Returns the stable user key.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &DisplayName {
        &self.name
    }
}

/// An authenticated session for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    profile: UserProfile,
}

impl Session {
    /// Creates a session for the given profile.
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self { profile }
    }

    /// Returns the signed-in user's profile.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

/// Session state as observed by the view layer.
///
/// The header affordance is a pure function of this value: `Loading`
/// renders nothing, `Authenticated` renders the greeting and sign-out
/// action, `Anonymous` renders the sign-in action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Session resolution has not completed yet.
    Loading,
    /// A user is signed in.
    Authenticated(Session),
    /// No user is signed in.
    Anonymous,
}

impl SessionState {
    /// Returns the session when a user is signed in.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Loading | Self::Anonymous => None,
        }
    }
}
