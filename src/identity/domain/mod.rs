//! Domain model for user identity and sessions.
//!
//! Identity itself lives with the external provider; this module only
//! models what the application observes: validated user keys, profiles,
//! and the per-request session state.

mod error;
mod profile;

pub use error::IdentityDomainError;
pub use profile::{DisplayName, EmailAddress, Session, SessionState, UserProfile};
