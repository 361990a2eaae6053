//! Port contracts for the identity context.

mod provider;

pub use provider::{
    IdentityProvider, IdentityProviderError, IdentityProviderResult, SessionToken, SignedIn,
};
