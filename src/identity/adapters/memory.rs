//! In-memory identity provider standing in for the hosted OAuth service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{Session, UserProfile},
    ports::{
        IdentityProvider, IdentityProviderError, IdentityProviderResult, SessionToken, SignedIn,
    },
};

/// Upstream provider name accepted by the in-memory adapter.
const SUPPORTED_PROVIDER: &str = "google";

/// Thread-safe in-memory identity provider.
///
/// Signs every request in as one configured profile and keeps the token
/// map locally. Used by the server binary as the hosted-service stand-in
/// and by tests.
#[derive(Debug, Clone)]
pub struct InMemoryIdentityProvider {
    profile: UserProfile,
    state: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl InMemoryIdentityProvider {
    /// Creates a provider that signs in as the given profile.
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            state: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn session(&self, token: &SessionToken) -> IdentityProviderResult<Option<Session>> {
        let state = self.state.read().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(token).cloned())
    }

    async fn sign_in(&self, provider_name: &str) -> IdentityProviderResult<SignedIn> {
        if provider_name != SUPPORTED_PROVIDER {
            return Err(IdentityProviderError::UnsupportedProvider(
                provider_name.to_owned(),
            ));
        }

        let token = SessionToken::issue();
        let session = Session::new(self.profile.clone());
        let mut state = self.state.write().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        state.insert(token.clone(), session.clone());
        Ok(SignedIn { token, session })
    }

    async fn sign_out(&self, token: &SessionToken) -> IdentityProviderResult<()> {
        let mut state = self.state.write().map_err(|err| {
            IdentityProviderError::provider(std::io::Error::other(err.to_string()))
        })?;
        state.remove(token);
        Ok(())
    }
}
