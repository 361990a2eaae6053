//! Browser session plumbing: the session cookie and its resolution.

use crate::identity::domain::SessionState;
use crate::identity::ports::{IdentityProvider, SessionToken};
use axum::http::{HeaderMap, header};

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "quadro_session";

/// Extracts the session token from the request's `Cookie` header.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<SessionToken> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| SessionToken::new(value))
    })
}

/// Resolves the request's session state through the identity provider.
///
/// Provider failures are logged and degrade to [`SessionState::Anonymous`];
/// they never surface to the end user.
pub async fn resolve_session(identity: &dyn IdentityProvider, headers: &HeaderMap) -> SessionState {
    let Some(token) = session_token(headers) else {
        return SessionState::Anonymous;
    };
    match identity.session(&token).await {
        Ok(Some(session)) => SessionState::Authenticated(session),
        Ok(None) => SessionState::Anonymous,
        Err(error) => {
            tracing::error!(%error, "session lookup failed");
            SessionState::Anonymous
        }
    }
}

/// Builds the `Set-Cookie` value establishing a session.
#[must_use]
pub fn session_cookie(token: &SessionToken) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        token.as_str()
    )
}

/// Builds the `Set-Cookie` value clearing the session.
#[must_use]
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
