//! Stored-session model and the shared gating predicate.
//!
//! ARCHITECTURE
//! ============
//! Two layers gate the protected area: the server-side request gate (which
//! only sees the transport token cookie) and the client-side route guard
//! (which sees the full stored session). Both decide "is there a session
//! here" through [`has_session_evidence`] so the checks cannot drift apart;
//! the client layers expiry on top via [`StoredSession::is_valid_at`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::User;

/// Name of the opaque session-token cookie (HttpOnly when server-set).
pub const TOKEN_COOKIE: &str = "token";
/// Name of the client-readable cookie holding the serialized session.
pub const USER_COOKIE: &str = "user";
/// Fixed session lifetime: 7 days, matching the backend's token policy.
pub const SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// The session record persisted client-side after a successful login.
///
/// A session is either fully present (all fields populated, not expired) or
/// treated as absent; no partial session ever grants access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: User,
    /// Opaque server-issued token. Empty when the backend set the token as
    /// an HttpOnly cookie the client cannot read; the transport still
    /// carries it on every request.
    #[serde(default)]
    pub token: String,
    /// Unix seconds at login.
    pub issued_at: i64,
    /// Unix seconds after which the session is treated as absent.
    pub expires_at: i64,
}

impl StoredSession {
    /// Build a session issued at `now` with the fixed 7-day lifetime.
    #[must_use]
    pub fn new(user: User, token: String, now: i64) -> Self {
        Self { user, token, issued_at: now, expires_at: now + SESSION_TTL_SECONDS }
    }

    /// Full client-side validity: structural presence plus unexpired.
    ///
    /// Cookie-set deployments leave `token` empty client-side, so an empty
    /// token with an unexpired profile still counts as valid here; the
    /// backend's 401 remains the authority.
    #[must_use]
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expires_at > now && !self.user.id.is_empty()
    }
}

/// Shared gating predicate: a non-empty token value is evidence of a
/// session. The request gate applies this to the raw cookie; it is
/// deliberately coarse and never validates the token against the backend.
#[must_use]
pub fn has_session_evidence(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.trim().is_empty())
}

/// Decode a stored-session JSON string, silently treating malformed or
/// structurally incomplete data as absent.
#[must_use]
pub fn decode_stored(raw: &str) -> Option<StoredSession> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()
        .filter(|s| !s.user.id.is_empty())
}

/// Serialize a session for cookie storage.
///
/// # Errors
///
/// Returns the underlying serde error when the session cannot be encoded
/// (practically unreachable for these types).
pub fn encode_stored(session: &StoredSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(session)
}

/// Client policy knobs for session revalidation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionPolicy {
    /// When the profile revalidation call gets no response at all (as
    /// opposed to a 401), keep trusting the locally cached session instead
    /// of forcing a logout. Defaults to `true`: transient network loss must
    /// not strand an authenticated user, and a real invalidation still
    /// arrives as a 401 on the next API call.
    pub trust_cache_on_network_error: bool,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self { trust_cache_on_network_error: true }
    }
}
