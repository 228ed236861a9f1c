//! Response-envelope normalization for the upstream REST backend.
//!
//! DESIGN
//! ======
//! The backend wraps payloads inconsistently across deployments:
//! `{success, message, data: {user, token}}` in one variant, a bare
//! `{user, token}` in another, and the same drift repeats for `blogs`,
//! `blog`, `projects`, and so on. Everything entering the system is
//! normalized here, once, into canonical types. A body that matches no
//! known variant is an explicit [`EnvelopeError::UnrecognizedShape`] —
//! never a silent empty default.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::User;

/// Error raised when a response body cannot be normalized.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// The body matched none of the known nestings for `key`.
    #[error("response did not match any known shape for `{key}`")]
    UnrecognizedShape { key: String },
}

/// Canonical result of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginPayload {
    pub user: User,
    /// Present when the backend returns the token in the body; absent when
    /// the session cookie is set via `Set-Cookie` instead.
    pub token: Option<String>,
}

/// Read the `success` flag, if the envelope carries one.
#[must_use]
pub fn success_flag(body: &Value) -> Option<bool> {
    body.get("success").and_then(Value::as_bool)
}

/// Read the human-readable `message`, if the envelope carries one.
#[must_use]
pub fn message(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}

/// Extract `key` from a response body, trying `data.key` then `key`.
///
/// # Errors
///
/// Returns [`EnvelopeError::UnrecognizedShape`] when neither nesting is
/// present or the value fails to deserialize as `T`.
pub fn extract<T: DeserializeOwned>(body: &Value, key: &str) -> Result<T, EnvelopeError> {
    let candidate = body
        .get("data")
        .and_then(|data| data.get(key))
        .or_else(|| body.get(key));

    candidate
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .ok_or_else(|| EnvelopeError::UnrecognizedShape { key: key.to_owned() })
}

/// Normalize a login response into a [`LoginPayload`].
///
/// Accepts `{data: {user, token}}`, `{user, token}`, and either of those
/// with the token omitted (cookie-set deployments).
///
/// # Errors
///
/// Returns [`EnvelopeError::UnrecognizedShape`] when no user can be found.
pub fn login_payload(body: &Value) -> Result<LoginPayload, EnvelopeError> {
    let user: User = extract(body, "user")?;
    let token = body
        .get("data")
        .and_then(|data| data.get("token"))
        .or_else(|| body.get("token"))
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_owned);
    Ok(LoginPayload { user, token })
}

/// Normalize a profile-check response into a [`User`].
///
/// Accepts `{data: {user}}`, `{user}`, and a bare user object.
///
/// # Errors
///
/// Returns [`EnvelopeError::UnrecognizedShape`] when no user can be found.
pub fn profile_payload(body: &Value) -> Result<User, EnvelopeError> {
    if let Ok(user) = extract::<User>(body, "user") {
        return Ok(user);
    }
    serde_json::from_value(body.clone())
        .map_err(|_| EnvelopeError::UnrecognizedShape { key: "user".to_owned() })
}
