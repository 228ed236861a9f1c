//! Auth routes — login/logout proxying and session revalidation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upstream backend owns credentials and token issuance. These handlers
//! forward, normalize the loosely-shaped auth responses once at the
//! boundary, and manage the browser-visible cookie pair. Both deployment
//! variants are supported: token-in-body (we set the HttpOnly cookie) and
//! token-via-Set-Cookie (we relay the backend's headers untouched).

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use models::session::{SESSION_TTL_SECONDS, TOKEN_COOKIE, USER_COOKIE};
use serde::Deserialize;
use time::Duration;

use crate::services::upstream::UpstreamError;
use crate::state::AppState;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .build()
}

fn expired_cookie(name: &'static str, http_only: bool, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(http_only)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "success": false, "message": message }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — forward credentials upstream, set cookies.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let email = req.email.trim().to_owned();
    if email.is_empty() || req.password.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "email and password are required");
    }

    let outcome = match state.upstream.login(&email, &req.password).await {
        Ok(outcome) => outcome,
        Err(UpstreamError::Rejected(message)) => {
            return failure(StatusCode::UNAUTHORIZED, &message);
        }
        Err(err @ UpstreamError::Shape(_)) => {
            tracing::error!(error = %err, "login response not understood");
            return failure(StatusCode::BAD_GATEWAY, "unexpected response from auth backend");
        }
        Err(UpstreamError::Unreachable(err)) => {
            tracing::error!(error = %err, "auth backend unreachable");
            return failure(StatusCode::BAD_GATEWAY, "auth backend unreachable");
        }
    };

    let secure = cookie_secure();
    let mut jar = CookieJar::new();
    if let Some(token) = &outcome.payload.token {
        jar = jar.add(session_cookie(token.clone(), secure));
    }

    // Cookie-set deployments: relay the backend's own Set-Cookie headers.
    let mut relayed = HeaderMap::new();
    for raw in &outcome.set_cookies {
        if let Ok(value) = HeaderValue::from_str(raw) {
            relayed.append(header::SET_COOKIE, value);
        }
    }

    let body = serde_json::json!({
        "success": true,
        "message": outcome.message,
        "data": { "user": outcome.payload.user, "token": outcome.payload.token },
    });
    (jar, relayed, Json(body)).into_response()
}

/// `POST /api/auth/logout` — best-effort upstream call, then always expire
/// the cookie pair. Logout succeeds locally even when the backend is down.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cookie_header = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    if let Err(err) = state.upstream.logout(cookie_header).await {
        tracing::warn!(error = %err, "upstream logout failed; clearing cookies anyway");
    }

    let secure = cookie_secure();
    let jar = CookieJar::new()
        .add(expired_cookie(TOKEN_COOKIE, true, secure))
        .add(expired_cookie(USER_COOKIE, false, secure));
    (jar, Json(serde_json::json!({ "success": true, "message": "Logged out" })))
}

/// `GET /api/auth/profile` — revalidate the session cookie upstream.
///
/// The 401 passthrough is the client's sole invalidation signal; any other
/// failure maps to 502 so the client can fall back on its cached session.
pub async fn profile(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie_header = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());
    match state.upstream.profile(cookie_header).await {
        Ok(Some(user)) => {
            Json(serde_json::json!({ "success": true, "data": { "user": user } })).into_response()
        }
        Ok(None) => failure(StatusCode::UNAUTHORIZED, "session is no longer valid"),
        Err(UpstreamError::Rejected(message)) => {
            tracing::warn!(message = %message, "profile check rejected upstream");
            failure(StatusCode::BAD_GATEWAY, &message)
        }
        Err(err) => {
            tracing::warn!(error = %err, "profile check failed");
            failure(StatusCode::BAD_GATEWAY, "auth backend unreachable")
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
