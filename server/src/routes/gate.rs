//! Request gate for the protected dashboard area.
//!
//! ARCHITECTURE
//! ============
//! The gate runs before any page code and checks only that a session-token
//! cookie exists, through the same `has_session_evidence` predicate the
//! client-side guard builds on. It never validates the token against the
//! backend — a stale token still reaches the page, where the route guard
//! and the API's 401s remain the authority. This keeps the gate a coarse
//! filter that avoids shipping protected markup to obviously-unauthenticated
//! requests.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use models::session::{TOKEN_COOKIE, has_session_evidence};

use crate::state::AppState;

/// Middleware gating navigation to the protected path prefix.
pub async fn edge_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if state.gate.protects(path) {
        let token = jar.get(TOKEN_COOKIE).map(Cookie::value);
        if !has_session_evidence(token) {
            return Redirect::temporary(&login_redirect(path)).into_response();
        }
    }
    next.run(request).await
}

/// Login URL carrying the originally requested path as a return-to target.
pub(crate) fn login_redirect(path: &str) -> String {
    format!("/login?redirect={path}")
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
