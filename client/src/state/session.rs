//! Session context provider — the single owner of authentication state.
//!
//! ARCHITECTURE
//! ============
//! One `RwSignal<SessionState>` is created at application start and provided
//! via context; every other component reads it and mutates it only through
//! the actions here. The state machine is Initializing (loading) →
//! Authenticated | Unauthenticated, re-enterable for the lifetime of the
//! tab. Transition decisions are pure functions so they stay testable off
//! the browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use models::session::{SessionPolicy, StoredSession};
use models::{ApiError, User};

/// Authentication state for the current browser tab.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// `true` until the mount-time session check resolves. Guards must
    /// suppress both content and redirects while this holds.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// What a protected view should do for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still initializing: show the neutral placeholder, no redirect.
    Wait,
    /// Resolved unauthenticated: redirect to login, render nothing.
    Redirect,
    /// Resolved authenticated: render the protected content.
    Render,
}

#[must_use]
pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Wait
    } else if state.user.is_none() {
        GuardDecision::Redirect
    } else {
        GuardDecision::Render
    }
}

/// Outcome of revalidating a cached session against the profile endpoint.
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyOutcome {
    /// The backend confirmed the session and returned a fresh profile.
    Confirmed(User),
    /// The backend answered 401: the cached session is dead.
    Rejected,
    /// No response at all; distinct from rejection by design.
    Unreachable,
}

/// Decide the post-check user from the cached session, the verification
/// outcome, and the offline policy. Expired or absent cache always loses.
#[must_use]
pub fn resolve_session(
    cached: Option<StoredSession>,
    outcome: &VerifyOutcome,
    policy: SessionPolicy,
    now: i64,
) -> Option<User> {
    let cached = cached.filter(|s| s.is_valid_at(now))?;
    match outcome {
        VerifyOutcome::Confirmed(user) => Some(user.clone()),
        VerifyOutcome::Rejected => None,
        VerifyOutcome::Unreachable => {
            policy.trust_cache_on_network_error.then_some(cached.user)
        }
    }
}

/// Resolve session state on provider mount: read the store, optionally
/// revalidate upstream, and settle into Authenticated or Unauthenticated.
pub async fn check_auth(session: RwSignal<SessionState>) {
    let now = crate::util::session_store::now_unix();
    let cached = crate::util::session_store::read().filter(|s| s.is_valid_at(now));
    let Some(cached) = cached else {
        // Invalid local data is dropped silently, never surfaced.
        crate::util::session_store::clear();
        session.set(SessionState { user: None, loading: false });
        return;
    };

    let outcome = match crate::net::api::fetch_profile().await {
        Ok(user) => VerifyOutcome::Confirmed(user),
        Err(ApiError::Unauthorized) => VerifyOutcome::Rejected,
        Err(_) => VerifyOutcome::Unreachable,
    };

    let user = resolve_session(Some(cached), &outcome, SessionPolicy::default(), now);
    if user.is_none() {
        crate::util::session_store::clear();
    }
    session.set(SessionState { user, loading: false });
}

/// Log in and establish the session.
///
/// On success the session is persisted and a full-page navigation to
/// `redirect_to` is issued so the next server render sees the fresh
/// cookies.
///
/// # Errors
///
/// `AuthenticationFailed` and `NetworkUnavailable` are surfaced for the
/// login form to display; existing session state is left untouched.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
    redirect_to: &str,
) -> Result<(), ApiError> {
    let payload = crate::net::api::login(email, password).await?;
    let now = crate::util::session_store::now_unix();
    let stored = StoredSession::new(
        payload.user.clone(),
        payload.token.unwrap_or_default(),
        now,
    );
    crate::util::session_store::write(&stored);
    session.set(SessionState { user: Some(payload.user), loading: false });
    crate::util::nav::force_navigate(redirect_to);
    Ok(())
}

/// Log out: best-effort server call, then unconditional local teardown.
/// Never fails from the caller's perspective, even offline.
pub async fn logout(session: RwSignal<SessionState>) {
    crate::net::api::logout().await;
    crate::util::session_store::clear();
    session.set(SessionState { user: None, loading: false });
    crate::util::nav::force_navigate("/login");
}

/// Backstop for a 401 on any authenticated call: clear everything and
/// return to the login page.
pub fn handle_unauthorized(session: RwSignal<SessionState>) {
    crate::util::session_store::clear();
    session.set(SessionState { user: None, loading: false });
    crate::util::nav::force_navigate("/login");
}
