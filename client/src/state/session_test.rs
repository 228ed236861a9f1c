use models::User;
use models::session::SESSION_TTL_SECONDS;

use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: id.to_owned(),
        role: "admin".to_owned(),
    }
}

fn cached_at(now: i64) -> StoredSession {
    StoredSession::new(user("cached"), "tok".to_owned(), now)
}

fn trusting() -> SessionPolicy {
    SessionPolicy { trust_cache_on_network_error: true }
}

fn strict() -> SessionPolicy {
    SessionPolicy { trust_cache_on_network_error: false }
}

// =============================================================================
// guard_decision — the route-guard state machine.
// =============================================================================

#[test]
fn initializing_state_waits_without_redirecting() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(guard_decision(&state), GuardDecision::Wait);
}

#[test]
fn resolved_unauthenticated_redirects() {
    let state = SessionState { user: None, loading: false };
    assert_eq!(guard_decision(&state), GuardDecision::Redirect);
}

#[test]
fn resolved_authenticated_renders() {
    let state = SessionState { user: Some(user("u1")), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

// =============================================================================
// resolve_session — cache vs verification vs policy.
// =============================================================================

#[test]
fn confirmed_outcome_uses_the_fresh_profile() {
    let outcome = VerifyOutcome::Confirmed(user("fresh"));
    let resolved = resolve_session(Some(cached_at(0)), &outcome, trusting(), 10);
    assert_eq!(resolved.unwrap().id, "fresh");
}

#[test]
fn rejected_outcome_clears_even_a_valid_cache() {
    let resolved = resolve_session(Some(cached_at(0)), &VerifyOutcome::Rejected, trusting(), 10);
    assert!(resolved.is_none());
}

#[test]
fn unreachable_trusts_cache_under_default_policy() {
    let resolved =
        resolve_session(Some(cached_at(0)), &VerifyOutcome::Unreachable, trusting(), 10);
    assert_eq!(resolved.unwrap().id, "cached");
}

#[test]
fn unreachable_drops_cache_under_strict_policy() {
    let resolved =
        resolve_session(Some(cached_at(0)), &VerifyOutcome::Unreachable, strict(), 10);
    assert!(resolved.is_none());
}

#[test]
fn expired_cache_never_resolves_regardless_of_outcome() {
    let now_past_expiry = SESSION_TTL_SECONDS + 1;
    let confirmed = VerifyOutcome::Confirmed(user("fresh"));
    assert!(resolve_session(Some(cached_at(0)), &confirmed, trusting(), now_past_expiry).is_none());
    assert!(
        resolve_session(Some(cached_at(0)), &VerifyOutcome::Unreachable, trusting(), now_past_expiry)
            .is_none()
    );
}

#[test]
fn absent_cache_never_resolves() {
    let confirmed = VerifyOutcome::Confirmed(user("fresh"));
    assert!(resolve_session(None, &confirmed, trusting(), 0).is_none());
}
