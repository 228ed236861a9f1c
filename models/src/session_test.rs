use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role: "admin".to_owned(),
    }
}

#[test]
fn new_session_expires_seven_days_out() {
    let session = StoredSession::new(sample_user(), "tok".to_owned(), 1_000);
    assert_eq!(session.issued_at, 1_000);
    assert_eq!(session.expires_at, 1_000 + SESSION_TTL_SECONDS);
}

#[test]
fn round_trip_preserves_identity_fields() {
    let session = StoredSession::new(sample_user(), "tok-1".to_owned(), 50);
    let encoded = encode_stored(&session).unwrap();
    let decoded = decode_stored(&encoded).unwrap();
    assert_eq!(decoded.user.id, "u1");
    assert_eq!(decoded.user.email, "ada@example.com");
    assert_eq!(decoded.token, "tok-1");
}

#[test]
fn expired_session_is_never_valid() {
    let mut session = StoredSession::new(sample_user(), "tok".to_owned(), 0);
    session.expires_at = 99;
    assert!(!session.is_valid_at(99));
    assert!(!session.is_valid_at(100));
    assert!(session.is_valid_at(98));
}

#[test]
fn empty_token_with_unexpired_profile_still_valid() {
    // Cookie-set deployments cannot mirror the HttpOnly token client-side.
    let session = StoredSession::new(sample_user(), String::new(), 0);
    assert!(session.is_valid_at(10));
}

#[test]
fn session_without_user_id_is_absent() {
    let mut user = sample_user();
    user.id = String::new();
    let session = StoredSession::new(user, "tok".to_owned(), 0);
    assert!(!session.is_valid_at(10));

    let encoded = encode_stored(&session).unwrap();
    assert!(decode_stored(&encoded).is_none());
}

#[test]
fn decode_stored_drops_malformed_json_silently() {
    assert!(decode_stored("{not json").is_none());
    assert!(decode_stored("").is_none());
    assert!(decode_stored(r#"{"user":{"id":"u1"}}"#).is_none());
}

#[test]
fn has_session_evidence_requires_non_blank_token() {
    assert!(has_session_evidence(Some("abc")));
    assert!(!has_session_evidence(Some("")));
    assert!(!has_session_evidence(Some("   ")));
    assert!(!has_session_evidence(None));
}

#[test]
fn policy_defaults_to_trusting_cache_offline() {
    assert!(SessionPolicy::default().trust_cache_on_network_error);
}
