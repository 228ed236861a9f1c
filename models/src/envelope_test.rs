use serde_json::json;

use super::*;
use crate::Blog;

fn user_value() -> serde_json::Value {
    json!({"id": "u1", "email": "a@b.co", "name": "Ada", "role": "admin"})
}

// =============================================================================
// login_payload — both observed nestings, with and without a body token.
// =============================================================================

#[test]
fn login_payload_nested_data_variant() {
    let body = json!({
        "success": true,
        "message": "Login successful",
        "data": {"user": user_value(), "token": "tok-123"}
    });
    let payload = login_payload(&body).unwrap();
    assert_eq!(payload.user.id, "u1");
    assert_eq!(payload.token.as_deref(), Some("tok-123"));
}

#[test]
fn login_payload_flat_variant() {
    let body = json!({"user": user_value(), "token": "tok-456"});
    let payload = login_payload(&body).unwrap();
    assert_eq!(payload.user.email, "a@b.co");
    assert_eq!(payload.token.as_deref(), Some("tok-456"));
}

#[test]
fn login_payload_without_body_token() {
    // Cookie-set deployments return the user alone.
    let body = json!({"success": true, "data": {"user": user_value()}});
    let payload = login_payload(&body).unwrap();
    assert!(payload.token.is_none());
}

#[test]
fn login_payload_empty_token_treated_as_absent() {
    let body = json!({"user": user_value(), "token": ""});
    assert!(login_payload(&body).unwrap().token.is_none());
}

#[test]
fn login_payload_unknown_shape_is_an_error() {
    let body = json!({"ok": true, "profile": user_value()});
    let err = login_payload(&body).unwrap_err();
    assert_eq!(err, EnvelopeError::UnrecognizedShape { key: "user".to_owned() });
}

// =============================================================================
// extract — generic entity unwrapping.
// =============================================================================

#[test]
fn extract_prefers_data_nesting() {
    let blog = json!({"id": "b1", "title": "T", "slug": "t", "content": "c", "published": true});
    let body = json!({"data": {"blog": blog.clone()}, "blog": {"id": "other"}});
    let parsed: Blog = extract(&body, "blog").unwrap();
    assert_eq!(parsed.id, "b1");
}

#[test]
fn extract_falls_back_to_top_level() {
    let body = json!({"blogs": [
        {"id": "b1", "title": "T", "slug": "t", "content": "c", "published": true}
    ]});
    let parsed: Vec<Blog> = extract(&body, "blogs").unwrap();
    assert_eq!(parsed.len(), 1);
}

#[test]
fn extract_rejects_missing_key() {
    let body = json!({"data": {}});
    let err = extract::<Vec<Blog>>(&body, "blogs").unwrap_err();
    assert_eq!(err, EnvelopeError::UnrecognizedShape { key: "blogs".to_owned() });
}

#[test]
fn extract_rejects_wrong_type_never_defaults_empty() {
    // A string where a list belongs must surface as a shape error, not as
    // an empty collection.
    let body = json!({"blogs": "not-a-list"});
    assert!(extract::<Vec<Blog>>(&body, "blogs").is_err());
}

// =============================================================================
// profile_payload / flags
// =============================================================================

#[test]
fn profile_payload_accepts_bare_user_object() {
    let user = profile_payload(&user_value()).unwrap();
    assert_eq!(user.name, "Ada");
}

#[test]
fn profile_payload_accepts_wrapped_user() {
    let body = json!({"data": {"user": user_value()}});
    assert_eq!(profile_payload(&body).unwrap().role, "admin");
}

#[test]
fn success_flag_and_message_read_when_present() {
    let body = json!({"success": false, "message": "Invalid credentials"});
    assert_eq!(success_flag(&body), Some(false));
    assert_eq!(message(&body).as_deref(), Some("Invalid credentials"));
}

#[test]
fn message_falls_back_to_error_key_and_skips_blank() {
    let body = json!({"error": "nope"});
    assert_eq!(message(&body).as_deref(), Some("nope"));

    let body = json!({"message": "   "});
    assert_eq!(message(&body), None);
}
