use super::*;
use crate::state::test_helpers::test_app_state;

// Port 1 is never listening, so upstream calls fail fast without a mock.
const DEAD_UPSTREAM: &str = "http://127.0.0.1:1";

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_recognizes_truthy_and_falsy_spellings() {
    for (i, (val, expected)) in [("1", true), ("yes", true), ("0", false), ("off", false)]
        .iter()
        .enumerate()
    {
        let key = format!("__TEST_AUTH_EB_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(*expected), "value {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_unset_or_invalid_returns_none() {
    assert_eq!(env_bool("__TEST_AUTH_EB_UNSET_77__"), None);

    let key = "__TEST_AUTH_EB_INVALID_78__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// cookie construction
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax_and_seven_days() {
    let cookie = session_cookie("tok-1".to_owned(), true);
    assert_eq!(cookie.name(), "token");
    assert_eq!(cookie.value(), "tok-1");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn expired_cookie_has_zero_max_age() {
    let cookie = expired_cookie(USER_COOKIE, false, false);
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(false));
    assert_eq!(cookie.value(), "");
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn login_rejects_blank_credentials_without_calling_upstream() {
    let state = test_app_state(DEAD_UPSTREAM);
    let resp = login(
        State(state.clone()),
        Json(LoginRequest { email: "   ".to_owned(), password: "pw".to_owned() }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = login(
        State(state),
        Json(LoginRequest { email: "a@b.co".to_owned(), password: String::new() }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_maps_unreachable_backend_to_bad_gateway() {
    let resp = login(
        State(test_app_state(DEAD_UPSTREAM)),
        Json(LoginRequest { email: "a@b.co".to_owned(), password: "pw".to_owned() }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn logout_clears_both_cookies_even_when_backend_is_down() {
    let resp = logout(State(test_app_state(DEAD_UPSTREAM)), HeaderMap::new())
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let cleared: Vec<String> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.iter().any(|c| c.starts_with("token=")));
    assert!(cleared.iter().any(|c| c.starts_with("user=")));
    assert!(cleared.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn profile_maps_unreachable_backend_to_bad_gateway_not_401() {
    // An unreachable backend must stay distinguishable from an invalidated
    // session: the client only tears down on 401.
    let resp = profile(State(test_app_state(DEAD_UPSTREAM)), HeaderMap::new()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
