//! Cookie-backed session store.
//!
//! DESIGN
//! ======
//! The session is persisted in the non-HttpOnly `user` cookie (profile +
//! token + expiry timestamps) and, for body-token deployments, mirrored
//! into the `token` cookie the request gate reads. Reads treat malformed
//! data as absent; nothing here surfaces an error to the page. Operations
//! are synchronous and scoped to this tab's cookie jar — last writer wins
//! across tabs.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use models::session::StoredSession;
#[cfg(feature = "hydrate")]
use models::session::{SESSION_TTL_SECONDS, TOKEN_COOKIE, USER_COOKIE};

/// Current unix time in seconds (browser clock; 0 on the server, where the
/// store is never consulted).
#[must_use]
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = (js_sys::Date::now() / 1000.0) as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Persist the session: the `user` cookie always, the `token` cookie only
/// when the token is client-visible.
pub fn write(stored: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(encoded) = models::session::encode_stored(stored) else {
            return;
        };
        let value = js_sys::encode_uri_component(&encoded);
        let attrs = cookie_attributes(secure_context(), SESSION_TTL_SECONDS);
        set_cookie(&format!("{USER_COOKIE}={value}; {attrs}"));
        if !stored.token.is_empty() {
            set_cookie(&format!("{TOKEN_COOKIE}={}; {attrs}", stored.token));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = stored;
    }
}

/// Read the stored session, if structurally valid. Expiry against the
/// clock is the caller's concern via `StoredSession::is_valid_at`.
#[must_use]
pub fn read() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let header = cookie_header()?;
        let raw = find_cookie(&header, USER_COOKIE)?;
        let decoded = js_sys::decode_uri_component(raw).ok()?;
        models::session::decode_stored(&String::from(decoded))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Expire both session cookies immediately.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let attrs = cookie_attributes(secure_context(), 0);
        set_cookie(&format!("{USER_COOKIE}=; {attrs}"));
        set_cookie(&format!("{TOKEN_COOKIE}=; {attrs}"));
    }
}

// =============================================================================
// Pure cookie-string helpers (shared with tests)
// =============================================================================

/// Attribute suffix for a session cookie: bounded lifetime, lax same-site
/// (top-level navigation works, cross-site leakage does not), secure on
/// TLS.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_attributes(secure: bool, max_age: i64) -> String {
    let mut attrs = format!("Max-Age={max_age}; Path=/; SameSite=Lax");
    if secure {
        attrs.push_str("; Secure");
    }
    attrs
}

/// Find `name` in a cookie header, returning its raw (still-encoded) value.
#[cfg(any(test, feature = "hydrate"))]
fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

// =============================================================================
// Browser glue (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn cookie_header() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn set_cookie(value: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(value);
    }
}

#[cfg(feature = "hydrate")]
fn secure_context() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|protocol| protocol == "https:")
}
