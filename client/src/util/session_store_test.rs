use models::session::SESSION_TTL_SECONDS;

use super::*;

#[test]
fn cookie_attributes_cover_lifetime_path_and_same_site() {
    assert_eq!(
        cookie_attributes(false, SESSION_TTL_SECONDS),
        "Max-Age=604800; Path=/; SameSite=Lax"
    );
}

#[test]
fn cookie_attributes_add_secure_on_tls() {
    let attrs = cookie_attributes(true, 0);
    assert!(attrs.ends_with("; Secure"));
    assert!(attrs.starts_with("Max-Age=0"));
}

#[test]
fn find_cookie_picks_the_named_pair() {
    let header = "theme=dark; user=%7B%22id%22%3A%22u1%22%7D; token=tok-1";
    assert_eq!(find_cookie(header, "token"), Some("tok-1"));
    assert_eq!(find_cookie(header, "user"), Some("%7B%22id%22%3A%22u1%22%7D"));
}

#[test]
fn find_cookie_requires_exact_name_match() {
    let header = "usermeta=x; token2=y";
    assert_eq!(find_cookie(header, "user"), None);
    assert_eq!(find_cookie(header, "token"), None);
}

#[test]
fn find_cookie_tolerates_spacing_and_empty_values() {
    assert_eq!(find_cookie("  token=abc ;user=", "user"), Some(""));
    assert_eq!(find_cookie("", "user"), None);
    assert_eq!(find_cookie("flag", "flag"), None);
}

#[test]
fn value_may_contain_equals_signs() {
    assert_eq!(find_cookie("token=a=b=c", "token"), Some("a=b=c"));
}

#[test]
fn native_reads_are_always_absent() {
    // Off the browser there is no cookie jar; the store reports no session
    // rather than erroring.
    assert!(read().is_none());
}
