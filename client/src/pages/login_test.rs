use super::*;

#[test]
fn redirect_target_defaults_to_dashboard() {
    assert_eq!(redirect_target(None), "/dashboard");
    assert_eq!(redirect_target(Some(String::new())), "/dashboard");
}

#[test]
fn redirect_target_honors_same_site_paths() {
    assert_eq!(
        redirect_target(Some("/dashboard/blogs".to_owned())),
        "/dashboard/blogs"
    );
    assert_eq!(redirect_target(Some("/profile".to_owned())), "/profile");
}

#[test]
fn redirect_target_rejects_offsite_destinations() {
    // Protocol-relative and absolute URLs would turn the login page into
    // an open redirect.
    assert_eq!(redirect_target(Some("//evil.example".to_owned())), "/dashboard");
    assert_eq!(redirect_target(Some("https://evil.example".to_owned())), "/dashboard");
    assert_eq!(redirect_target(Some("dashboard".to_owned())), "/dashboard");
}
