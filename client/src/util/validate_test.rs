use super::*;

#[test]
fn plausible_email_accepts_normal_addresses() {
    assert!(plausible_email("ada@example.com"));
    assert!(plausible_email("a.b+tag@sub.domain.co"));
}

#[test]
fn plausible_email_rejects_malformed_addresses() {
    assert!(!plausible_email("ada"));
    assert!(!plausible_email("ada@"));
    assert!(!plausible_email("@example.com"));
    assert!(!plausible_email("ada@nodot"));
    assert!(!plausible_email("ada@.com"));
    assert!(!plausible_email("a da@example.com"));
}

#[test]
fn validate_login_reports_each_missing_field() {
    let errors = validate_login("", "");
    assert_eq!(message_for(&errors, "email"), Some("Email is required"));
    assert_eq!(message_for(&errors, "password"), Some("Password is required"));
}

#[test]
fn validate_login_enforces_password_length() {
    let errors = validate_login("ada@example.com", "short");
    assert_eq!(
        message_for(&errors, "password"),
        Some("Password must be at least 6 characters")
    );
    assert_eq!(message_for(&errors, "email"), None);
}

#[test]
fn validate_login_passes_plausible_input() {
    assert!(validate_login("ada@example.com", "secret1").is_empty());
}

#[test]
fn validate_blog_requires_title_content_excerpt() {
    let form = BlogForm::default();
    let errors = validate_blog(&form);
    assert_eq!(errors.len(), 3);

    let form = BlogForm {
        title: "T".to_owned(),
        content: "c".to_owned(),
        excerpt: Some("e".to_owned()),
        ..BlogForm::default()
    };
    assert!(validate_blog(&form).is_empty());
}

#[test]
fn validate_blog_treats_blank_excerpt_as_missing() {
    let form = BlogForm {
        title: "T".to_owned(),
        content: "c".to_owned(),
        excerpt: Some("   ".to_owned()),
        ..BlogForm::default()
    };
    assert_eq!(message_for(&validate_blog(&form), "excerpt"), Some("Excerpt is required"));
}

#[test]
fn validate_project_requires_title_and_description() {
    let errors = validate_project(&ProjectForm::default());
    assert!(message_for(&errors, "title").is_some());
    assert!(message_for(&errors, "description").is_some());
}

#[test]
fn parse_list_trims_dedupes_and_drops_blanks() {
    assert_eq!(parse_list(" rust, web ,, Rust , axum"), vec!["rust", "web", "axum"]);
    assert!(parse_list("  ,  , ").is_empty());
}

#[test]
fn optional_field_maps_blank_to_none() {
    assert_eq!(optional_field("  "), None);
    assert_eq!(optional_field(" x "), Some("x".to_owned()));
}
