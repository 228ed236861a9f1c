use super::*;

#[test]
fn assemble_normalizes_urls_and_lists() {
    let form = assemble_project_form(
        " Folio ",
        "A portfolio CMS\n",
        "",
        " https://folio.example ",
        "",
        "rust, axum, Rust",
        "auth, dashboard",
        true,
    );
    assert_eq!(form.title, "Folio");
    assert_eq!(form.description, "A portfolio CMS");
    assert!(form.thumbnail.is_none());
    assert_eq!(form.live_url.as_deref(), Some("https://folio.example"));
    assert!(form.github_url.is_none());
    assert_eq!(form.technologies, vec!["rust", "axum"]);
    assert_eq!(form.features, vec!["auth", "dashboard"]);
}

#[test]
fn assembled_empty_form_fails_validation() {
    let form = assemble_project_form("", "", "", "", "", "", "", false);
    assert_eq!(validate_project(&form).len(), 2);
}
