use super::*;

fn sample_blog_json() -> &'static str {
    r##"{
        "id": "b1",
        "title": "Hello",
        "slug": "hello",
        "content": "# Hi",
        "excerpt": "intro",
        "featuredImage": "https://img.example/x.png",
        "tags": ["rust", "web"],
        "published": true,
        "views": 12,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-02T00:00:00Z"
    }"##
}

#[test]
fn blog_deserializes_camel_case_fields() {
    let blog: Blog = serde_json::from_str(sample_blog_json()).unwrap();
    assert_eq!(blog.featured_image.as_deref(), Some("https://img.example/x.png"));
    assert_eq!(blog.tags, vec!["rust", "web"]);
    assert_eq!(blog.views, Some(12));
}

#[test]
fn blog_optional_fields_default_to_absent() {
    let blog: Blog = serde_json::from_str(
        r#"{"id":"b2","title":"T","slug":"t","content":"c","published":false}"#,
    )
    .unwrap();
    assert!(blog.excerpt.is_none());
    assert!(blog.tags.is_empty());
    assert!(blog.created_at.is_none());
}

#[test]
fn user_role_defaults_to_user() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"a@b.co","name":"A"}"#).unwrap();
    assert_eq!(user.role, "user");
}

#[test]
fn project_form_serializes_camel_case() {
    let form = ProjectForm {
        title: "P".to_owned(),
        description: "d".to_owned(),
        github_url: Some("https://github.com/x".to_owned()),
        published: true,
        ..ProjectForm::default()
    };
    let json = serde_json::to_value(&form).unwrap();
    assert!(json.get("githubUrl").is_some());
    assert!(json.get("github_url").is_none());
}

#[test]
fn dashboard_stats_tolerates_empty_body() {
    let stats: DashboardStats = serde_json::from_str("{}").unwrap();
    assert_eq!(stats.total_blogs, 0);
    assert!(stats.recent_blogs.is_empty());
}

#[test]
fn api_error_messages_are_user_readable() {
    let err = ApiError::AuthenticationFailed("Invalid credentials".to_owned());
    assert_eq!(err.to_string(), "Invalid credentials");

    let err = ApiError::NetworkUnavailable;
    assert!(err.to_string().contains("no response"));

    let err = ApiError::Http { status: 500, message: "boom".to_owned() };
    assert!(err.to_string().contains("500"));
}
