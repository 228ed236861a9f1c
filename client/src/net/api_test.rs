use super::*;

#[test]
fn blog_endpoint_formats_expected_path() {
    assert_eq!(blog_endpoint("b123"), "/api/blogs/b123");
    assert_eq!(blog_endpoint("getting-started-with-rust"), "/api/blogs/getting-started-with-rust");
}

#[test]
fn project_endpoint_formats_expected_path() {
    assert_eq!(project_endpoint("p42"), "/api/projects/p42");
}

#[tokio::test]
async fn native_stubs_report_network_unavailable() {
    // Off the browser every call degrades to NetworkUnavailable instead of
    // panicking during SSR.
    assert!(matches!(fetch_blogs().await, Err(ApiError::NetworkUnavailable)));
    assert!(matches!(fetch_profile().await, Err(ApiError::NetworkUnavailable)));
    assert!(matches!(login("a@b.co", "pw").await, Err(ApiError::NetworkUnavailable)));
}
