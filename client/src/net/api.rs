//! REST API client for the same-origin `/api` surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs reporting the network as unavailable, since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every response body passes through `models::envelope` normalization —
//! one canonical shape immediately at the boundary, with an explicit shape
//! error for anything unrecognized. 401s map to `ApiError::Unauthorized`
//! so callers can trigger the forced session teardown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::envelope::LoginPayload;
use models::{About, ApiError, Blog, BlogForm, DashboardStats, Project, ProjectForm, User};

#[cfg(any(test, feature = "hydrate"))]
fn blog_endpoint(id_or_slug: &str) -> String {
    format!("/api/blogs/{id_or_slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn project_endpoint(id: &str) -> String {
    format!("/api/projects/{id}")
}

// =============================================================================
// Shared hydrate-side plumbing
// =============================================================================

/// Read a response into JSON, mapping 401 and non-2xx statuses to errors.
#[cfg(feature = "hydrate")]
async fn read_response(resp: gloo_net::http::Response) -> Result<serde_json::Value, ApiError> {
    use models::envelope;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let message =
            envelope::message(&body).unwrap_or_else(|| "request failed".to_owned());
        return Err(ApiError::Http { status, message });
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
async fn get_json(url: &str) -> Result<serde_json::Value, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|_| ApiError::NetworkUnavailable)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json(
    builder: gloo_net::http::RequestBuilder,
    payload: &impl serde::Serialize,
) -> Result<serde_json::Value, ApiError> {
    let resp = builder
        .json(payload)
        .map_err(|_| ApiError::NetworkUnavailable)?
        .send()
        .await
        .map_err(|_| ApiError::NetworkUnavailable)?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
fn extract<T: serde::de::DeserializeOwned>(
    body: &serde_json::Value,
    key: &str,
) -> Result<T, ApiError> {
    Ok(models::envelope::extract(body, key)?)
}

// =============================================================================
// Auth
// =============================================================================

/// `POST /api/auth/login`.
///
/// # Errors
///
/// `AuthenticationFailed` (with the server's message) on rejected
/// credentials, `NetworkUnavailable` when no response arrives, and a shape
/// error when a success body matches no known variant.
pub async fn login(email: &str, password: &str) -> Result<LoginPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use models::envelope;

        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|_| ApiError::NetworkUnavailable)?
            .send()
            .await
            .map_err(|_| ApiError::NetworkUnavailable)?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
        if !(200..300).contains(&status) || envelope::success_flag(&body) == Some(false) {
            let message = envelope::message(&body)
                .unwrap_or_else(|| "Login failed. Please try again.".to_owned());
            return Err(ApiError::AuthenticationFailed(message));
        }
        Ok(envelope::login_payload(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::NetworkUnavailable)
    }
}

/// `POST /api/auth/logout` — best-effort; failures are logged, never
/// surfaced, and the caller clears local state regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {err}");
        }
    }
}

/// `GET /api/auth/profile` — session revalidation.
///
/// # Errors
///
/// `Unauthorized` on 401 (the invalidation signal); other failures are
/// transport-shaped and leave the cached session decision to the caller.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json("/api/auth/profile").await?;
        Ok(models::envelope::profile_payload(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::NetworkUnavailable)
    }
}

// =============================================================================
// Blogs
// =============================================================================

/// Fetch all blogs from `GET /api/blogs`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_blogs() -> Result<Vec<Blog>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json("/api/blogs").await?;
        extract(&body, "blogs")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::NetworkUnavailable)
    }
}

/// Fetch one blog by id or slug.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_blog(id_or_slug: &str) -> Result<Blog, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(&blog_endpoint(id_or_slug)).await?;
        extract(&body, "blog")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id_or_slug;
        Err(ApiError::NetworkUnavailable)
    }
}

/// Create a blog via `POST /api/blogs`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn create_blog(form: &BlogForm) -> Result<Blog, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_json(gloo_net::http::Request::post("/api/blogs"), form).await?;
        extract(&body, "blog")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::NetworkUnavailable)
    }
}

/// Update a blog via `PUT /api/blogs/{id}`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn update_blog(id: &str, form: &BlogForm) -> Result<Blog, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_json(gloo_net::http::Request::put(&blog_endpoint(id)), form).await?;
        extract(&body, "blog")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form);
        Err(ApiError::NetworkUnavailable)
    }
}

/// Delete a blog via `DELETE /api/blogs/{id}`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn delete_blog(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&blog_endpoint(id))
            .send()
            .await
            .map_err(|_| ApiError::NetworkUnavailable)?;
        read_response(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::NetworkUnavailable)
    }
}

// =============================================================================
// Projects
// =============================================================================

/// Fetch all projects from `GET /api/projects`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json("/api/projects").await?;
        extract(&body, "projects")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::NetworkUnavailable)
    }
}

/// Fetch one project by id.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_project(id: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(&project_endpoint(id)).await?;
        extract(&body, "project")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::NetworkUnavailable)
    }
}

/// Create a project via `POST /api/projects`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn create_project(form: &ProjectForm) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_json(gloo_net::http::Request::post("/api/projects"), form).await?;
        extract(&body, "project")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::NetworkUnavailable)
    }
}

/// Update a project via `PUT /api/projects/{id}`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn update_project(id: &str, form: &ProjectForm) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = send_json(gloo_net::http::Request::put(&project_endpoint(id)), form).await?;
        extract(&body, "project")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form);
        Err(ApiError::NetworkUnavailable)
    }
}

/// Delete a project via `DELETE /api/projects/{id}`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn delete_project(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&project_endpoint(id))
            .send()
            .await
            .map_err(|_| ApiError::NetworkUnavailable)?;
        read_response(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::NetworkUnavailable)
    }
}

// =============================================================================
// About / dashboard
// =============================================================================

/// Fetch the site-owner profile from `GET /api/about`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_about() -> Result<About, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json("/api/about").await?;
        extract(&body, "about")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::NetworkUnavailable)
    }
}

/// Fetch dashboard counters from `GET /api/dashboard/stats`.
///
/// # Errors
///
/// Standard [`ApiError`] taxonomy.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json("/api/dashboard/stats").await?;
        extract(&body, "stats")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::NetworkUnavailable)
    }
}
