//! Generic API relay.
//!
//! Every `/api/*` path without a dedicated handler (blogs, projects, about,
//! dashboard stats) is forwarded to the upstream backend with the browser's
//! cookies attached, and the backend's status, body, and cookies are
//! relayed back untouched. The client therefore always talks same-origin
//! and the backend's 401s arrive intact as the session-desync backstop.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::services::upstream::ForwardedResponse;
use crate::state::AppState;

/// Reject request bodies past this size rather than buffering them.
const MAX_PROXY_BODY_BYTES: usize = 2 * 1024 * 1024;

/// `ANY /api/{*path}` — relay to the backend.
pub async fn forward_api(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();
    let path_and_query = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let relative = path_and_query
        .strip_prefix("/api")
        .unwrap_or(&path_and_query)
        .to_owned();

    let cookie_header = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let body = match axum::body::to_bytes(request.into_body(), MAX_PROXY_BODY_BYTES).await {
        Ok(bytes) => bytes.to_vec(),
        Err(_) => {
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(serde_json::json!({ "success": false, "message": "request body too large" })),
            )
                .into_response();
        }
    };

    match state
        .upstream
        .forward(method, &relative, cookie_header.as_deref(), content_type.as_deref(), body)
        .await
    {
        Ok(forwarded) => relay_response(forwarded),
        Err(err) => {
            tracing::error!(error = %err, path = %relative, "api relay failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "success": false, "message": "backend unreachable" })),
            )
                .into_response()
        }
    }
}

fn relay_response(forwarded: ForwardedResponse) -> Response {
    let status =
        StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = Response::new(Body::from(forwarded.body));
    *response.status_mut() = status;

    if let Some(ct) = forwarded
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, ct);
    }
    for raw in &forwarded.set_cookies {
        if let Ok(value) = HeaderValue::from_str(raw) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
