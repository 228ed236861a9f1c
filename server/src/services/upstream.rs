//! Upstream REST backend client — login, logout, profile, and passthrough.
//!
//! ARCHITECTURE
//! ============
//! This is the only module permitted to speak to the remote backend. Auth
//! responses are normalized here through `models::envelope` so the rest of
//! the server only ever sees canonical shapes; everything else is relayed
//! byte-for-byte by [`UpstreamService::forward`].

use axum::http::Method;
use models::User;
use models::envelope::{self, LoginPayload};

const DEFAULT_UPSTREAM_URL: &str = "http://localhost:5000/api";

/// Upstream backend configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
}

impl UpstreamConfig {
    /// Load from `UPSTREAM_API_URL`, defaulting to a local backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("UPSTREAM_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_owned());
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for a backend path (with or without a leading slash).
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Transport failure: no response from the backend at all.
    #[error("upstream unreachable: {0}")]
    Unreachable(String),
    /// The backend answered but rejected the request; carries its message.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered with a body no normalizer recognizes.
    #[error(transparent)]
    Shape(#[from] envelope::EnvelopeError),
}

/// Outcome of a login forwarded upstream.
#[derive(Debug)]
pub struct LoginOutcome {
    pub payload: LoginPayload,
    /// Server-supplied success message, or a generic one.
    pub message: String,
    /// Raw `Set-Cookie` headers to relay to the browser (cookie-set
    /// deployments deliver the session token this way).
    pub set_cookies: Vec<String>,
}

/// A backend response relayed by the generic proxy.
#[derive(Debug)]
pub struct ForwardedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub set_cookies: Vec<String>,
    pub body: Vec<u8>,
}

/// HTTP client for the upstream backend.
#[derive(Clone)]
pub struct UpstreamService {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamService {
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// Forward credentials to `POST /auth/login` and normalize the result.
    ///
    /// # Errors
    ///
    /// `Rejected` for non-2xx responses and bodies with `success: false`
    /// (carrying the server message), `Shape` when the success body matches
    /// no known variant, `Unreachable` on transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, UpstreamError> {
        let resp = self
            .client
            .post(self.config.endpoint("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        let status = resp.status();
        let set_cookies = collect_set_cookies(resp.headers());
        let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);

        if !status.is_success() || envelope::success_flag(&body) == Some(false) {
            let message = envelope::message(&body)
                .unwrap_or_else(|| "Invalid email or password".to_owned());
            return Err(UpstreamError::Rejected(message));
        }

        let payload = envelope::login_payload(&body)?;
        let message =
            envelope::message(&body).unwrap_or_else(|| "Login successful".to_owned());
        Ok(LoginOutcome { payload, message, set_cookies })
    }

    /// Call `POST /auth/logout`, forwarding the browser's cookies.
    ///
    /// # Errors
    ///
    /// Only transport failures are reported; any response counts as done —
    /// the caller clears local cookies regardless.
    pub async fn logout(&self, cookie_header: Option<&str>) -> Result<(), UpstreamError> {
        let mut req = self.client.post(self.config.endpoint("/auth/logout"));
        if let Some(cookies) = cookie_header {
            req = req.header(reqwest::header::COOKIE, cookies);
        }
        req.send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;
        Ok(())
    }

    /// Revalidate a session against `GET /auth/profile`.
    ///
    /// Returns `Ok(None)` on a 401 — the sole signal that the cached
    /// session is invalid.
    ///
    /// # Errors
    ///
    /// `Shape` for unrecognized success bodies, `Rejected` for other error
    /// statuses, `Unreachable` on transport failure.
    pub async fn profile(&self, cookie_header: Option<&str>) -> Result<Option<User>, UpstreamError> {
        let mut req = self.client.get(self.config.endpoint("/auth/profile"));
        if let Some(cookies) = cookie_header {
            req = req.header(reqwest::header::COOKIE, cookies);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
        if !status.is_success() {
            let message = envelope::message(&body)
                .unwrap_or_else(|| format!("profile check failed: {status}"));
            return Err(UpstreamError::Rejected(message));
        }
        Ok(Some(envelope::profile_payload(&body)?))
    }

    /// Relay an arbitrary API request to the backend.
    ///
    /// # Errors
    ///
    /// `Unreachable` on transport failure; backend error statuses are not
    /// errors here — they are relayed to the browser as-is.
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        cookie_header: Option<&str>,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<ForwardedResponse, UpstreamError> {
        let mut req = self.client.request(method, self.config.endpoint(path_and_query));
        if let Some(cookies) = cookie_header {
            req = req.header(reqwest::header::COOKIE, cookies);
        }
        if let Some(ct) = content_type {
            req = req.header(reqwest::header::CONTENT_TYPE, ct);
        }
        if !body.is_empty() {
            req = req.body(body);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let set_cookies = collect_set_cookies(resp.headers());
        let body = resp
            .bytes()
            .await
            .map_err(|e| UpstreamError::Unreachable(e.to_string()))?
            .to_vec();

        Ok(ForwardedResponse { status, content_type, set_cookies, body })
    }
}

fn collect_set_cookies(headers: &reqwest::header::HeaderMap) -> Vec<String> {
    headers
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_owned))
        .collect()
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
