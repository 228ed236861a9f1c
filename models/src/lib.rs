//! Shared data model for the client/server boundary.
//!
//! This crate owns the DTOs exchanged with the upstream REST backend, the
//! stored-session model used by both enforcement layers, and the
//! response-envelope normalization that turns the backend's loosely nested
//! payload variants into one canonical shape at the API boundary.

pub mod envelope;
pub mod session;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};

/// Error taxonomy for client-facing API calls.
///
/// Login surfaces `AuthenticationFailed` to the user; logout swallows every
/// variant; a 401 anywhere maps to `Unauthorized` and forces a session clear.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Credentials rejected by the backend. Carries the server-supplied
    /// message, or a generic one when the server gave none.
    #[error("{0}")]
    AuthenticationFailed(String),
    /// Transport-level failure: the request never produced a response.
    #[error("no response from server; check your connection and try again")]
    NetworkUnavailable,
    /// The backend answered 401 on an authenticated call.
    #[error("session is no longer valid")]
    Unauthorized,
    /// The response body matched none of the known envelope variants.
    #[error(transparent)]
    Shape(#[from] envelope::EnvelopeError),
    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
}

/// Authenticated user profile as returned by the login/profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque backend identifier.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// `"admin"` or `"user"`; carried but not enforced anywhere client-side.
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_owned()
}

/// A blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// URL-safe identifier used by the public detail route.
    pub slug: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Fields submitted when creating or updating a blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Fields submitted when creating or updating a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub published: bool,
}

/// Site-owner profile shown on the about page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub name: String,
    /// Markdown biography.
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// A named skill with an optional proficiency percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub proficiency: Option<u8>,
}

/// External profile links for the site owner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// Aggregate counters and recent items for the dashboard landing page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_blogs: i64,
    #[serde(default)]
    pub total_projects: i64,
    #[serde(default)]
    pub total_views: i64,
    #[serde(default)]
    pub recent_blogs: Vec<Blog>,
    #[serde(default)]
    pub recent_projects: Vec<Project>,
}
