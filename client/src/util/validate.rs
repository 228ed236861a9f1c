//! Shared form validation for the login and editor forms.
//!
//! One validation path serves every form so field rules cannot drift
//! between the create and edit screens.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use models::{BlogForm, ProjectForm};

/// A per-field validation failure, keyed by input name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self { field, message: message.to_owned() }
    }
}

/// First error message recorded for `field`, if any.
#[must_use]
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
}

/// Syntactic plausibility only: one `@`, non-empty local part, and a dot
/// somewhere in the domain. Real validation is the backend's job.
#[must_use]
pub fn plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}

#[must_use]
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let email = email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !plausible_email(email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if password.len() < 6 {
        errors.push(FieldError::new("password", "Password must be at least 6 characters"));
    }
    errors
}

#[must_use]
pub fn validate_blog(form: &BlogForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if form.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Content is required"));
    }
    if form.excerpt.as_deref().unwrap_or("").trim().is_empty() {
        errors.push(FieldError::new("excerpt", "Excerpt is required"));
    }
    errors
}

#[must_use]
pub fn validate_project(form: &ProjectForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if form.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if form.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    errors
}

/// Split a comma-separated input into trimmed, de-duplicated entries.
/// Used for blog tags and project technology/feature lists.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        if !seen.iter().any(|s: &String| s.eq_ignore_ascii_case(entry)) {
            seen.push(entry.to_owned());
        }
    }
    seen
}

/// Normalize an optional text input: trimmed, empty becomes `None`.
#[must_use]
pub fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
