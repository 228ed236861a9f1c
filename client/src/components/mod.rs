//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and list items while reading shared state
//! from Leptos context providers; only the session actions mutate it.

pub mod blog_card;
pub mod footer;
pub mod navbar;
pub mod project_card;
pub mod route_guard;
