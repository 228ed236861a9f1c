//! Login page with email + password credentials.
//!
//! On success a full-page navigation is issued to the return-to target so
//! the next server render sees the fresh session cookies.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::session::SessionState;
use crate::util::validate::{message_for, validate_login};

const DEFAULT_LANDING: &str = "/dashboard";

/// Resolve the post-login destination from the `redirect` query parameter.
/// Only same-site absolute paths are honored; anything else falls back to
/// the dashboard so the login page can never bounce off-site.
fn redirect_target(param: Option<String>) -> String {
    match param {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT_LANDING.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let errors = validate_login(&email_value, &password_value);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        form_error.set(String::new());
        busy.set(true);

        let target = redirect_target(query.get().get("redirect"));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::session::login(session, &email_value, &password_value, &target)
                .await
            {
                Ok(()) => {
                    // Full-page navigation is already underway; keep the
                    // button disabled until the tab unloads.
                }
                Err(err) => {
                    form_error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, target);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to access your dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email Address"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="admin@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || message_for(&field_errors.get(), "email").is_some()>
                        <p class="login-field-error">
                            {move || {
                                message_for(&field_errors.get(), "email")
                                    .unwrap_or_default()
                                    .to_owned()
                            }}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="********"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || message_for(&field_errors.get(), "password").is_some()>
                        <p class="login-field-error">
                            {move || {
                                message_for(&field_errors.get(), "password")
                                    .unwrap_or_default()
                                    .to_owned()
                            }}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !form_error.get().is_empty()>
                    <p class="login-message login-message--error">{move || form_error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
