//! Project editor shared by the create and edit routes.

#[cfg(test)]
#[path = "project_editor_test.rs"]
mod project_editor_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use models::{ApiError, ProjectForm};

use crate::components::route_guard::RequireSession;
use crate::state::session::SessionState;
use crate::util::validate::{message_for, optional_field, parse_list, validate_project};

/// Build the submission payload from raw form inputs.
fn assemble_project_form(
    title: &str,
    description: &str,
    thumbnail: &str,
    live_url: &str,
    github_url: &str,
    technologies_raw: &str,
    features_raw: &str,
    published: bool,
) -> ProjectForm {
    ProjectForm {
        title: title.trim().to_owned(),
        description: description.trim_end().to_owned(),
        thumbnail: optional_field(thumbnail),
        live_url: optional_field(live_url),
        github_url: optional_field(github_url),
        technologies: parse_list(technologies_raw),
        features: parse_list(features_raw),
        published,
    }
}

#[component]
pub fn ProjectCreatePage() -> impl IntoView {
    view! {
        <RequireSession>
            <ProjectEditor id=None/>
        </RequireSession>
    }
}

#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id");
    view! {
        <RequireSession>
            <ProjectEditor id=id()/>
        </RequireSession>
    }
}

#[component]
fn ProjectEditor(id: Option<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let thumbnail = RwSignal::new(String::new());
    let live_url = RwSignal::new(String::new());
    let github_url = RwSignal::new(String::new());
    let technologies = RwSignal::new(String::new());
    let features = RwSignal::new(String::new());
    let published = RwSignal::new(false);

    let field_errors = RwSignal::new(Vec::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let editing = id.is_some();

    #[cfg(feature = "hydrate")]
    if let Some(id) = id.clone() {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_project(&id).await {
                Ok(project) => {
                    title.set(project.title);
                    description.set(project.description);
                    thumbnail.set(project.thumbnail.unwrap_or_default());
                    live_url.set(project.live_url.unwrap_or_default());
                    github_url.set(project.github_url.unwrap_or_default());
                    technologies.set(project.technologies.join(", "));
                    features.set(project.features.join(", "));
                    published.set(project.published);
                }
                Err(ApiError::Unauthorized) => {
                    crate::state::session::handle_unauthorized(session);
                }
                Err(err) => form_error.set(err.to_string()),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let form = assemble_project_form(
            &title.get(),
            &description.get(),
            &thumbnail.get(),
            &live_url.get(),
            &github_url.get(),
            &technologies.get(),
            &features.get(),
            published.get(),
        );
        let errors = validate_project(&form);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        form_error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match &id {
                    Some(id) => crate::net::api::update_project(id, &form).await,
                    None => crate::net::api::create_project(&form).await,
                };
                match result {
                    Ok(_) => {
                        navigate("/dashboard/projects", leptos_router::NavigateOptions::default());
                    }
                    Err(ApiError::Unauthorized) => {
                        crate::state::session::handle_unauthorized(session);
                    }
                    Err(err) => {
                        form_error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, form, session);
    };

    let error_line = move |field: &'static str| {
        view! {
            <Show when=move || message_for(&field_errors.get(), field).is_some()>
                <p class="editor__field-error">
                    {move || {
                        message_for(&field_errors.get(), field).unwrap_or_default().to_owned()
                    }}
                </p>
            </Show>
        }
    };

    view! {
        <div class="editor-page">
            <header class="editor-page__header toolbar">
                <span class="toolbar__title">
                    {if editing { "Edit Project" } else { "New Project" }}
                </span>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/dashboard/projects">
                    "Back to projects"
                </a>
            </header>

            <form class="editor-form" on:submit=on_submit>
                <label class="editor-form__label">
                    "Title"
                    <input
                        class="editor-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                {error_line("title")}

                <label class="editor-form__label">
                    "Description (markdown)"
                    <textarea
                        class="editor-form__textarea"
                        rows="10"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {error_line("description")}

                <label class="editor-form__label">
                    "Thumbnail URL"
                    <input
                        class="editor-form__input"
                        type="url"
                        prop:value=move || thumbnail.get()
                        on:input=move |ev| thumbnail.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__label">
                    "Live URL"
                    <input
                        class="editor-form__input"
                        type="url"
                        prop:value=move || live_url.get()
                        on:input=move |ev| live_url.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__label">
                    "GitHub URL"
                    <input
                        class="editor-form__input"
                        type="url"
                        prop:value=move || github_url.get()
                        on:input=move |ev| github_url.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__label">
                    "Technologies (comma separated)"
                    <input
                        class="editor-form__input"
                        type="text"
                        placeholder="rust, axum, leptos"
                        prop:value=move || technologies.get()
                        on:input=move |ev| technologies.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__label">
                    "Feature highlights (comma separated)"
                    <input
                        class="editor-form__input"
                        type="text"
                        prop:value=move || features.get()
                        on:input=move |ev| features.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || published.get()
                        on:change=move |ev| published.set(event_target_checked(&ev))
                    />
                    "Published"
                </label>

                <Show when=move || !form_error.get().is_empty()>
                    <p class="editor__error">{move || form_error.get()}</p>
                </Show>

                <div class="editor-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || {
                            if busy.get() {
                                "Saving..."
                            } else if editing {
                                "Save changes"
                            } else {
                                "Create project"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
