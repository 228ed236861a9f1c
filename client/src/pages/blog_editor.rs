//! Blog editor shared by the create and edit routes.
//!
//! DESIGN
//! ======
//! One component owns the form state and validation for both flows; the
//! routes differ only in whether an id is present and which API call the
//! submit performs.

#[cfg(test)]
#[path = "blog_editor_test.rs"]
mod blog_editor_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use models::{ApiError, BlogForm};

use crate::components::route_guard::RequireSession;
use crate::state::session::SessionState;
use crate::util::validate::{message_for, optional_field, parse_list, validate_blog};

/// Build the submission payload from raw form inputs.
fn assemble_blog_form(
    title: &str,
    excerpt: &str,
    content: &str,
    featured_image: &str,
    tags_raw: &str,
    published: bool,
) -> BlogForm {
    BlogForm {
        title: title.trim().to_owned(),
        content: content.trim_end().to_owned(),
        excerpt: optional_field(excerpt),
        featured_image: optional_field(featured_image),
        tags: parse_list(tags_raw),
        published,
    }
}

#[component]
pub fn BlogCreatePage() -> impl IntoView {
    view! {
        <RequireSession>
            <BlogEditor id=None/>
        </RequireSession>
    }
}

#[component]
pub fn BlogEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id");
    view! {
        <RequireSession>
            <BlogEditor id=id()/>
        </RequireSession>
    }
}

#[component]
fn BlogEditor(id: Option<String>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let featured_image = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let published = RwSignal::new(false);

    let field_errors = RwSignal::new(Vec::new());
    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let editing = id.is_some();

    // Edit flow: populate the form from the existing post.
    #[cfg(feature = "hydrate")]
    if let Some(id) = id.clone() {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_blog(&id).await {
                Ok(blog) => {
                    title.set(blog.title);
                    excerpt.set(blog.excerpt.unwrap_or_default());
                    content.set(blog.content);
                    featured_image.set(blog.featured_image.unwrap_or_default());
                    tags.set(blog.tags.join(", "));
                    published.set(blog.published);
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

        let form = assemble_blog_form(
            &title.get(),
            &excerpt.get(),
            &content.get(),
            &featured_image.get(),
            &tags.get(),
            published.get(),
        );
        let errors = validate_blog(&form);
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
                    Some(id) => crate::net::api::update_blog(id, &form).await,
                    None => crate::net::api::create_blog(&form).await,
                };
                match result {
                    Ok(_) => {
                        navigate("/dashboard/blogs", leptos_router::NavigateOptions::default());
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
                    {if editing { "Edit Post" } else { "New Post" }}
                </span>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/dashboard/blogs">
                    "Back to posts"
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
                    "Excerpt"
                    <input
                        class="editor-form__input"
                        type="text"
                        placeholder="One-paragraph summary shown in lists"
                        prop:value=move || excerpt.get()
                        on:input=move |ev| excerpt.set(event_target_value(&ev))
                    />
                </label>
                {error_line("excerpt")}

                <label class="editor-form__label">
                    "Content (markdown)"
                    <textarea
                        class="editor-form__textarea"
                        rows="16"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {error_line("content")}

                <label class="editor-form__label">
                    "Featured image URL"
                    <input
                        class="editor-form__input"
                        type="url"
                        prop:value=move || featured_image.get()
                        on:input=move |ev| featured_image.set(event_target_value(&ev))
                    />
                </label>

                <label class="editor-form__label">
                    "Tags (comma separated)"
                    <input
                        class="editor-form__input"
                        type="text"
                        placeholder="rust, web"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
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
                                "Create post"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
