//! Public blog detail page rendering the markdown body.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::Blog;

use crate::util::markdown::render_markdown;

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let params = use_params_map();
    let blog = RwSignal::new(None::<Blog>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let slug = params.get_untracked().get("slug").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_blog(&slug).await {
                Ok(item) => blog.set(Some(item)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    view! {
        <article class="blog-detail">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading post..."</p> }
            >
                <Show
                    when=move || blog.get().is_some()
                    fallback=move || {
                        view! {
                            <p class="blog-detail__error">
                                {move || {
                                    error.get().unwrap_or_else(|| "Post not found.".to_owned())
                                }}
                            </p>
                        }
                    }
                >
                    {move || {
                        blog.get()
                            .map(|b| {
                                let rendered = render_markdown(&b.content);
                                view! {
                                    <header class="blog-detail__header">
                                        <h1>{b.title.clone()}</h1>
                                        <div class="blog-detail__meta">
                                            <span>{b.created_at.clone().unwrap_or_default()}</span>
                                            <span class="blog-detail__tags">
                                                {b
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! { <span class="tag">{tag.clone()}</span> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </span>
                                        </div>
                                    </header>
                                    <div class="blog-detail__body" inner_html=rendered></div>
                                }
                            })
                    }}
                </Show>
            </Show>
            <a class="blog-detail__back" href="/blogs">
                "< All posts"
            </a>
        </article>
    }
}
