//! Public project detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::Project;

use crate::util::markdown::render_markdown;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project = RwSignal::new(None::<Project>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let id = params.get_untracked().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_project(&id).await {
                Ok(item) => project.set(Some(item)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = params;

    view! {
        <article class="project-detail">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading project..."</p> }
            >
                <Show
                    when=move || project.get().is_some()
                    fallback=move || {
                        view! {
                            <p class="project-detail__error">
                                {move || {
                                    error.get().unwrap_or_else(|| "Project not found.".to_owned())
                                }}
                            </p>
                        }
                    }
                >
                    {move || {
                        project
                            .get()
                            .map(|p| {
                                let rendered = render_markdown(&p.description);
                                let live_link = p.live_url.clone().map(|url| {
                                    view! {
                                        <a class="btn btn--primary" href=url target="_blank">
                                            "Live site"
                                        </a>
                                    }
                                });
                                let source_link = p.github_url.clone().map(|url| {
                                    view! {
                                        <a class="btn" href=url target="_blank">
                                            "Source"
                                        </a>
                                    }
                                });
                                let highlights = (!p.features.is_empty()).then(|| {
                                    view! {
                                        <section class="project-detail__features">
                                            <h2>"Highlights"</h2>
                                            <ul>
                                                {p
                                                    .features
                                                    .iter()
                                                    .map(|f| view! { <li>{f.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </section>
                                    }
                                });
                                view! {
                                    <header class="project-detail__header">
                                        <h1>{p.title.clone()}</h1>
                                        <div class="project-detail__links">{live_link} {source_link}</div>
                                    </header>
                                    <div class="project-detail__body" inner_html=rendered></div>
                                    {highlights}
                                    <div class="project-detail__tech">
                                        {p
                                            .technologies
                                            .iter()
                                            .map(|t| view! { <span class="tag">{t.clone()}</span> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Show>
            </Show>
            <a class="project-detail__back" href="/projects">
                "< All projects"
            </a>
        </article>
    }
}
