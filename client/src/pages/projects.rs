//! Public project index.

use leptos::prelude::*;
use models::Project;

use crate::components::project_card::ProjectCard;

#[component]
pub fn ProjectIndexPage() -> impl IntoView {
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_projects().await {
            Ok(items) => projects.set(items.into_iter().filter(|p| p.published).collect()),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    view! {
        <div class="project-index">
            <h1>"Projects"</h1>
            <Show when=move || error.get().is_some()>
                <p class="project-index__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <Show
                    when=move || !projects.get().is_empty()
                    fallback=move || view! { <p class="project-index__empty">"Nothing here yet."</p> }
                >
                    <div class="project-index__cards">
                        {move || {
                            projects
                                .get()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
