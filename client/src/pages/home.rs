//! Public landing page: hero plus recent published work.

use leptos::prelude::*;
use models::{Blog, Project};

use crate::components::blog_card::BlogCard;
use crate::components::project_card::ProjectCard;

#[cfg(feature = "hydrate")]
const RECENT_LIMIT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(items) = crate::net::api::fetch_blogs().await {
            blogs.set(
                items
                    .into_iter()
                    .filter(|b| b.published)
                    .take(RECENT_LIMIT)
                    .collect(),
            );
        }
        if let Ok(items) = crate::net::api::fetch_projects().await {
            projects.set(
                items
                    .into_iter()
                    .filter(|p| p.published)
                    .take(RECENT_LIMIT)
                    .collect(),
            );
        }
        loading.set(false);
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Hi, I build things for the web."</h1>
                <p class="hero__lede">
                    "Portfolio, projects, and occasional writing about software."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/projects">
                        "See projects"
                    </a>
                    <a class="btn" href="/blogs">
                        "Read the blog"
                    </a>
                </div>
            </section>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="home-page__loading">"Loading..."</p> }
            >
                <section class="home-page__recent">
                    <h2>"Recent posts"</h2>
                    <div class="home-page__cards">
                        {move || {
                            blogs
                                .get()
                                .into_iter()
                                .map(|blog| view! { <BlogCard blog=blog/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
                <section class="home-page__recent">
                    <h2>"Recent projects"</h2>
                    <div class="home-page__cards">
                        {move || {
                            projects
                                .get()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}
