//! Dashboard landing page — stats overview and quick actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The server-side gate has
//! already filtered requests without a token cookie; `RequireSession`
//! re-checks against the client's trusted session before anything renders.

use leptos::prelude::*;
use models::{ApiError, DashboardStats};

use crate::components::route_guard::RequireSession;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardContent/>
        </RequireSession>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let stats = RwSignal::new(DashboardStats::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_dashboard_stats().await {
            Ok(data) => stats.set(data),
            Err(ApiError::Unauthorized) => {
                crate::state::session::handle_unauthorized(session);
                return;
            }
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session).await;
            });
        }
    };

    let identity = move || {
        session
            .get()
            .user
            .map(|u| (u.name, u.email))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">
                    {move || identity().0} " (" {move || identity().1} ")"
                </span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <section class="dashboard-page__welcome">
                <h2>{move || format!("Welcome back, {}!", identity().0)}</h2>
                <p>"Here's what's happening with your portfolio."</p>
            </section>

            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading stats..."</p> }
            >
                <section class="dashboard-page__stats">
                    <div class="stat-card">
                        <span class="stat-card__value">{move || stats.get().total_blogs}</span>
                        <span class="stat-card__label">"Blog posts"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{move || stats.get().total_projects}</span>
                        <span class="stat-card__label">"Projects"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">{move || stats.get().total_views}</span>
                        <span class="stat-card__label">"Total views"</span>
                    </div>
                </section>

                <section class="dashboard-page__recent">
                    <h3>"Recent posts"</h3>
                    <ul>
                        {move || {
                            stats
                                .get()
                                .recent_blogs
                                .into_iter()
                                .map(|b| {
                                    let href = format!("/dashboard/blogs/edit/{}", b.id);
                                    view! {
                                        <li>
                                            <a href=href>{b.title}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <h3>"Recent projects"</h3>
                    <ul>
                        {move || {
                            stats
                                .get()
                                .recent_projects
                                .into_iter()
                                .map(|p| {
                                    let href = format!("/dashboard/projects/edit/{}", p.id);
                                    view! {
                                        <li>
                                            <a href=href>{p.title}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>

            <section class="dashboard-page__actions">
                <a class="btn btn--primary" href="/dashboard/blogs/create">
                    "Write a post"
                </a>
                <a class="btn btn--primary" href="/dashboard/projects/create">
                    "Add a project"
                </a>
                <a class="btn" href="/dashboard/blogs">
                    "Manage posts"
                </a>
                <a class="btn" href="/dashboard/projects">
                    "Manage projects"
                </a>
            </section>
        </div>
    }
}
