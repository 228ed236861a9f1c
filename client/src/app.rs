//! Application root: document shell, router, and session provisioning.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs the single session signal at mount and provides it via
//! context — there is no module-level auth global. The mount-time session
//! check runs once per tab and settles the provider out of its
//! initializing state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::about::AboutPage;
use crate::pages::blog_detail::BlogDetailPage;
use crate::pages::blog_editor::{BlogCreatePage, BlogEditPage};
use crate::pages::blogs::BlogIndexPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::dashboard_blogs::DashboardBlogsPage;
use crate::pages::dashboard_projects::DashboardProjectsPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::project_editor::{ProjectCreatePage, ProjectEditPage};
use crate::pages::projects::ProjectIndexPage;
use crate::state::session::SessionState;

/// HTML document shell used by SSR and hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve the session once per tab. On the server the provider stays
    // in its initializing state, so guards render placeholders and never
    // leak protected markup into SSR output.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::check_auth(session).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio"/>
        <Router>
            <Navbar/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/blogs") view=BlogIndexPage/>
                    <Route path=path!("/blogs/:slug") view=BlogDetailPage/>
                    <Route path=path!("/projects") view=ProjectIndexPage/>
                    <Route path=path!("/projects/:id") view=ProjectDetailPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/dashboard/blogs") view=DashboardBlogsPage/>
                    <Route path=path!("/dashboard/blogs/create") view=BlogCreatePage/>
                    <Route path=path!("/dashboard/blogs/edit/:id") view=BlogEditPage/>
                    <Route path=path!("/dashboard/projects") view=DashboardProjectsPage/>
                    <Route path=path!("/dashboard/projects/create") view=ProjectCreatePage/>
                    <Route path=path!("/dashboard/projects/edit/:id") view=ProjectEditPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/">"Back to home"</a>
        </section>
    }
}
