//! Site navigation bar with session-aware actions.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session).await;
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Folio"
            </a>
            <nav class="navbar__links">
                <a href="/blogs">"Blog"</a>
                <a href="/projects">"Projects"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <div class="navbar__session">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <Show when=move || !session.get().loading>
                                <a class="btn navbar__login" href="/login">
                                    "Login"
                                </a>
                            </Show>
                        }
                    }
                >
                    <a class="navbar__dashboard" href="/dashboard">
                        "Dashboard"
                    </a>
                    <span class="navbar__self">
                        {move || session.get().user.map(|u| u.name).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
