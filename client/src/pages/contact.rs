//! Public contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let email = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(about) = crate::net::api::fetch_about().await {
            email.set(Some(about.email));
        }
    });

    view! {
        <div class="contact-page">
            <h1>"Get in touch"</h1>
            <p>
                "Have a project in mind, a question about a post, or just want to say hi? "
                "Email is the fastest way to reach me."
            </p>
            <Show
                when=move || email.get().is_some()
                fallback=move || view! { <p class="contact-page__hint">"Loading contact details..."</p> }
            >
                <a
                    class="btn btn--primary contact-page__email"
                    href=move || format!("mailto:{}", email.get().unwrap_or_default())
                >
                    {move || email.get().unwrap_or_default()}
                </a>
            </Show>
        </div>
    }
}
