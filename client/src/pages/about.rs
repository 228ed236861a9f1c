//! Public about page built from the backend's about-me record.

use leptos::prelude::*;
use models::About;

use crate::util::markdown::render_markdown;

#[component]
pub fn AboutPage() -> impl IntoView {
    let about = RwSignal::new(None::<About>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(item) = crate::net::api::fetch_about().await {
            about.set(Some(item));
        }
        loading.set(false);
    });

    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading..."</p> }
            >
                <Show
                    when=move || about.get().is_some()
                    fallback=move || view! { <p>"Nothing to show yet."</p> }
                >
                    {move || {
                        about
                            .get()
                            .map(|a| {
                                let bio = render_markdown(&a.bio);
                                let location = a.location.clone().map(|loc| {
                                    view! { <p class="about-page__location">{loc}</p> }
                                });
                                view! {
                                    <section class="about-page__intro">
                                        <h2>{a.name.clone()}</h2>
                                        {location}
                                        <div class="about-page__bio" inner_html=bio></div>
                                    </section>
                                    <section class="about-page__skills">
                                        <h2>"Skills"</h2>
                                        <ul>
                                            {a
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <li class="about-page__skill">
                                                            <span>{skill.name.clone()}</span>
                                                            <span class="about-page__skill-category">
                                                                {skill.category.clone().unwrap_or_default()}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </section>
                                    <section class="about-page__links">
                                        {a
                                            .social_links
                                            .github
                                            .clone()
                                            .map(|url| view! { <a href=url>"GitHub"</a> })}
                                        {a
                                            .social_links
                                            .linkedin
                                            .clone()
                                            .map(|url| view! { <a href=url>"LinkedIn"</a> })}
                                        {a
                                            .social_links
                                            .twitter
                                            .clone()
                                            .map(|url| view! { <a href=url>"Twitter"</a> })}
                                    </section>
                                }
                            })
                    }}
                </Show>
            </Show>
        </div>
    }
}
