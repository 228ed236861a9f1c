//! Public blog index with client-side search.

use leptos::prelude::*;
use models::Blog;

use crate::components::blog_card::BlogCard;

/// Case-insensitive match against title, excerpt, and tags.
fn matches_search(blog: &Blog, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    blog.title.to_lowercase().contains(&needle)
        || blog
            .excerpt
            .as_deref()
            .is_some_and(|e| e.to_lowercase().contains(&needle))
        || blog.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_blogs().await {
            Ok(items) => blogs.set(items.into_iter().filter(|b| b.published).collect()),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    let visible = move || {
        let needle = search.get().trim().to_owned();
        blogs
            .get()
            .into_iter()
            .filter(|b| matches_search(b, &needle))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="blog-index">
            <header class="blog-index__header">
                <h1>"Blog"</h1>
                <input
                    class="blog-index__search"
                    type="search"
                    placeholder="Search posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>
            <Show when=move || error.get().is_some()>
                <p class="blog-index__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading posts..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || view! { <p class="blog-index__empty">"No posts found."</p> }
                >
                    <div class="blog-index__cards">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|blog| view! { <BlogCard blog=blog/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(title: &str, excerpt: Option<&str>, tags: &[&str]) -> Blog {
        Blog {
            id: "b1".to_owned(),
            title: title.to_owned(),
            slug: "s".to_owned(),
            content: String::new(),
            excerpt: excerpt.map(str::to_owned),
            featured_image: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            published: true,
            views: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(matches_search(&blog("Anything", None, &[]), ""));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let b = blog("Getting Started", Some("An intro"), &["Rust"]);
        assert!(matches_search(&b, "getting"));
        assert!(matches_search(&b, "INTRO"));
        assert!(matches_search(&b, "rust"));
        assert!(!matches_search(&b, "python"));
    }
}
