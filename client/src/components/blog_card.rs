//! Card component for blog list items.
//!
//! Keeps post presentation consistent between the home page and the blog
//! index while centralizing the detail-link affordance.

use leptos::prelude::*;
use models::Blog;

/// A clickable card linking to a blog post.
#[component]
pub fn BlogCard(blog: Blog) -> impl IntoView {
    let href = format!("/blogs/{}", blog.slug);
    let excerpt = blog.excerpt.clone().unwrap_or_default();
    let tags = blog.tags.clone();

    view! {
        <a class="blog-card" href=href>
            <span class="blog-card__title">{blog.title.clone()}</span>
            <Show when={
                let excerpt = excerpt.clone();
                move || !excerpt.is_empty()
            }>
                <p class="blog-card__excerpt">{excerpt.clone()}</p>
            </Show>
            <div class="blog-card__meta">
                <span class="blog-card__date">
                    {blog.created_at.clone().unwrap_or_default()}
                </span>
                <span class="blog-card__tags">
                    {tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect::<Vec<_>>()}
                </span>
            </div>
        </a>
    }
}
