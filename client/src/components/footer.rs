//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__copy">"Built with Rust, Leptos, and Axum."</span>
            <nav class="footer__links">
                <a href="/blogs">"Blog"</a>
                <a href="/projects">"Projects"</a>
                <a href="/contact">"Contact"</a>
            </nav>
        </footer>
    }
}
