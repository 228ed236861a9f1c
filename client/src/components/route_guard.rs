//! Client-side route guard for protected pages.
//!
//! ARCHITECTURE
//! ============
//! Second line of defense behind the server-side request gate, covering
//! the case where the gate's cookie and the client's trusted session
//! disagree. While the session provider is initializing, a neutral
//! placeholder renders and no redirect fires; once resolved, either the
//! children commit or exactly one redirect to `/login` happens. Protected
//! content never flashes before the check resolves.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{GuardDecision, SessionState, guard_decision};

/// Blocks rendering of `children` until the session resolves.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let redirected = StoredValue::new(false);

    Effect::new(move || {
        if guard_decision(&session.get()) == GuardDecision::Redirect
            && !redirected.get_value()
        {
            redirected.set_value(true);
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || guard_decision(&session.get()) == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-placeholder" aria-busy="true">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
