//! Dashboard blog management: full listing with edit and delete.

use leptos::prelude::*;
use models::{ApiError, Blog};

use crate::components::route_guard::RequireSession;
use crate::state::session::SessionState;

#[component]
pub fn DashboardBlogsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <BlogTable/>
        </RequireSession>
    }
}

#[component]
fn BlogTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let blogs = RwSignal::new(Vec::<Blog>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_blogs().await {
            Ok(items) => blogs.set(items),
            Err(ApiError::Unauthorized) => {
                crate::state::session::handle_unauthorized(session);
                return;
            }
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="manage-page">
            <header class="manage-page__header toolbar">
                <span class="toolbar__title">"Posts"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn btn--primary" href="/dashboard/blogs/create">
                    "+ New Post"
                </a>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="manage-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading posts..."</p> }
            >
                <table class="manage-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Views"</th>
                            <th>"Updated"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            blogs
                                .get()
                                .into_iter()
                                .map(|b| {
                                    let edit_href = format!("/dashboard/blogs/edit/{}", b.id);
                                    let id_for_delete = b.id.clone();
                                    view! {
                                        <tr>
                                            <td>{b.title.clone()}</td>
                                            <td>
                                                {if b.published { "Published" } else { "Draft" }}
                                            </td>
                                            <td>{b.views.unwrap_or_default()}</td>
                                            <td>{b.updated_at.clone().unwrap_or_default()}</td>
                                            <td class="manage-table__actions">
                                                <a class="btn" href=edit_href>
                                                    "Edit"
                                                </a>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| {
                                                        delete_id.set(Some(id_for_delete.clone()));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || delete_id.get().is_some()>
                <DeleteBlogDialog blog_id=delete_id on_cancel=on_delete_cancel blogs=blogs/>
            </Show>
        </div>
    }
}

/// Confirmation dialog for deleting a post.
#[component]
fn DeleteBlogDialog(
    blog_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    blogs: RwSignal<Vec<Blog>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let submit = Callback::new(move |()| {
        let Some(id) = blog_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_blog(&id).await {
                Ok(()) => blogs.update(|items| items.retain(|b| b.id != id)),
                Err(ApiError::Unauthorized) => {
                    crate::state::session::handle_unauthorized(session);
                }
                Err(err) => log::warn!("delete failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, blogs, session);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Post"</h2>
                <p class="dialog__danger">"This will permanently delete this post."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
