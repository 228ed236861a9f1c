//! Dashboard project management: full listing with edit and delete.

use leptos::prelude::*;
use models::{ApiError, Project};

use crate::components::route_guard::RequireSession;
use crate::state::session::SessionState;

#[component]
pub fn DashboardProjectsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <ProjectTable/>
        </RequireSession>
    }
}

#[component]
fn ProjectTable() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_projects().await {
            Ok(items) => projects.set(items),
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
                <span class="toolbar__title">"Projects"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn btn--primary" href="/dashboard/projects/create">
                    "+ New Project"
                </a>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="manage-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <table class="manage-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Technologies"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            projects
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let edit_href = format!("/dashboard/projects/edit/{}", p.id);
                                    let id_for_delete = p.id.clone();
                                    view! {
                                        <tr>
                                            <td>{p.title.clone()}</td>
                                            <td>
                                                {if p.published { "Published" } else { "Draft" }}
                                            </td>
                                            <td>{p.technologies.join(", ")}</td>
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
                <DeleteProjectDialog
                    project_id=delete_id
                    on_cancel=on_delete_cancel
                    projects=projects
                />
            </Show>
        </div>
    }
}

/// Confirmation dialog for deleting a project.
#[component]
fn DeleteProjectDialog(
    project_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    projects: RwSignal<Vec<Project>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let submit = Callback::new(move |()| {
        let Some(id) = project_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_project(&id).await {
                Ok(()) => projects.update(|items| items.retain(|p| p.id != id)),
                Err(ApiError::Unauthorized) => {
                    crate::state::session::handle_unauthorized(session);
                }
                Err(err) => log::warn!("delete failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, projects, session);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__danger">"This will permanently delete this project."</p>
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
