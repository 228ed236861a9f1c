//! Card component for project list items.

use leptos::prelude::*;
use models::Project;

/// A clickable card linking to a project.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let technologies = project.technologies.clone();

    view! {
        <a class="project-card" href=href>
            <span class="project-card__title">{project.title.clone()}</span>
            <p class="project-card__description">{project.description.clone()}</p>
            <div class="project-card__tech">
                {technologies
                    .iter()
                    .map(|tech| view! { <span class="tag">{tech.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </a>
    }
}
