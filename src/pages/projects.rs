//! Public project grid.

use leptos::prelude::*;
use session::Project;

use crate::components::project_card::ProjectCard;
use crate::net::Api;
use crate::pages::loaders::load_projects;
use crate::state::auth::use_auth;
use crate::state::loadable::Loadable;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let projects = RwSignal::new(Loadable::<Vec<Project>>::default());
    load_projects(api, auth, projects);

    view! {
        <section class="projects-page">
            <h1>"Projects"</h1>
            <Show when=move || projects.with(|p| p.error.is_some())>
                <p class="page-error">{move || projects.with(|p| p.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !projects.with(|p| p.loading)
                fallback=|| view! { <p class="loading">"Loading projects..."</p> }
            >
                <Show
                    when=move || !projects.with(|p| p.is_empty())
                    fallback=|| view! { <p class="empty">"No projects yet."</p> }
                >
                    <div class="projects-grid">
                        {move || {
                            projects
                                .get()
                                .items()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
