//! Card for one project in the projects grid.

use leptos::prelude::*;
use session::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let image = project.image_link().map(str::to_owned);
    let live = project.live_link().map(str::to_owned);
    let source = project.source_link().map(str::to_owned);
    let title = project.title.clone();

    view! {
        <article class="project-card">
            {image.map(|src| view! { <img class="project-card__image" src=src alt=title.clone()/> })}
            <div class="project-card__body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="chips">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| view! { <span class="chip">{tech}</span> })
                        .collect_view()}
                </div>
                <div class="project-card__links">
                    {live
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer">"Live demo"</a>
                            }
                        })}
                    {source
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer">"Source"</a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
