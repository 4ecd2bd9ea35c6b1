//! Create/edit form for a project.
//!
//! The form owns its raw field signals and validation. It hands a clean
//! `ProjectDraft` to `on_save`; the admin page does the network call.

use leptos::prelude::*;
use session::types::ProjectDraft;
use session::validate::{self, ProjectForm};

#[component]
pub fn ProjectFormPanel(
    initial: ProjectForm,
    editing: bool,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<ProjectDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let technologies = RwSignal::new(initial.technologies);
    let live_url = RwSignal::new(initial.live_url);
    let github_url = RwSignal::new(initial.github_url);
    let image = RwSignal::new(initial.image);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ProjectForm {
            title: title.get(),
            description: description.get(),
            technologies: technologies.get(),
            live_url: live_url.get(),
            github_url: github_url.get(),
            image: image.get(),
        };
        match validate::project(&form) {
            Ok(draft) => {
                error.set(None);
                on_save.run(draft);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h3>{if editing { "Edit project" } else { "New project" }}</h3>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <label>
                "Title *"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description *"
                <textarea
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Technologies (comma separated)"
                <input
                    type="text"
                    placeholder="Rust, Leptos, WebAssembly"
                    prop:value=move || technologies.get()
                    on:input=move |ev| technologies.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Live URL"
                <input
                    type="url"
                    prop:value=move || live_url.get()
                    on:input=move |ev| live_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "GitHub URL"
                <input
                    type="url"
                    prop:value=move || github_url.get()
                    on:input=move |ev| github_url.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Image URL"
                <input
                    type="url"
                    prop:value=move || image.get()
                    on:input=move |ev| image.set(event_target_value(&ev))
                />
            </label>
            <div class="admin-form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
