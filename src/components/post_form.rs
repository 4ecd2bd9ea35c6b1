//! Create/edit form for a blog post.

use leptos::prelude::*;
use session::types::PostDraft;
use session::validate::{self, PostForm};

#[component]
pub fn PostFormPanel(
    initial: PostForm,
    editing: bool,
    #[prop(into)] busy: Signal<bool>,
    on_save: Callback<PostDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title);
    let excerpt = RwSignal::new(initial.excerpt);
    let content = RwSignal::new(initial.content);
    let tags = RwSignal::new(initial.tags);
    let author = RwSignal::new(initial.author);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = PostForm {
            title: title.get(),
            excerpt: excerpt.get(),
            content: content.get(),
            tags: tags.get(),
            author: author.get(),
        };
        match validate::post(&form) {
            Ok(draft) => {
                error.set(None);
                on_save.run(draft);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="admin-form" on:submit=on_submit>
            <h3>{if editing { "Edit post" } else { "New post" }}</h3>
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
                "Excerpt"
                <textarea
                    rows="2"
                    prop:value=move || excerpt.get()
                    on:input=move |ev| excerpt.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Content *"
                <textarea
                    rows="10"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label>
                "Tags (comma separated)"
                <input
                    type="text"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Author"
                <input
                    type="text"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
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
