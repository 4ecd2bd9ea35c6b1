//! Contact form.

use leptos::prelude::*;
use session::ContactMessage;
use session::validate;

use crate::net::Api;
use crate::pages::loaders::bearer;
use crate::state::auth::use_auth;
use crate::util::browser::{CONTACT_FLASH_MS, flash};

pub const CONTACT_SENT: &str = "Thanks for your message! I will get back to you soon.";

#[component]
pub fn ContactPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        email.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = ContactMessage { name: name.get(), email: email.get(), subject: subject.get(), message: message.get() };
        let clean = match validate::contact(&form) {
            Ok(clean) => clean,
            Err(text) => {
                error.set(Some(text.to_owned()));
                return;
            }
        };
        error.set(None);
        success.set(None);
        busy.set(true);

        let api = api.clone();
        let token = bearer(auth);
        leptos::task::spawn_local(async move {
            match api.submit_contact(&clean, token.as_deref()).await {
                Ok(_) => {
                    reset();
                    flash(success, CONTACT_SENT, CONTACT_FLASH_MS);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="contact-page">
            <h1>"Contact"</h1>
            <p>"Have a question or a project in mind? Send me a message."</p>
            <Show when=move || success.get().is_some()>
                <p class="form-success">{move || success.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <form class="contact-form" on:submit=on_submit>
                <label>
                    "Name *"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email *"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Subject"
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message *"
                    <textarea
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </section>
    }
}
