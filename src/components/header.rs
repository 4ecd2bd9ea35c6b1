//! Site header with navigation and the session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, display_name, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let signed_in = move || auth.with(|store| store.is_authenticated());
    let who = move || auth.with(display_name).unwrap_or_default();

    let on_logout = move |_| {
        auth::logout(auth);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <nav class="nav">
                <A href="/" attr:class="nav__brand">"Portfolio"</A>
                <ul class="nav__links">
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/projects">"Projects"</A></li>
                    <li><A href="/blog">"Blog"</A></li>
                    <li><A href="/contact">"Contact"</A></li>
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <li><A href="/login">"Login"</A></li>
                                <li><A href="/register">"Register"</A></li>
                            }
                        }
                    >
                        <li><A href="/admin">"Admin"</A></li>
                        <li>
                            <button class="btn btn--link" on:click=on_logout.clone()>
                                {move || format!("Logout ({})", who())}
                            </button>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
