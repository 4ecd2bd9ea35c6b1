//! Landing page: introduction, skills, and calls to action.

use leptos::prelude::*;
use leptos_router::components::A;

const SKILLS: &[&str] = &["Rust", "WebAssembly", "Leptos", "Node.js", "MongoDB", "REST APIs", "Git", "Docker"];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Hi, welcome to my portfolio"</h1>
            <p class="hero__lead">
                "I build web applications end to end, from the database to the pixels. "
                "Here you can browse my projects, read the blog, or get in touch."
            </p>
            <div class="hero__actions">
                <A href="/projects" attr:class="btn btn--primary">"View projects"</A>
                <A href="/contact" attr:class="btn">"Contact me"</A>
            </div>
        </section>
        <section class="skills">
            <h2>"Skills"</h2>
            <div class="chips">
                {SKILLS.iter().map(|skill| view! { <span class="chip">{*skill}</span> }).collect_view()}
            </div>
        </section>
    }
}
