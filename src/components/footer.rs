//! Site footer.

use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://www.linkedin.com"),
    ("Twitter", "https://twitter.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2024 Portfolio. All rights reserved."</p>
            <div class="footer__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <a href=*href target="_blank" rel="noopener noreferrer">
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
