//! Public list of blog posts.

use leptos::prelude::*;
use session::BlogPost;

use crate::components::post_card::PostCard;
use crate::net::Api;
use crate::pages::loaders::load_posts;
use crate::state::auth::use_auth;
use crate::state::loadable::Loadable;

#[component]
pub fn BlogPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let posts = RwSignal::new(Loadable::<Vec<BlogPost>>::default());
    load_posts(api, auth, posts);

    view! {
        <section class="blog-page">
            <h1>"Blog"</h1>
            <Show when=move || posts.with(|p| p.error.is_some())>
                <p class="page-error">{move || posts.with(|p| p.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !posts.with(|p| p.loading)
                fallback=|| view! { <p class="loading">"Loading posts..."</p> }
            >
                <Show
                    when=move || !posts.with(|p| p.is_empty())
                    fallback=|| view! { <p class="empty">"No posts yet."</p> }
                >
                    <div class="post-list">
                        {move || {
                            posts
                                .get()
                                .items()
                                .into_iter()
                                .map(|post| view! { <PostCard post=post/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
