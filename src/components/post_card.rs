//! Card for one post in the blog list.

use leptos::prelude::*;
use leptos_router::components::A;
use session::BlogPost;

use crate::util::format::display_date_opt;

#[component]
pub fn PostCard(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.key().unwrap_or_default());
    let date = display_date_opt(post.published_at());
    let author = post.author_name().map(str::to_owned);
    let summary = post.summary();

    view! {
        <article class="post-card">
            <h2>
                <A href=href.clone()>{post.title}</A>
            </h2>
            <div class="post-card__meta">
                <span>{date}</span>
                {author.map(|name| view! { <span>" · " {name}</span> })}
            </div>
            <p class="post-card__excerpt">{summary}</p>
            <div class="chips">
                {post.tags.into_iter().map(|tag| view! { <span class="chip">{tag}</span> }).collect_view()}
            </div>
            <A href=href attr:class="post-card__more">"Read more →"</A>
        </article>
    }
}
