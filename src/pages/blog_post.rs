//! Single post with its comments and the comment form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Comments are only accepted from signed-in users; anonymous readers get a
//! login prompt instead of the form. After a comment lands the post is
//! fetched again so the list reflects what the server stored.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use session::types::NewComment;
use session::{BlogPost, Comment, validate};

use crate::net::Api;
use crate::pages::loaders::{bearer, load_post};
use crate::state::auth::{invalidate_if_rejected, use_auth};
use crate::state::loadable::Loadable;
use crate::util::browser::{COMMENT_FLASH_MS, flash};
use crate::util::format::{display_date, display_date_time};

pub const COMMENT_POSTED: &str = "Comment posted!";

/// Header line under the title: date with time, then author when known.
pub(crate) fn byline(post: &BlogPost) -> String {
    let date = post.published_at().map(display_date_time).unwrap_or_default();
    match post.author_name() {
        Some(author) if date.is_empty() => author.to_owned(),
        Some(author) => format!("{date} · {author}"),
        None => date,
    }
}

pub(crate) fn comment_heading(count: usize) -> String {
    format!("Comments ({count})")
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let author = comment.author_name().to_owned();
    let date = comment.published_at().map(display_date).unwrap_or_default();
    view! {
        <li class="comment">
            <div class="comment__meta">
                <strong>{author}</strong>
                <span>{date}</span>
            </div>
            <p>{comment.content}</p>
        </li>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let params = use_params_map();
    let post_id: Signal<String> = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default())).into();
    let post = RwSignal::new(Loadable::<BlogPost>::default());

    {
        let api = api.clone();
        Effect::new(move || {
            post_id.track();
            post.update(Loadable::reset);
            load_post(api.clone(), auth, post_id, post);
        });
    }

    let comment = RwSignal::new(String::new());
    let comment_error = RwSignal::new(None::<String>);
    let comment_success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let content = match validate::comment(&comment.get()) {
            Ok(content) => content,
            Err(message) => {
                comment_error.set(Some(message.to_owned()));
                return;
            }
        };
        let payload = auth.with_untracked(|store| NewComment::by(store.user(), content));
        let id = post_id.get_untracked();
        comment_error.set(None);
        submitting.set(true);

        let api = api.clone();
        let token = bearer(auth);
        leptos::task::spawn_local(async move {
            match api.add_comment(&id, &payload, token.as_deref()).await {
                Ok(_) => {
                    comment.set(String::new());
                    flash(comment_success, COMMENT_POSTED, COMMENT_FLASH_MS);
                    load_post(api, auth, post_id, post);
                }
                Err(err) => {
                    invalidate_if_rejected(auth, &err);
                    comment_error.set(Some(err.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    let on_comment = StoredValue::new(on_comment);
    let signed_in = move || auth.with(|store| store.is_authenticated());

    view! {
        <section class="post-page">
            <A href="/blog" attr:class="post-page__back">"← Back to blog"</A>
            <Show
                when=move || post.with(|p| p.data.is_some())
                fallback=move || {
                    view! {
                        <p class=move || if post.with(|p| p.error.is_some()) { "page-error" } else { "loading" }>
                            {move || post.with(|p| p.error.clone().unwrap_or_else(|| "Loading post...".to_owned()))}
                        </p>
                    }
                }
            >
                {move || {
                    post.get()
                        .data
                        .map(|current| {
                            let comments = current.comments.clone();
                            view! {
                                <article class="post">
                                    <h1>{current.title.clone()}</h1>
                                    <div class="post__meta">{byline(&current)}</div>
                                    <div class="chips">
                                        {current
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="chip">{tag.clone()}</span> })
                                            .collect_view()}
                                    </div>
                                    <div class="post__content">{current.content.clone()}</div>
                                </article>
                                <section class="comments">
                                    <h2>{comment_heading(comments.len())}</h2>
                                    <ul class="comment-list">
                                        {comments
                                            .into_iter()
                                            .map(|c| view! { <CommentItem comment=c/> })
                                            .collect_view()}
                                    </ul>
                                </section>
                            }
                        })
                }}
                <Show when=move || comment_success.get().is_some()>
                    <p class="form-success">{move || comment_success.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <p class="comments__prompt">
                                <A href="/login">"Log in"</A>
                                " to leave a comment."
                            </p>
                        }
                    }
                >
                    <form class="comment-form" on:submit=move |ev| on_comment.with_value(|submit| submit(ev))>
                        <Show when=move || comment_error.get().is_some()>
                            <p class="form-error">{move || comment_error.get().unwrap_or_default()}</p>
                        </Show>
                        <textarea
                            rows="4"
                            placeholder="Write a comment..."
                            prop:value=move || comment.get()
                            on:input=move |ev| comment.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Posting..." } else { "Post comment" }}
                        </button>
                    </form>
                </Show>
            </Show>
        </section>
    }
}
