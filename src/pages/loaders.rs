//! Fetch helpers shared by the public pages and the admin dashboard.
//!
//! Each loader flips its target to loading, reads the bearer at call time,
//! and settles the target when the response lands. A page that unmounts
//! first simply never sees the result.

#[cfg(test)]
#[path = "loaders_test.rs"]
mod loaders_test;

use leptos::prelude::*;
use session::{BlogPost, Project};

use crate::net::Api;
use crate::state::auth::AuthStore;
use crate::state::loadable::Loadable;

/// Bearer for a request issued right now.
pub(crate) fn bearer(auth: RwSignal<AuthStore>) -> Option<String> {
    auth.with_untracked(|store| store.token().map(str::to_owned))
}

pub(crate) fn load_projects(api: Api, auth: RwSignal<AuthStore>, target: RwSignal<Loadable<Vec<Project>>>) {
    target.update(Loadable::begin);
    let token = bearer(auth);
    leptos::task::spawn_local(async move {
        let result = api.list_projects(token.as_deref()).await;
        if let Err(err) = &result {
            log::warn!("project list failed: {err}");
        }
        target.try_update(|state| state.settle(result));
    });
}

pub(crate) fn load_posts(api: Api, auth: RwSignal<AuthStore>, target: RwSignal<Loadable<Vec<BlogPost>>>) {
    target.update(Loadable::begin);
    let token = bearer(auth);
    leptos::task::spawn_local(async move {
        let result = api.list_posts(token.as_deref()).await;
        if let Err(err) = &result {
            log::warn!("post list failed: {err}");
        }
        target.try_update(|state| state.settle(result));
    });
}

/// True while the page still shows the post `id` was requested for.
pub(crate) fn still_wanted(post_id: Signal<String>, id: &str) -> bool {
    post_id.try_get_untracked().is_some_and(|current| current == id)
}

/// Fetch the post `post_id` names right now. A response that lands after
/// the reader has moved on to another post is dropped.
pub(crate) fn load_post(api: Api, auth: RwSignal<AuthStore>, post_id: Signal<String>, target: RwSignal<Loadable<BlogPost>>) {
    let id = post_id.get_untracked();
    target.update(Loadable::begin);
    let token = bearer(auth);
    leptos::task::spawn_local(async move {
        let result = api.get_post(&id, token.as_deref()).await;
        if !still_wanted(post_id, &id) {
            log::debug!("dropping stale post {id}");
            return;
        }
        target.try_update(|state| state.settle(result));
    });
}
