//! Admin dashboard: manage projects and blog posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable through `ProtectedRoute`. Every write carries the session
//! bearer; a 401 from any of them invalidates the session, which flips the
//! guard and sends the user to the login page. After each save or delete the
//! affected list is fetched again rather than patched locally.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use session::types::{PostDraft, ProjectDraft};
use session::validate::{PostForm, ProjectForm};
use session::{BlogPost, Project};

use crate::components::post_form::PostFormPanel;
use crate::components::project_form::ProjectFormPanel;
use crate::net::Api;
use crate::pages::loaders::{bearer, load_posts, load_projects};
use crate::state::auth::{display_name, invalidate_if_rejected, use_auth};
use crate::state::loadable::Loadable;
use crate::util::browser::confirm;

pub const CONFIRM_DELETE_PROJECT: &str = "Are you sure you want to delete this project?";
pub const CONFIRM_DELETE_POST: &str = "Are you sure you want to delete this post?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Blog,
}

impl AdminTab {
    pub const ALL: [Self; 2] = [Self::Projects, Self::Blog];

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Blog => "Blog",
        }
    }
}

/// Which editor, if any, is open on a tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Editor<F> {
    #[default]
    Closed,
    Creating,
    Editing { id: String, form: F },
}

impl<F: Clone + Default> Editor<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Resource being edited; `None` means a save creates.
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Editing { id, .. } => Some(id),
            Self::Closed | Self::Creating => None,
        }
    }

    pub fn initial_form(&self) -> F {
        match self {
            Self::Editing { form, .. } => form.clone(),
            Self::Closed | Self::Creating => F::default(),
        }
    }
}

/// Editor state for changing an existing project. Items without a key
/// cannot be addressed and stay read-only.
pub(crate) fn edit_project(project: &Project) -> Option<Editor<ProjectForm>> {
    let id = project.key()?.to_owned();
    Some(Editor::Editing { id, form: ProjectForm::from_draft(&ProjectDraft::from_project(project)) })
}

pub(crate) fn edit_post(post: &BlogPost) -> Option<Editor<PostForm>> {
    let id = post.key()?.to_owned();
    Some(Editor::Editing { id, form: PostForm::from_draft(&PostDraft::from_post(post)) })
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let tab = RwSignal::new(AdminTab::default());
    let who = move || auth.with(display_name).unwrap_or_default();

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <h1>"Admin dashboard"</h1>
                <p>{move || format!("Signed in as {}", who())}</p>
            </header>
            <nav class="tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                AdminTab::Projects => view! { <ProjectsAdmin/> }.into_any(),
                AdminTab::Blog => view! { <PostsAdmin/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProjectsAdmin() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let projects = RwSignal::new(Loadable::<Vec<Project>>::default());
    let editor = RwSignal::new(Editor::<ProjectForm>::Closed);
    let action_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    load_projects(api.clone(), auth, projects);

    let on_save = {
        let api = api.clone();
        Callback::new(move |draft: ProjectDraft| {
            let api = api.clone();
            let target = editor.with_untracked(|e| e.target_id().map(str::to_owned));
            let token = bearer(auth);
            saving.set(true);
            action_error.set(None);
            leptos::task::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => api.update_project(id, &draft, token.as_deref()).await,
                    None => api.create_project(&draft, token.as_deref()).await,
                };
                match result {
                    Ok(_) => {
                        editor.set(Editor::Closed);
                        load_projects(api, auth, projects);
                    }
                    Err(err) => {
                        invalidate_if_rejected(auth, &err);
                        action_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        Callback::new(move |id: String| {
            if !confirm(CONFIRM_DELETE_PROJECT) {
                return;
            }
            let api = api.clone();
            let token = bearer(auth);
            action_error.set(None);
            leptos::task::spawn_local(async move {
                match api.delete_project(&id, token.as_deref()).await {
                    Ok(_) => load_projects(api, auth, projects),
                    Err(err) => {
                        invalidate_if_rejected(auth, &err);
                        action_error.set(Some(format!("Failed to delete project: {err}")));
                    }
                }
            });
        })
    };

    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));

    view! {
        <div class="admin-tab">
            <div class="admin-tab__toolbar">
                <h2>"Projects"</h2>
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Creating)>
                    "+ New project"
                </button>
            </div>
            <Show when=move || action_error.get().is_some()>
                <p class="form-error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                let current = editor.get();
                current
                    .is_open()
                    .then(|| {
                        view! {
                            <ProjectFormPanel
                                initial=current.initial_form()
                                editing=current.target_id().is_some()
                                busy=saving
                                on_save=on_save
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}
            <Show
                when=move || !projects.with(|p| p.loading)
                fallback=|| view! { <p class="loading">"Loading projects..."</p> }
            >
                <Show when=move || projects.with(|p| p.error.is_some())>
                    <p class="page-error">{move || projects.with(|p| p.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || !projects.with(|p| p.is_empty())
                    fallback=|| view! { <p class="empty">"No projects yet."</p> }
                >
                    <ul class="admin-list">
                        {move || {
                            projects
                                .get()
                                .items()
                                .into_iter()
                                .map(|project| {
                                    let edit = edit_project(&project);
                                    let key = project.key().map(str::to_owned);
                                    let editable = edit.is_some();
                                    let deletable = key.is_some();
                                    view! {
                                        <li class="admin-list__item">
                                            <div>
                                                <strong>{project.title.clone()}</strong>
                                                <p>{project.description.clone()}</p>
                                            </div>
                                            <div class="admin-list__actions">
                                                <button
                                                    class="btn"
                                                    disabled=!editable
                                                    on:click=move |_| {
                                                        if let Some(next) = edit.clone() {
                                                            editor.set(next);
                                                        }
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=!deletable
                                                    on:click=move |_| {
                                                        if let Some(id) = key.clone() {
                                                            on_delete.run(id);
                                                        }
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn PostsAdmin() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = use_auth();
    let posts = RwSignal::new(Loadable::<Vec<BlogPost>>::default());
    let editor = RwSignal::new(Editor::<PostForm>::Closed);
    let action_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    load_posts(api.clone(), auth, posts);

    let on_save = {
        let api = api.clone();
        Callback::new(move |draft: PostDraft| {
            let api = api.clone();
            let target = editor.with_untracked(|e| e.target_id().map(str::to_owned));
            let token = bearer(auth);
            saving.set(true);
            action_error.set(None);
            leptos::task::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => api.update_post(id, &draft, token.as_deref()).await,
                    None => api.create_post(&draft, token.as_deref()).await,
                };
                match result {
                    Ok(_) => {
                        editor.set(Editor::Closed);
                        load_posts(api, auth, posts);
                    }
                    Err(err) => {
                        invalidate_if_rejected(auth, &err);
                        action_error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        Callback::new(move |id: String| {
            if !confirm(CONFIRM_DELETE_POST) {
                return;
            }
            let api = api.clone();
            let token = bearer(auth);
            action_error.set(None);
            leptos::task::spawn_local(async move {
                match api.delete_post(&id, token.as_deref()).await {
                    Ok(_) => load_posts(api, auth, posts),
                    Err(err) => {
                        invalidate_if_rejected(auth, &err);
                        action_error.set(Some(format!("Failed to delete post: {err}")));
                    }
                }
            });
        })
    };

    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));

    view! {
        <div class="admin-tab">
            <div class="admin-tab__toolbar">
                <h2>"Blog posts"</h2>
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Creating)>
                    "+ New post"
                </button>
            </div>
            <Show when=move || action_error.get().is_some()>
                <p class="form-error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                let current = editor.get();
                current
                    .is_open()
                    .then(|| {
                        view! {
                            <PostFormPanel
                                initial=current.initial_form()
                                editing=current.target_id().is_some()
                                busy=saving
                                on_save=on_save
                                on_cancel=on_cancel
                            />
                        }
                    })
            }}
            <Show
                when=move || !posts.with(|p| p.loading)
                fallback=|| view! { <p class="loading">"Loading posts..."</p> }
            >
                <Show when=move || posts.with(|p| p.error.is_some())>
                    <p class="page-error">{move || posts.with(|p| p.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || !posts.with(|p| p.is_empty())
                    fallback=|| view! { <p class="empty">"No posts yet."</p> }
                >
                    <ul class="admin-list">
                        {move || {
                            posts
                                .get()
                                .items()
                                .into_iter()
                                .map(|post| {
                                    let edit = edit_post(&post);
                                    let key = post.key().map(str::to_owned);
                                    let editable = edit.is_some();
                                    let deletable = key.is_some();
                                    let summary = post.summary();
                                    view! {
                                        <li class="admin-list__item">
                                            <div>
                                                <strong>{post.title.clone()}</strong>
                                                <p>{summary}</p>
                                            </div>
                                            <div class="admin-list__actions">
                                                <button
                                                    class="btn"
                                                    disabled=!editable
                                                    on:click=move |_| {
                                                        if let Some(next) = edit.clone() {
                                                            editor.set(next);
                                                        }
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    disabled=!deletable
                                                    on:click=move |_| {
                                                        if let Some(id) = key.clone() {
                                                            on_delete.run(id);
                                                        }
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
