//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header, protected_route::ProtectedRoute};
use crate::net::{self, Api};
use crate::pages::{
    admin::AdminPage, blog::BlogPage, blog_post::BlogPostPage, contact::ContactPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, projects::ProjectsPage, register::RegisterPage,
};
use crate::state::auth::AuthStore;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the session signal and the REST client, rehydrates the session
/// from `localStorage` once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthStore::new(BrowserStorage));
    provide_context(auth);
    provide_context::<Api>(net::api());

    // Runs once after mount; until then guarded routes show a placeholder.
    Effect::new(move || {
        if auth.with_untracked(AuthStore::is_loading) {
            auth.update(AuthStore::init);
        }
    });

    view! {
        <Title text="Portfolio"/>

        <Router>
            <Header/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPostPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute><AdminPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
