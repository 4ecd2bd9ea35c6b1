//! Wrapper that only renders its children for a signed-in user.
//!
//! DESIGN
//! ======
//! The decision comes from `session::guard`, re-evaluated whenever the
//! session signal changes. A logout or an invalidated token while the admin
//! page is open therefore redirects immediately.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::{AppRoute, GuardDecision, guard};

use crate::state::auth::use_auth;

/// Render `children` for the admin route, or a placeholder / redirect.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| auth.with(|store| guard(store.state(), &AppRoute::Admin)));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! { <div class="loading">"Loading..."</div> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
