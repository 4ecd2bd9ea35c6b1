//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthStore`] lives in an `RwSignal` provided at the app root. Async
//! actions take a snapshot, run the store operation against it, and publish
//! the result back only on success, so readers only ever observe whole
//! transitions and a logout made while a request is in flight stands.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{ApiError, RegisterRequest, SessionStore, Storage, Transport, UserProfile};

use crate::util::storage::BrowserStorage;

/// The session store the browser app runs on.
pub type AuthStore = SessionStore<BrowserStorage>;

/// Context handle for the session signal.
pub fn use_auth() -> RwSignal<AuthStore> {
    expect_context::<RwSignal<AuthStore>>()
}

/// Username shown in the header, if someone is signed in.
pub fn display_name<S: Storage>(store: &SessionStore<S>) -> Option<String> {
    let user = store.user()?;
    Some(user.username().or_else(|| user.email()).unwrap_or("me").to_owned())
}

/// Sign in and publish the new session.
pub async fn login<S, T>(
    auth: RwSignal<SessionStore<S>>,
    api: &session::ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<UserProfile, ApiError>
where
    S: Storage + Clone + Send + Sync + 'static,
    T: Transport,
{
    let mut store = auth.get_untracked();
    let user = store.login(api, email, password).await?;
    auth.set(store);
    Ok(user)
}

/// Create an account, sign in, and publish the new session.
pub async fn register<S, T>(
    auth: RwSignal<SessionStore<S>>,
    api: &session::ApiClient<T>,
    data: &RegisterRequest,
) -> Result<UserProfile, ApiError>
where
    S: Storage + Clone + Send + Sync + 'static,
    T: Transport,
{
    let mut store = auth.get_untracked();
    let user = store.register(api, data).await?;
    auth.set(store);
    Ok(user)
}

pub fn logout<S: Storage + Clone + Send + Sync + 'static>(auth: RwSignal<SessionStore<S>>) {
    auth.update(SessionStore::logout);
}

/// Drop the session if `err` says the backend no longer accepts the token.
/// The route guard then moves the user to the login page.
pub fn invalidate_if_rejected<S: Storage + Clone + Send + Sync + 'static>(auth: RwSignal<SessionStore<S>>, err: &ApiError) {
    if err.is_unauthorized() {
        auth.update(SessionStore::invalidate);
    }
}
