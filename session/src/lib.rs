//! Session and REST client core for the portfolio site.
//!
//! This crate owns everything stateful about talking to the portfolio
//! backend: the request wrapper, the wire types, the session store with its
//! durable mirror, and the route guard. It has no browser or runtime
//! dependency; the `portfolio` web crate and the `cli` crate plug in their
//! own [`http::Transport`] and [`storage::Storage`].
//!
//! LAYERING
//! ========
//! `http` -> `api` (typed endpoints) -> `session` (credentials lifecycle)
//! -> `guard` (navigation decisions). `validate` sits beside them and never
//! touches the network.

pub mod api;
pub mod error;
pub mod guard;
pub mod http;
pub mod session;
pub mod storage;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod types;
pub mod validate;

pub use api::ApiClient;
pub use error::{ApiError, StorageError};
pub use guard::{AppRoute, GuardDecision, guard};
pub use http::{HttpRequest, HttpResponse, Method, RequestOptions, Transport};
pub use session::{Credentials, SessionState, SessionStore};
pub use storage::{MemoryStorage, Storage};
pub use types::{AuthResponse, BlogPost, Comment, ContactMessage, LoginRequest, Project, RegisterRequest, UserProfile};
