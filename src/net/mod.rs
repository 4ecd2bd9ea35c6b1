//! Networking glue for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session::ApiClient` owns request shaping and response decoding; this
//! module only supplies the `fetch`-backed transport it runs on.

pub mod transport;

/// The REST client every page uses.
pub type Api = session::ApiClient<transport::BrowserTransport>;

/// Client pointed at the configured backend.
pub fn api() -> Api {
    session::ApiClient::new(crate::config::api_base_url(), transport::BrowserTransport)
}
