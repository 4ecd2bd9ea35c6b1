//! Request building, header policy, and response normalization.
//!
//! DESIGN
//! ======
//! The wire itself sits behind [`Transport`] so the same request policy runs
//! over `gloo-net` in the browser, `reqwest` in the CLI, and a recording mock
//! in tests. Everything that decides *what* goes on the wire (headers, URL,
//! body) and *how* a response becomes a value or an [`ApiError`] lives here
//! as plain functions.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become `ApiError::Api` with the body's `message`
//! field, or [`GENERIC_FAILURE_MESSAGE`] when the body has none. Transports
//! report "no response" as `ApiError::Transport`. Nothing is retried.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, GENERIC_FAILURE_MESSAGE};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs used by the portfolio backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Caller-side knobs for a single request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Extra headers; these override the JSON default on a name clash.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully resolved request, ready for a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of whatever the server sent back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One fire-and-await exchange with the backend.
///
/// Futures are `?Send`: the browser transport holds JS values across awaits.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever response arrived.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response was received. A
    /// response with a failure status is still `Ok` at this layer.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Join a base URL and an endpoint path without doubling or dropping `/`.
#[must_use]
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Default JSON content type, then caller headers, then the bearer token.
#[must_use]
pub fn merge_headers(extra: &[(String, String)], bearer: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())];
    for (name, value) in extra {
        set_header(&mut headers, name, value);
    }
    if let Some(token) = bearer.filter(|token| !token.is_empty()) {
        set_header(&mut headers, AUTHORIZATION, &format!("Bearer {token}"));
    }
    headers
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        Some(slot) => value.clone_into(&mut slot.1),
        None => headers.push((name.to_owned(), value.to_owned())),
    }
}

/// Resolve `options` against `base_url` into a wire request.
#[must_use]
pub fn build_request(base_url: &str, endpoint: &str, options: RequestOptions, bearer: Option<&str>) -> HttpRequest {
    HttpRequest {
        method: options.method,
        url: endpoint_url(base_url, endpoint),
        headers: merge_headers(&options.headers, bearer),
        body: options.body.map(|body| body.to_string()),
    }
}

/// Turn a response into `R`, or into the error the status implies.
///
/// An empty success body decodes as JSON `null`.
///
/// # Errors
///
/// `ApiError::Api` for non-success statuses, `ApiError::Decode` when a
/// success body does not fit `R`.
pub fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        let message = failure_message(&response.body);
        log::debug!("request failed with status {}: {message}", response.status);
        return Err(ApiError::Api { status: response.status, message });
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the `message` field from an error body, falling back to a generic text.
#[must_use]
pub fn failure_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_FAILURE_MESSAGE.to_owned();
    };
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned(), ToOwned::to_owned)
}
