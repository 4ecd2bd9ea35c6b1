//! `fetch` transport via `gloo-net`.
//!
//! Client-side (csr): real HTTP calls.
//! Native builds (tests, tooling): every send fails with a transport error,
//! since there is no browser to talk through.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use session::{ApiError, HttpRequest, HttpResponse, Transport};

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(request: &HttpRequest) -> String {
    format!("{} {}: no browser transport in this build", request.method.as_str(), request.url)
}

/// Stateless handle on the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            let builder = request
                .headers
                .iter()
                .fold(builder, |builder, (name, value)| builder.header(name, value));
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = built.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Transport(unavailable_message(&request)))
        }
    }
}
