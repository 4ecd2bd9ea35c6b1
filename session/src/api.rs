//! Typed operations against the portfolio REST backend.
//!
//! Every call takes the bearer token explicitly so the caller decides, at
//! call time, whether the request is authenticated. The session store reads
//! its own token into these calls; views pass `store.token()`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{Method, RequestOptions, Transport, build_request, decode_response};
use crate::types::{
    AuthResponse, BlogPost, ContactMessage, LoginRequest, NewComment, PostDraft, Project, ProjectDraft,
    RegisterRequest,
};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("request body: {e}")))
}

fn project_path(id: &str) -> String {
    format!("/projects/{id}")
}

fn post_path(id: &str) -> String {
    format!("/blog/{id}")
}

fn comments_path(post_id: &str) -> String {
    format!("/blog/{post_id}/comments")
}

/// REST client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and decode the JSON result.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrives, `Api` for a failure status,
    /// `Decode` when the success body does not fit `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        bearer: Option<&str>,
    ) -> Result<R, ApiError> {
        let request = build_request(&self.base_url, endpoint, options, bearer);
        let method = request.method;
        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|e| log::warn!("{} {endpoint}: {e}", method.as_str()))?;
        decode_response(response)
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: &str, bearer: Option<&str>) -> Result<R, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Get), bearer).await
    }

    async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, ApiError> {
        let options = RequestOptions::new(method).with_body(to_body(body)?);
        self.request(endpoint, options, bearer).await
    }

    async fn delete(&self, endpoint: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Delete), bearer).await
    }

    // =========================================================================
    // Projects
    // =========================================================================

    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_projects(&self, bearer: Option<&str>) -> Result<Vec<Project>, ApiError> {
        self.get("/projects", bearer).await
    }

    /// `GET /projects/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_project(&self, id: &str, bearer: Option<&str>) -> Result<Project, ApiError> {
        self.get(&project_path(id), bearer).await
    }

    /// `POST /projects`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_project(&self, draft: &ProjectDraft, bearer: Option<&str>) -> Result<Project, ApiError> {
        self.send_json(Method::Post, "/projects", draft, bearer).await
    }

    /// `PUT /projects/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        bearer: Option<&str>,
    ) -> Result<Project, ApiError> {
        self.send_json(Method::Put, &project_path(id), draft, bearer).await
    }

    /// `DELETE /projects/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_project(&self, id: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.delete(&project_path(id), bearer).await
    }

    // =========================================================================
    // Blog
    // =========================================================================

    /// `GET /blog`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_posts(&self, bearer: Option<&str>) -> Result<Vec<BlogPost>, ApiError> {
        self.get("/blog", bearer).await
    }

    /// `GET /blog/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_post(&self, id: &str, bearer: Option<&str>) -> Result<BlogPost, ApiError> {
        self.get(&post_path(id), bearer).await
    }

    /// `POST /blog`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_post(&self, draft: &PostDraft, bearer: Option<&str>) -> Result<BlogPost, ApiError> {
        self.send_json(Method::Post, "/blog", draft, bearer).await
    }

    /// `PUT /blog/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_post(&self, id: &str, draft: &PostDraft, bearer: Option<&str>) -> Result<BlogPost, ApiError> {
        self.send_json(Method::Put, &post_path(id), draft, bearer).await
    }

    /// `DELETE /blog/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_post(&self, id: &str, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.delete(&post_path(id), bearer).await
    }

    /// `POST /blog/{id}/comments`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn add_comment(&self, post_id: &str, comment: &NewComment, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.send_json(Method::Post, &comments_path(post_id), comment, bearer).await
    }

    // =========================================================================
    // Contact and users
    // =========================================================================

    /// `POST /contact`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn submit_contact(&self, message: &ContactMessage, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.send_json(Method::Post, "/contact", message, bearer).await
    }

    /// `POST /users/register`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn register(&self, data: &RegisterRequest, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::Post, "/users/register", data, bearer).await
    }

    /// `POST /users/login`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn login(&self, credentials: &LoginRequest, bearer: Option<&str>) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::Post, "/users/login", credentials, bearer).await
    }

    /// `GET /users/me`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn current_user(&self, bearer: Option<&str>) -> Result<Value, ApiError> {
        self.get("/users/me", bearer).await
    }
}
