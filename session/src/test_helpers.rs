//! Shared doubles for unit tests: a scripted transport and a storage that
//! refuses writes.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::error::{ApiError, StorageError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::storage::{MemoryStorage, Storage};

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_string() }))
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_owned() }))
    }

    pub fn fail(self, reason: &str) -> Self {
        self.push(Err(ApiError::Transport(reason.to_owned())))
    }

    fn push(self, outcome: Result<HttpResponse, ApiError>) -> Self {
        self.responses.lock().unwrap_or_else(PoisonError::into_inner).push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().last().cloned()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }
}

/// Storage that reads from an inner map but refuses writes to `deny_key`.
#[derive(Clone, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub deny_key: &'static str,
}

impl Storage for FlakyStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.deny_key {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}
