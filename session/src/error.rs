//! Error types shared by the HTTP client and the session store.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback message used when a failed response carries no usable `message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Errors produced by a request against the portfolio backend.
///
/// `Api` displays as the bare server message so views can show
/// `err.to_string()` directly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, CORS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of an API error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// True when the backend rejected the caller's credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Errors from a durable storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend refused the write (quota, permissions, missing window).
    #[error("storage write failed for `{key}`: {reason}")]
    Write { key: String, reason: String },

    /// The value could not be serialized for storage.
    #[error("storage encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
