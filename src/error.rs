//! Unified SDK error types.

use thiserror::Error;

/// Result alias used throughout the SDK.
pub type LbsResult<T> = Result<T, LbsError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum LbsError {
    /// Blank or missing caller input. Raised before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider answered with a non-zero status, or with a `result`
    /// that does not match the expected shape.
    #[error("Provider error {status}: {message}")]
    Provider { status: i32, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LbsError {
    pub(crate) fn blank(field: &str) -> Self {
        LbsError::Validation(format!("{} cannot be blank", field))
    }

    /// Status code reported by the provider, if this is a provider error.
    pub fn provider_status(&self) -> Option<i32> {
        match self {
            LbsError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] serde_urlencoded::ser::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}
