//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the terminal application.
//!
//! ## Error Categories
//!
//! - **Transport**: the request never produced a response (DNS, refused connection, timeout)
//! - **Status**: the server answered with a non-success status code
//! - **Decode**: the response body did not match the expected JSON shape
//! - **Cache**: the query cache could not hand back a value of the requested type
//! - **Config**: an environment override could not be parsed
//!
//! ## Why `Clone`
//!
//! A failed in-flight query is delivered to every subscriber of that query key,
//! so the error has to be cheap to clone. Source errors are flattened into their
//! display strings at the API boundary.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use terminal::core::error::AppError;
//!
//! fn parse_retry(raw: &str) -> Result<u32, AppError> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid retry count: {}", raw)))
//! }
//!
//! assert!(parse_retry("two").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use terminal::core::error::AppError;
///
/// let err = AppError::Status { status: 503, url: "https://api.llama.fi/v2/chains".to_string() };
/// assert_eq!(err.to_string(), "HTTP 503 from https://api.llama.fi/v2/chains");
/// assert!(AppError::Transport("timed out".to_string()).is_transport());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Network failure before any response arrived.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not decode into the expected type.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Query cache failure (type mismatch on a key, aborted fetch task).
    #[error("Cache error: {0}")]
    Cache(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this failure happened in transport (unreachable host, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
