//! Error handling for the Tourvia Rust client

use std::fmt;
use thiserror::Error;

/// Unified error type for the Tourvia Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors (no usable response received)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx response from the backend, with the server-provided message
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Application-level error embedded in a 2xx response body
    #[error("API error: {0}")]
    Api(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A draft rejected client-side before any request was issued
    #[error("validation error: {0}")]
    Validation(String),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new status error
    pub fn status<T: fmt::Display>(status: u16, msg: T) -> Self {
        Error::Status {
            status,
            message: msg.to_string(),
        }
    }

    /// Create a new application-level error
    pub fn api<T: fmt::Display>(msg: T) -> Self {
        Error::Api(msg.to_string())
    }

    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }
}
