//! Configuration options for the Tourvia client

use std::env;
use std::time::Duration;

use crate::error::Error;

/// Environment variable holding the backend base URL
pub const API_URL_VAR: &str = "TOURVIA_API_URL";

/// Environment variable holding an optional pre-issued bearer token
pub const API_TOKEN_VAR: &str = "TOURVIA_API_TOKEN";

/// Configuration options for the Tourvia client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout applied to every HTTP call
    pub request_timeout: Option<Duration>,

    /// The path prefix all resource routes live under
    pub api_prefix: String,

    /// Whether the underlying HTTP client keeps a cookie session
    pub cookie_session: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            api_prefix: "/api".to_string(),
            cookie_session: true,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the path prefix for resource routes
    pub fn with_api_prefix(mut self, value: &str) -> Self {
        self.api_prefix = value.to_string();
        self
    }

    /// Set whether a cookie session is kept across requests
    pub fn with_cookie_session(mut self, value: bool) -> Self {
        self.cookie_session = value;
        self
    }
}

/// Environment-derived connection settings
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// The backend base URL
    pub api_url: String,

    /// An optional pre-issued bearer token
    pub api_token: Option<String>,
}

impl EnvConfig {
    /// Load connection settings from the process environment.
    ///
    /// `TOURVIA_API_URL` is required; `TOURVIA_API_TOKEN` is optional.
    pub fn from_env() -> Result<Self, Error> {
        let api_url = env::var(API_URL_VAR)
            .map_err(|_| Error::general(format!("{} is not set", API_URL_VAR)))?;
        let api_token = env::var(API_TOKEN_VAR).ok();

        Ok(Self { api_url, api_token })
    }
}
