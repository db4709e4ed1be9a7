//! Authentication and session management for Tourvia
//!
//! Sessions are cookie-based and live in the shared reqwest cookie store;
//! the backend additionally issues a bearer token to mobile-style clients,
//! held here and attached by every sub-client when present.

mod types;

use reqwest::Client;
use std::sync::{Arc, Mutex};

use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Bearer token shared across sub-clients
pub(crate) type SharedToken = Arc<Mutex<Option<String>>>;

/// Client for authentication and session management
pub struct Auth {
    /// Prefixed base URL for the backend
    base: String,

    /// HTTP client used for requests
    client: Client,

    /// The current bearer token, if one was issued
    token: SharedToken,
}

impl Auth {
    /// Create a new Auth client
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// Rejected credentials on the auth routes surface as [`Error::Auth`]
    /// rather than a bare status error
    fn credential_error(err: Error) -> Error {
        match err {
            Error::Status {
                status: 401 | 403,
                message,
            } => Error::auth(message),
            other => other,
        }
    }

    /// Sign in with email and password.
    ///
    /// The session cookie is captured by the shared cookie store; a bearer
    /// token in the response body is retained for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, Error> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = Fetch::post(&self.client, &self.url("/login"))
            .json(&credentials)?
            .execute::<AuthResponse>()
            .await
            .map_err(Self::credential_error)?;

        if let Some(ref token) = result.token {
            let mut current = self.token.lock().unwrap();
            *current = Some(token.clone());
        }

        Ok(result)
    }

    /// Create a new account
    pub async fn signup(&self, draft: &SignupDraft) -> Result<AuthResponse, Error> {
        let result = Fetch::post(&self.client, &self.url("/signup"))
            .json(draft)?
            .execute::<AuthResponse>()
            .await
            .map_err(Self::credential_error)?;

        if let Some(ref token) = result.token {
            let mut current = self.token.lock().unwrap();
            *current = Some(token.clone());
        }

        Ok(result)
    }

    /// Sign out the current user and drop the bearer token
    pub async fn logout(&self) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url("/logout"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await?;

        let mut current = self.token.lock().unwrap();
        *current = None;

        Ok(())
    }

    /// Fetch the currently authenticated user
    pub async fn current_user(&self) -> Result<User, Error> {
        Fetch::get(&self.client, &self.url("/me"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<User>()
            .await
    }

    /// Get the current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.bearer()
    }

    /// Replace the bearer token (e.g. one restored from device storage)
    pub fn set_token(&self, token: Option<String>) {
        let mut current = self.token.lock().unwrap();
        *current = token;
    }
}
