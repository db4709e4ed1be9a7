//! HTTP request plumbing shared by every Tourvia sub-client
//!
//! All requests funnel through [`FetchBuilder`], which normalizes the three
//! failure shapes the backend produces (transport errors, non-2xx statuses
//! with a JSON error body, and an `error` key embedded in a 2xx body) into
//! [`Error`] variants at this single boundary.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{multipart, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use url::Url;

use crate::error::Error;

enum Body {
    Json(Vec<u8>),
    Multipart(multipart::Form),
}

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Body>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        Self {
            client,
            url: url.to_string(),
            method,
            headers: HeaderMap::new(),
            query_params: None,
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = HeaderValue::from_str(value) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add bearer token authentication only when a token is present
    pub fn maybe_bearer_auth(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.bearer_auth(token),
            None => self,
        }
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.headers
            .insert("Content-Type", HeaderValue::from_static("application/json"));
        self.body = Some(Body::Json(json));
        Ok(self)
    }

    /// Add a `multipart/form-data` body to the request.
    ///
    /// reqwest sets the boundary-bearing Content-Type itself, so no header
    /// is added here.
    pub fn multipart(mut self, form: multipart::Form) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }

    /// Build the request
    fn build(self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method, url.as_str());
        req = req.headers(self.headers);

        match self.body {
            Some(Body::Json(bytes)) => req = req.body(bytes),
            Some(Body::Multipart(form)) => req = req.multipart(form),
            None => {}
        }

        Ok(req)
    }

    async fn send_checked(self) -> Result<reqwest::Response, Error> {
        let url = self.url.clone();
        let response = self.build()?.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = extract_error_message(&text);
            tracing::warn!(%url, status = status.as_u16(), %message, "request failed");
            return Err(Error::status(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Execute the request and parse the response as JSON.
    ///
    /// A 2xx body carrying a non-null `error` key is treated as a logical
    /// failure and surfaced as [`Error::Api`] instead of being deserialized.
    pub async fn execute<T: DeserializeOwned>(self) -> Result<T, Error> {
        let response = self.send_checked().await?;
        let value = response.json::<serde_json::Value>().await?;

        if let Some(message) = embedded_error(&value) {
            tracing::warn!(%message, "application-level error in 2xx response");
            return Err(Error::api(message));
        }

        let result = serde_json::from_value::<T>(value)?;
        Ok(result)
    }

    /// Execute the request, check the status, and discard the body
    pub async fn execute_unit(self) -> Result<(), Error> {
        self.send_checked().await?;
        Ok(())
    }

    /// Execute the request and return the response body as raw bytes.
    ///
    /// Used for binary exports (xlsx visitor logs).
    pub async fn execute_bytes(self) -> Result<Vec<u8>, Error> {
        let response = self.send_checked().await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Pull a human-readable message out of a JSON error body, falling back to
/// the raw text when the body is not JSON or carries no known key.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(v) if !v.is_null() => return v.to_string(),
                _ => {}
            }
        }
    }
    if body.is_empty() {
        "no error body".to_string()
    } else {
        body.to_string()
    }
}

/// Detect an application-level error embedded in a 2xx body
fn embedded_error(value: &serde_json::Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    match error {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(
            other
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| other.to_string()),
        ),
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a PATCH request
    pub fn patch<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PATCH)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_error_key() {
        let body = r#"{"error":"spot not found","message":"ignored"}"#;
        assert_eq!(extract_error_message(body), "spot not found");
    }

    #[test]
    fn error_message_falls_back_to_raw_text() {
        assert_eq!(extract_error_message("gateway timeout"), "gateway timeout");
        assert_eq!(extract_error_message(""), "no error body");
    }

    #[test]
    fn embedded_error_ignores_null() {
        assert_eq!(embedded_error(&json!({"error": null, "id": 1})), None);
        assert_eq!(
            embedded_error(&json!({"error": "code already used"})),
            Some("code already used".to_string())
        );
        assert_eq!(
            embedded_error(&json!({"error": {"message": "duplicate booking"}})),
            Some("duplicate booking".to_string())
        );
    }
}
