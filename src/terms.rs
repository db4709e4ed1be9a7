//! Terms, conditions and policy documents
//!
//! The backend is inconsistent about whether a policy's kind arrives under
//! `type` or `title`; the DTO normalizes both spellings into one field so
//! callers never see the difference.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// A terms or policy document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    /// The document id
    pub id: i64,

    /// Policy kind, e.g. `PRIVACY_POLICY` or `TERMS_OF_SERVICE`
    #[serde(rename = "type", alias = "title")]
    pub kind: String,

    /// Full document text
    #[serde(alias = "body")]
    pub content: String,

    /// Document version label
    pub version: Option<String>,

    /// Whether this is the version currently in force
    #[serde(rename = "is_active")]
    pub is_active: Option<bool>,

    /// Update timestamp
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl Term {
    /// Human-readable label for this document's kind
    pub fn label(&self) -> String {
        policy_type_label(&self.kind)
    }
}

/// Fields for creating or updating a terms document
#[derive(Debug, Clone, Serialize)]
pub struct TermDraft {
    /// Policy kind
    #[serde(rename = "type")]
    pub kind: String,

    /// Full document text
    pub content: String,

    /// Document version label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Turn a `SCREAMING_SNAKE_CASE` policy kind into a display label:
/// `PRIVACY_POLICY` becomes `Privacy Policy`.
pub fn policy_type_label(kind: &str) -> String {
    kind.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Client for terms and policy operations
pub struct TermsClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl TermsClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/terms{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all terms documents
    pub async fn list(&self) -> Result<Vec<Term>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Term>>()
            .await
    }

    /// Get a single terms document by id
    pub async fn get(&self, id: i64) -> Result<Term, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Term>()
            .await
    }

    /// Create a terms document
    pub async fn create(&self, draft: &TermDraft) -> Result<Term, Error> {
        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Term>()
            .await
    }

    /// Update a terms document
    pub async fn update(&self, id: i64, draft: &TermDraft) -> Result<Term, Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Term>()
            .await
    }

    /// Delete a terms document
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_labels() {
        assert_eq!(policy_type_label("PRIVACY_POLICY"), "Privacy Policy");
        assert_eq!(policy_type_label("TERMS_OF_SERVICE"), "Terms Of Service");
        assert_eq!(policy_type_label("REFUND"), "Refund");
        assert_eq!(policy_type_label(""), "");
    }

    #[test]
    fn term_kind_accepts_both_spellings() {
        let from_type: Term =
            serde_json::from_str(r#"{"id":1,"type":"PRIVACY_POLICY","content":"x"}"#).unwrap();
        let from_title: Term =
            serde_json::from_str(r#"{"id":2,"title":"PRIVACY_POLICY","content":"x"}"#).unwrap();
        assert_eq!(from_type.kind, from_title.kind);
        assert_eq!(from_type.label(), "Privacy Policy");
    }
}
