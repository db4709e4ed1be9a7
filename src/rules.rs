//! Island rules shown to visitors before entry

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// A single island rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// The rule id
    pub id: i64,

    /// Short title
    pub title: String,

    /// Full rule text
    #[serde(alias = "content")]
    pub description: String,

    /// Rule category (e.g. environmental, safety)
    pub category: Option<String>,

    /// Penalty for violations, when one is defined
    pub penalty: Option<String>,

    /// Whether the rule is currently enforced
    #[serde(rename = "is_active")]
    pub is_active: Option<bool>,

    /// Update timestamp
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

/// Fields for creating or updating a rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleDraft {
    /// Short title
    pub title: String,

    /// Full rule text
    pub description: String,

    /// Rule category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Penalty for violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<String>,
}

/// Client for island rule operations
pub struct RulesClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl RulesClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/rules{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all rules
    pub async fn list(&self) -> Result<Vec<Rule>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Rule>>()
            .await
    }

    /// Get a single rule by id
    pub async fn get(&self, id: i64) -> Result<Rule, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Rule>()
            .await
    }

    /// Create a rule
    pub async fn create(&self, draft: &RuleDraft) -> Result<Rule, Error> {
        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Rule>()
            .await
    }

    /// Update a rule
    pub async fn update(&self, id: i64, draft: &RuleDraft) -> Result<Rule, Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Rule>()
            .await
    }

    /// Delete a rule
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}
