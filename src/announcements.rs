//! Announcements published to tourists and staff

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// An announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    /// The announcement id
    pub id: i64,

    /// Title
    pub title: String,

    /// Body text
    #[serde(alias = "content")]
    pub body: String,

    /// Target audience, when the backend scopes the announcement
    pub audience: Option<String>,

    /// Whether the announcement is pinned above the rest
    #[serde(rename = "is_pinned")]
    pub is_pinned: Option<bool>,

    /// Creation timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,

    /// Update timestamp
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

/// Fields for creating or updating an announcement
#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementDraft {
    /// Title
    pub title: String,

    /// Body text
    pub body: String,

    /// Target audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Whether the announcement is pinned
    #[serde(rename = "is_pinned", skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
}

/// Client for announcement operations
pub struct AnnouncementsClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl AnnouncementsClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/announcements{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all announcements
    pub async fn list(&self) -> Result<Vec<Announcement>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Announcement>>()
            .await
    }

    /// Get a single announcement by id
    pub async fn get(&self, id: i64) -> Result<Announcement, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Announcement>()
            .await
    }

    /// Create an announcement
    pub async fn create(&self, draft: &AnnouncementDraft) -> Result<Announcement, Error> {
        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Announcement>()
            .await
    }

    /// Update an announcement
    pub async fn update(&self, id: i64, draft: &AnnouncementDraft) -> Result<Announcement, Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Announcement>()
            .await
    }

    /// Delete an announcement
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}
