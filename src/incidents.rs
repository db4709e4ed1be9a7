//! Incident reports filed by tourists and staff

use reqwest::{multipart, Client};
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// Handling state of an incident report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Pending,
    InProgress,
    Resolved,
}

/// An incident report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentReport {
    /// The report id
    pub id: i64,

    /// Id of the reporting user
    #[serde(rename = "user_id")]
    pub user_id: i64,

    /// Short title
    pub title: String,

    /// What happened
    pub description: Option<String>,

    /// Where it happened
    pub location: Option<String>,

    /// Handling state
    pub status: IncidentStatus,

    /// URLs of uploaded photos
    #[serde(default)]
    pub photos: Vec<String>,

    /// Submission timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

/// A photo attached to an incident report
#[derive(Debug, Clone)]
pub struct PhotoAttachment {
    /// File name sent in the multipart part
    pub file_name: String,

    /// MIME type, e.g. `image/jpeg`
    pub content_type: String,

    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Fields for filing an incident report
#[derive(Debug, Clone)]
pub struct IncidentDraft {
    /// Short title
    pub title: String,

    /// What happened
    pub description: String,

    /// Where it happened
    pub location: Option<String>,

    /// Photos (sent as `multipart/form-data`)
    pub photos: Vec<PhotoAttachment>,
}

#[derive(Serialize)]
struct StatusChange {
    status: IncidentStatus,
}

/// Client for incident report operations
pub struct IncidentsClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl IncidentsClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/incidents{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all incident reports
    pub async fn list(&self) -> Result<Vec<IncidentReport>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<IncidentReport>>()
            .await
    }

    /// Get a single incident report by id
    pub async fn get(&self, id: i64) -> Result<IncidentReport, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<IncidentReport>()
            .await
    }

    /// File a new incident report with any attached photos
    pub async fn report(&self, draft: &IncidentDraft) -> Result<IncidentReport, Error> {
        let mut form = multipart::Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone());

        if let Some(ref location) = draft.location {
            form = form.text("location", location.clone());
        }
        for photo in &draft.photos {
            let part = multipart::Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)?;
            form = form.part("photos", part);
        }

        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .multipart(form)
            .execute::<IncidentReport>()
            .await
    }

    /// Move a report to a new handling state.
    /// Callers re-fetch to observe the change.
    pub async fn change_status(&self, id: i64, status: IncidentStatus) -> Result<(), Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}/status", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&StatusChange { status })?
            .execute_unit()
            .await
    }
}
