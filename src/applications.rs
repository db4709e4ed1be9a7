//! Tour guide and tour operator applications
//!
//! Both resources share one route shape (`/tour-guides`, `/tour-operators`)
//! and one review lifecycle, so a single client covers them.

use reqwest::{multipart, Client};
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// Review state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    Revoked,
}

/// A tour guide or tour operator application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// The application id
    pub id: i64,

    /// Id of the applying user
    #[serde(rename = "user_id")]
    pub user_id: i64,

    /// Applicant display name
    #[serde(alias = "full_name")]
    pub name: Option<String>,

    /// Business or operator name, for operator applications
    #[serde(rename = "business_name")]
    pub business_name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Review state
    pub status: ApplicationStatus,

    /// Reviewer's reason for rejection or revocation
    pub reason: Option<String>,

    /// URLs of uploaded supporting documents
    #[serde(default)]
    pub documents: Vec<String>,

    /// Submission timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

/// A supporting document attached to an application
#[derive(Debug, Clone)]
pub struct DocumentAttachment {
    /// File name sent in the multipart part
    pub file_name: String,

    /// MIME type, e.g. `application/pdf`
    pub content_type: String,

    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Fields for submitting an application
#[derive(Debug, Clone)]
pub struct ApplicationDraft {
    /// Applicant display name
    pub name: String,

    /// Business or operator name
    pub business_name: Option<String>,

    /// Contact email
    pub email: String,

    /// Supporting documents (sent as `multipart/form-data`)
    pub documents: Vec<DocumentAttachment>,
}

#[derive(Serialize)]
struct ReviewReason<'a> {
    reason: &'a str,
}

/// Client for application review operations, bound to either the
/// tour-guide or tour-operator route.
pub struct ApplicationsClient {
    base: String,
    resource: &'static str,
    client: Client,
    token: SharedToken,
}

impl ApplicationsClient {
    pub(crate) fn new(
        base: &str,
        resource: &'static str,
        client: Client,
        token: SharedToken,
    ) -> Self {
        Self {
            base: base.to_string(),
            resource,
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base, self.resource, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all applications
    pub async fn list(&self) -> Result<Vec<Application>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Application>>()
            .await
    }

    /// Get a single application by id
    pub async fn get(&self, id: i64) -> Result<Application, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Application>()
            .await
    }

    /// Submit a new application with its supporting documents
    pub async fn apply(&self, draft: &ApplicationDraft) -> Result<Application, Error> {
        let mut form = multipart::Form::new()
            .text("name", draft.name.clone())
            .text("email", draft.email.clone());

        if let Some(ref business) = draft.business_name {
            form = form.text("business_name", business.clone());
        }
        for document in &draft.documents {
            let part = multipart::Part::bytes(document.bytes.clone())
                .file_name(document.file_name.clone())
                .mime_str(&document.content_type)?;
            form = form.part("documents", part);
        }

        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .multipart(form)
            .execute::<Application>()
            .await
    }

    /// Approve an application. Callers re-fetch to observe the new state.
    pub async fn approve(&self, id: i64) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url(&format!("/{}/approve", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }

    /// Reject an application with a reviewer-supplied reason
    pub async fn reject(&self, id: i64, reason: &str) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url(&format!("/{}/reject", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&ReviewReason { reason })?
            .execute_unit()
            .await
    }

    /// Revoke a previously approved application
    pub async fn revoke(&self, id: i64, reason: &str) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url(&format!("/{}/revoke", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&ReviewReason { reason })?
            .execute_unit()
            .await
    }
}
