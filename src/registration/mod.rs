//! Visitor registration and island-entry check-in
//!
//! Registration issues a backend-generated unique code; the entry desk looks
//! the group up by that code (scanned from a QR) or by leader name, collects
//! payment if needed, and checks the group in. Visitor logs export as xlsx.

mod types;

use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

#[derive(Serialize)]
struct CheckInRequest<'a> {
    #[serde(rename = "unique_code")]
    unique_code: &'a str,
}

/// Client for island-entry registration operations
pub struct RegistrationClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl RegistrationClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/island-entry{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// Register a visitor group.
    ///
    /// The draft is validated locally first; an incomplete draft never
    /// reaches the backend. The returned record carries the generated
    /// unique code the group presents at the entry point.
    pub async fn register(&self, draft: &RegistrationDraft) -> Result<IslandEntryRecord, Error> {
        draft.validate()?;

        Fetch::post(&self.client, &self.url("/register"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<IslandEntryRecord>()
            .await
    }

    /// Look a registration up by unique code or leader name, returning the
    /// registration together with its group members.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<IslandEntryRecord, Error> {
        let mut params = HashMap::new();
        match query {
            LookupQuery::UniqueCode(code) => {
                params.insert("unique_code".to_string(), code.clone());
            }
            LookupQuery::LeaderName(name) => {
                params.insert("name".to_string(), name.clone());
            }
        }

        Fetch::get(&self.client, &self.url("/members"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .query(params)
            .execute::<IslandEntryRecord>()
            .await
    }

    /// List all registrations
    pub async fn list(&self) -> Result<Vec<VisitorRegistration>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<VisitorRegistration>>()
            .await
    }

    /// Check a paid group in by unique code.
    /// Callers re-fetch or re-look-up to observe the new state.
    pub async fn check_in(&self, unique_code: &str) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url("/check-in"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&CheckInRequest { unique_code })?
            .execute_unit()
            .await
    }

    /// Record a manual payment for a registration.
    /// Callers re-fetch to observe the new state.
    pub async fn mark_paid(&self, id: i64) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url(&format!("/{}/mark-paid", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }

    /// Export the visitor log as raw xlsx bytes
    pub async fn export_xlsx(&self) -> Result<Vec<u8>, Error> {
        Fetch::get(&self.client, &self.url("/export"))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_bytes()
            .await
    }
}
