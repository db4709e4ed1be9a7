//! Tourist spot operations, including image uploads

mod types;

use reqwest::{multipart, Client};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Client for tourist spot operations
pub struct TouristSpotsClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl TouristSpotsClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/tourist-spots{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn form_for(draft: &SpotDraft) -> Result<multipart::Form, Error> {
        let mut form = multipart::Form::new().text("name", draft.name.clone());

        if let Some(ref description) = draft.description {
            form = form.text("description", description.clone());
        }
        if let Some(ref category) = draft.category {
            form = form.text("category", category.clone());
        }
        if let Some(ref location) = draft.location {
            form = form.text("location", location.clone());
        }
        if let Some(fee) = draft.entrance_fee {
            form = form.text("entrance_fee", fee.to_string());
        }
        if let Some(ref hours) = draft.opening_hours {
            form = form.text("opening_hours", hours.clone());
        }
        for image in &draft.images {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }

        Ok(form)
    }

    /// List all tourist spots
    pub async fn list(&self) -> Result<Vec<TouristSpot>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<TouristSpot>>()
            .await
    }

    /// Get a single spot by id
    pub async fn get(&self, id: i64) -> Result<TouristSpot, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<TouristSpot>()
            .await
    }

    /// Create a tourist spot.
    ///
    /// Drafts carrying images are sent as `multipart/form-data`, plain
    /// drafts as JSON.
    pub async fn create(&self, draft: &SpotDraft) -> Result<TouristSpot, Error> {
        let request = Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref());

        if draft.images.is_empty() {
            request.json(draft)?.execute::<TouristSpot>().await
        } else {
            request
                .multipart(Self::form_for(draft)?)
                .execute::<TouristSpot>()
                .await
        }
    }

    /// Update a tourist spot
    pub async fn update(&self, id: i64, draft: &SpotDraft) -> Result<TouristSpot, Error> {
        let request = Fetch::put(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref());

        if draft.images.is_empty() {
            request.json(draft)?.execute::<TouristSpot>().await
        } else {
            request
                .multipart(Self::form_for(draft)?)
                .execute::<TouristSpot>()
                .await
        }
    }

    /// Delete a tourist spot
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}
