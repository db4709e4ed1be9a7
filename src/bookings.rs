//! Tour bookings

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::SharedToken;
use crate::error::Error;
use crate::fetch::Fetch;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A tour booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// The booking id
    pub id: i64,

    /// Id of the booking tourist
    #[serde(rename = "user_id")]
    pub user_id: i64,

    /// Id of the booked tourist spot, when the booking targets one
    #[serde(rename = "spot_id")]
    pub spot_id: Option<i64>,

    /// Id of the assigned tour guide
    #[serde(rename = "guide_id")]
    pub guide_id: Option<i64>,

    /// Scheduled date (ISO 8601)
    #[serde(rename = "scheduled_date")]
    pub scheduled_date: Option<String>,

    /// Number of participants
    #[serde(rename = "party_size")]
    pub party_size: Option<u32>,

    /// Lifecycle state
    pub status: BookingStatus,

    /// Whether payment has been received
    #[serde(rename = "is_paid")]
    pub is_paid: Option<bool>,

    /// Creation timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

/// Fields for creating a booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    /// Id of the booked tourist spot
    #[serde(rename = "spot_id", skip_serializing_if = "Option::is_none")]
    pub spot_id: Option<i64>,

    /// Id of the requested tour guide
    #[serde(rename = "guide_id", skip_serializing_if = "Option::is_none")]
    pub guide_id: Option<i64>,

    /// Scheduled date (ISO 8601)
    #[serde(rename = "scheduled_date")]
    pub scheduled_date: String,

    /// Number of participants
    #[serde(rename = "party_size")]
    pub party_size: u32,
}

#[derive(Serialize)]
struct StatusChange {
    status: BookingStatus,
}

/// Client for booking operations
pub struct BookingsClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl BookingsClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/bookings{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all bookings visible to the current user
    pub async fn list(&self) -> Result<Vec<Booking>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Booking>>()
            .await
    }

    /// List bookings for one tourist spot
    pub async fn list_for_spot(&self, spot_id: i64) -> Result<Vec<Booking>, Error> {
        Fetch::get(&self.client, &self.url(&format!("/spot/{}", spot_id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<Booking>>()
            .await
    }

    /// Get a single booking by id
    pub async fn get(&self, id: i64) -> Result<Booking, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Booking>()
            .await
    }

    /// Create a booking
    pub async fn create(&self, draft: &BookingDraft) -> Result<Booking, Error> {
        Fetch::post(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(draft)?
            .execute::<Booking>()
            .await
    }

    /// Move a booking to a new lifecycle state.
    /// Callers re-fetch to observe the change.
    pub async fn change_status(&self, id: i64, status: BookingStatus) -> Result<(), Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}/status", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&StatusChange { status })?
            .execute_unit()
            .await
    }

    /// Record payment for a booking
    pub async fn mark_paid(&self, id: i64) -> Result<(), Error> {
        Fetch::post(&self.client, &self.url(&format!("/{}/mark-paid", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}
