//! Tourvia Rust Client Library
//!
//! A Rust client for the Tourvia tourism-management REST backend, covering
//! announcements, island rules, terms and policies, tourist spots, tour
//! guide and operator applications, bookings, incident reports, visitor
//! registration with island-entry check-in, and user accounts.
//!
//! The crate has two layers: per-resource clients that each wrap one group
//! of REST endpoints, and [`manager`] types that add the request state
//! (`items`/`loading`/`error`) an interactive caller wants to render.

pub mod announcements;
pub mod applications;
pub mod auth;
pub mod bookings;
pub mod config;
pub mod error;
pub mod fetch;
pub mod incidents;
pub mod manager;
pub mod registration;
pub mod rules;
pub mod spots;
pub mod terms;
pub mod users;

use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::announcements::AnnouncementsClient;
use crate::applications::ApplicationsClient;
use crate::auth::{Auth, SharedToken};
use crate::bookings::BookingsClient;
use crate::config::{ClientOptions, EnvConfig};
use crate::error::Error;
use crate::incidents::IncidentsClient;
use crate::manager::{
    AnnouncementManager, ApplicationManager, BookingManager, CollectionManager, IncidentManager,
    RegistrationManager, RuleManager, SpotManager, TermsManager, UserManager,
};
use crate::registration::RegistrationClient;
use crate::rules::RulesClient;
use crate::spots::TouristSpotsClient;
use crate::terms::TermsClient;
use crate::users::UsersClient;

/// The main entry point for the Tourvia Rust client
pub struct Tourvia {
    /// The backend base URL
    pub url: String,

    /// HTTP client shared by every sub-client; carries the cookie session
    pub http_client: Client,

    /// Auth client for login, signup and session management
    pub auth: Auth,

    /// Client options
    pub options: ClientOptions,

    /// Prefixed base URL resource routes hang off
    base: String,

    /// Bearer token shared with every sub-client
    token: SharedToken,
}

impl Tourvia {
    /// Create a new Tourvia client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tourvia::Tourvia;
    ///
    /// let client = Tourvia::new("https://api.tourvia.example").unwrap();
    /// ```
    pub fn new(url: &str) -> Result<Self, Error> {
        Self::new_with_options(url, ClientOptions::default())
    }

    /// Create a new Tourvia client with custom options
    pub fn new_with_options(url: &str, options: ClientOptions) -> Result<Self, Error> {
        let mut builder = Client::builder().cookie_store(options.cookie_session);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let url = url.trim_end_matches('/').to_string();
        let base = format!("{}{}", url, options.api_prefix);
        let token: SharedToken = Arc::new(Mutex::new(None));
        let auth = Auth::new(&base, http_client.clone(), token.clone());

        Ok(Self {
            url,
            http_client,
            auth,
            options,
            base,
            token,
        })
    }

    /// Create a client from the `TOURVIA_API_URL` / `TOURVIA_API_TOKEN`
    /// environment variables
    pub fn from_env() -> Result<Self, Error> {
        let env = EnvConfig::from_env()?;
        let client = Self::new(&env.api_url)?;
        if env.api_token.is_some() {
            client.auth.set_token(env.api_token);
        }
        Ok(client)
    }

    /// Get a reference to the auth client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Client for announcement operations
    pub fn announcements(&self) -> AnnouncementsClient {
        AnnouncementsClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for island rule operations
    pub fn rules(&self) -> RulesClient {
        RulesClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for terms and policy operations
    pub fn terms(&self) -> TermsClient {
        TermsClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for tourist spot operations
    pub fn tourist_spots(&self) -> TouristSpotsClient {
        TouristSpotsClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for tour guide applications
    pub fn tour_guides(&self) -> ApplicationsClient {
        ApplicationsClient::new(
            &self.base,
            "tour-guides",
            self.http_client.clone(),
            self.token.clone(),
        )
    }

    /// Client for tour operator applications
    pub fn tour_operators(&self) -> ApplicationsClient {
        ApplicationsClient::new(
            &self.base,
            "tour-operators",
            self.http_client.clone(),
            self.token.clone(),
        )
    }

    /// Client for booking operations
    pub fn bookings(&self) -> BookingsClient {
        BookingsClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for incident report operations
    pub fn incidents(&self) -> IncidentsClient {
        IncidentsClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for visitor registration and island-entry operations
    pub fn registrations(&self) -> RegistrationClient {
        RegistrationClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Client for user account operations
    pub fn users(&self) -> UsersClient {
        UsersClient::new(&self.base, self.http_client.clone(), self.token.clone())
    }

    /// Stateful manager for announcements
    pub fn announcement_manager(&self) -> AnnouncementManager {
        CollectionManager::new(self.announcements())
    }

    /// Stateful manager for island rules
    pub fn rule_manager(&self) -> RuleManager {
        CollectionManager::new(self.rules())
    }

    /// Stateful manager for terms and policies, with change notifications
    pub fn terms_manager(&self) -> TermsManager {
        TermsManager::new(self.terms())
    }

    /// Stateful manager for tourist spots
    pub fn spot_manager(&self) -> SpotManager {
        CollectionManager::new(self.tourist_spots())
    }

    /// Stateful manager for tour guide applications
    pub fn tour_guide_manager(&self) -> ApplicationManager {
        ApplicationManager::new(self.tour_guides())
    }

    /// Stateful manager for tour operator applications
    pub fn tour_operator_manager(&self) -> ApplicationManager {
        ApplicationManager::new(self.tour_operators())
    }

    /// Stateful manager for bookings
    pub fn booking_manager(&self) -> BookingManager {
        BookingManager::new(self.bookings())
    }

    /// Stateful manager for incident reports
    pub fn incident_manager(&self) -> IncidentManager {
        IncidentManager::new(self.incidents())
    }

    /// Stateful manager for visitor registrations
    pub fn registration_manager(&self) -> RegistrationManager {
        RegistrationManager::new(self.registrations())
    }

    /// Stateful manager for user accounts
    pub fn user_manager(&self) -> UserManager {
        UserManager::new(self.users())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::manager::Snapshot;
    pub use crate::Tourvia;
}
