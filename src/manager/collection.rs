//! Generic CRUD manager over a per-resource endpoint
//!
//! Each resource client that exposes the full list/create/update/delete
//! shape plugs into [`CollectionManager`] through the [`ResourceEndpoint`]
//! trait, so the request-state bookkeeping is written once.

use async_trait::async_trait;

use crate::announcements::{Announcement, AnnouncementDraft, AnnouncementsClient};
use crate::applications::Application;
use crate::auth::User;
use crate::bookings::Booking;
use crate::error::Error;
use crate::incidents::IncidentReport;
use crate::registration::VisitorRegistration;
use crate::rules::{Rule, RuleDraft, RulesClient};
use crate::spots::{SpotDraft, TouristSpot, TouristSpotsClient};
use crate::terms::{Term, TermDraft, TermsClient};

use super::store::{Identify, ResourceStore, Snapshot};

impl Identify for Announcement {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for Rule {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for Term {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for TouristSpot {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for Application {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for IncidentReport {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identify for VisitorRegistration {
    fn id(&self) -> i64 {
        self.id
    }
}

/// The full CRUD surface a resource client offers to its manager
#[async_trait]
pub trait ResourceEndpoint: Send + Sync {
    /// The item type held in the collection
    type Item: Identify + Clone + Send + Sync;

    /// The draft type accepted by create and update
    type Draft: Send + Sync;

    /// Resource name used in error messages
    fn resource_name(&self) -> &'static str;

    /// Fetch the whole collection
    async fn list(&self) -> Result<Vec<Self::Item>, Error>;

    /// Fetch a single item
    async fn get(&self, id: i64) -> Result<Self::Item, Error>;

    /// Create an item
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Item, Error>;

    /// Update an item
    async fn update(&self, id: i64, draft: &Self::Draft) -> Result<Self::Item, Error>;

    /// Delete an item
    async fn delete(&self, id: i64) -> Result<(), Error>;
}

/// Request-state wrapper around one CRUD resource.
///
/// Every operation records loading/error state. A successful create appends
/// to the local collection, update replaces by id and delete filters out,
/// so local mutations are visible without a re-fetch; `fetch_all` always
/// hits the network.
pub struct CollectionManager<E: ResourceEndpoint> {
    endpoint: E,
    store: ResourceStore<E::Item>,
}

impl<E: ResourceEndpoint> CollectionManager<E> {
    /// Wrap an endpoint in a fresh manager
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            store: ResourceStore::new(),
        }
    }

    /// Access the underlying endpoint client
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<E::Item> {
        self.store.snapshot()
    }

    /// The collection as last loaded or locally patched
    pub fn items(&self) -> Vec<E::Item> {
        self.store.items()
    }

    /// Whether any call is still in flight
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// The error of the last failed call, if any
    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    /// Reload the collection from the backend. Always a network round trip.
    pub async fn fetch_all(&self) -> Result<Vec<E::Item>, Error> {
        let generation = self.store.begin_load();
        match self.endpoint.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store.finish_load_error(
                    generation,
                    format!("Failed to load {}: {}", self.endpoint.resource_name(), err),
                );
                Err(err)
            }
        }
    }

    /// Fetch a single item by id. Always a network round trip; the result
    /// is returned to the caller without touching the local collection, and
    /// a collection load running alongside is left undisturbed.
    pub async fn fetch_one(&self, id: i64) -> Result<E::Item, Error> {
        self.store.begin();
        match self.endpoint.get(id).await {
            Ok(item) => {
                self.store.finish_ok();
                Ok(item)
            }
            Err(err) => {
                self.store.finish_error(format!(
                    "Failed to load {}: {}",
                    self.endpoint.resource_name(),
                    err
                ));
                Err(err)
            }
        }
    }

    /// Create an item and append it to the local collection
    pub async fn create(&self, draft: &E::Draft) -> Result<E::Item, Error> {
        self.store.begin();
        match self.endpoint.create(draft).await {
            Ok(item) => {
                self.store.finish_created(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.store.finish_error(format!(
                    "Failed to create {}: {}",
                    self.endpoint.resource_name(),
                    err
                ));
                Err(err)
            }
        }
    }

    /// Update an item, replacing the local copy with the same id
    pub async fn update(&self, id: i64, draft: &E::Draft) -> Result<E::Item, Error> {
        self.store.begin();
        match self.endpoint.update(id, draft).await {
            Ok(item) => {
                self.store.finish_replaced(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.store.finish_error(format!(
                    "Failed to update {}: {}",
                    self.endpoint.resource_name(),
                    err
                ));
                Err(err)
            }
        }
    }

    /// Delete an item and filter it out of the local collection
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.store.begin();
        match self.endpoint.delete(id).await {
            Ok(()) => {
                self.store.finish_removed(id);
                Ok(())
            }
            Err(err) => {
                self.store.finish_error(format!(
                    "Failed to delete {}: {}",
                    self.endpoint.resource_name(),
                    err
                ));
                Err(err)
            }
        }
    }
}

#[async_trait]
impl ResourceEndpoint for AnnouncementsClient {
    type Item = Announcement;
    type Draft = AnnouncementDraft;

    fn resource_name(&self) -> &'static str {
        "announcements"
    }

    async fn list(&self) -> Result<Vec<Announcement>, Error> {
        AnnouncementsClient::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Announcement, Error> {
        AnnouncementsClient::get(self, id).await
    }

    async fn create(&self, draft: &AnnouncementDraft) -> Result<Announcement, Error> {
        AnnouncementsClient::create(self, draft).await
    }

    async fn update(&self, id: i64, draft: &AnnouncementDraft) -> Result<Announcement, Error> {
        AnnouncementsClient::update(self, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        AnnouncementsClient::delete(self, id).await
    }
}

#[async_trait]
impl ResourceEndpoint for RulesClient {
    type Item = Rule;
    type Draft = RuleDraft;

    fn resource_name(&self) -> &'static str {
        "rules"
    }

    async fn list(&self) -> Result<Vec<Rule>, Error> {
        RulesClient::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Rule, Error> {
        RulesClient::get(self, id).await
    }

    async fn create(&self, draft: &RuleDraft) -> Result<Rule, Error> {
        RulesClient::create(self, draft).await
    }

    async fn update(&self, id: i64, draft: &RuleDraft) -> Result<Rule, Error> {
        RulesClient::update(self, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        RulesClient::delete(self, id).await
    }
}

#[async_trait]
impl ResourceEndpoint for TermsClient {
    type Item = Term;
    type Draft = TermDraft;

    fn resource_name(&self) -> &'static str {
        "terms"
    }

    async fn list(&self) -> Result<Vec<Term>, Error> {
        TermsClient::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Term, Error> {
        TermsClient::get(self, id).await
    }

    async fn create(&self, draft: &TermDraft) -> Result<Term, Error> {
        TermsClient::create(self, draft).await
    }

    async fn update(&self, id: i64, draft: &TermDraft) -> Result<Term, Error> {
        TermsClient::update(self, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        TermsClient::delete(self, id).await
    }
}

#[async_trait]
impl ResourceEndpoint for TouristSpotsClient {
    type Item = TouristSpot;
    type Draft = SpotDraft;

    fn resource_name(&self) -> &'static str {
        "tourist spots"
    }

    async fn list(&self) -> Result<Vec<TouristSpot>, Error> {
        TouristSpotsClient::list(self).await
    }

    async fn get(&self, id: i64) -> Result<TouristSpot, Error> {
        TouristSpotsClient::get(self, id).await
    }

    async fn create(&self, draft: &SpotDraft) -> Result<TouristSpot, Error> {
        TouristSpotsClient::create(self, draft).await
    }

    async fn update(&self, id: i64, draft: &SpotDraft) -> Result<TouristSpot, Error> {
        TouristSpotsClient::update(self, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        TouristSpotsClient::delete(self, id).await
    }
}
