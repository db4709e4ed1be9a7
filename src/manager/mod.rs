//! Stateful resource managers
//!
//! Each manager wraps one resource client and tracks `{items, loading,
//! error}` request state for it: create appends to the local collection,
//! update replaces by id, delete filters out, and status transitions leave
//! the collection alone until the caller re-fetches.

mod collection;
mod store;

use tokio::sync::watch;

use crate::announcements::AnnouncementsClient;
use crate::applications::{Application, ApplicationDraft, ApplicationsClient};
use crate::auth::{User, UserRole};
use crate::bookings::{Booking, BookingDraft, BookingStatus, BookingsClient};
use crate::error::Error;
use crate::incidents::{IncidentDraft, IncidentReport, IncidentStatus, IncidentsClient};
use crate::registration::{
    IslandEntryRecord, LookupQuery, RegistrationClient, RegistrationDraft, VisitorRegistration,
};
use crate::rules::RulesClient;
use crate::spots::TouristSpotsClient;
use crate::terms::{Term, TermDraft, TermsClient};
use crate::users::{UserUpdate, UsersClient};

pub use collection::{CollectionManager, ResourceEndpoint};
pub use store::{Identify, ResourceStore, Snapshot};

/// Manager for announcements
pub type AnnouncementManager = CollectionManager<AnnouncementsClient>;

/// Manager for island rules
pub type RuleManager = CollectionManager<RulesClient>;

/// Manager for tourist spots
pub type SpotManager = CollectionManager<TouristSpotsClient>;

/// Manager for terms and policy documents.
///
/// Every successful mutation bumps a watch channel so other screens can
/// re-fetch when the documents change, instead of polling a shared flag.
pub struct TermsManager {
    inner: CollectionManager<TermsClient>,
    changes: watch::Sender<u64>,
}

impl TermsManager {
    /// Wrap a terms client in a fresh manager
    pub fn new(client: TermsClient) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: CollectionManager::new(client),
            changes,
        }
    }

    /// Subscribe to change notifications; the value increments on every
    /// successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn bump(&self) {
        self.changes.send_modify(|n| *n += 1);
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<Term> {
        self.inner.snapshot()
    }

    /// The documents as last loaded or locally patched
    pub fn terms(&self) -> Vec<Term> {
        self.inner.items()
    }

    /// Whether any call is still in flight
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading()
    }

    /// The error of the last failed call, if any
    pub fn error(&self) -> Option<String> {
        self.inner.error()
    }

    /// Reload the documents from the backend
    pub async fn fetch_all(&self) -> Result<Vec<Term>, Error> {
        self.inner.fetch_all().await
    }

    /// Create a document and notify subscribers
    pub async fn create(&self, draft: &TermDraft) -> Result<Term, Error> {
        let term = self.inner.create(draft).await?;
        self.bump();
        Ok(term)
    }

    /// Update a document and notify subscribers
    pub async fn update(&self, id: i64, draft: &TermDraft) -> Result<Term, Error> {
        let term = self.inner.update(id, draft).await?;
        self.bump();
        Ok(term)
    }

    /// Delete a document and notify subscribers
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.inner.delete(id).await?;
        self.bump();
        Ok(())
    }
}

/// Manager for tour guide or tour operator applications.
///
/// Review transitions hit dedicated sub-routes and never patch the local
/// collection; callers re-fetch to observe the new status.
pub struct ApplicationManager {
    client: ApplicationsClient,
    store: ResourceStore<Application>,
}

impl ApplicationManager {
    /// Wrap an applications client in a fresh manager
    pub fn new(client: ApplicationsClient) -> Self {
        Self {
            client,
            store: ResourceStore::new(),
        }
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<Application> {
        self.store.snapshot()
    }

    /// The applications as last loaded
    pub fn applications(&self) -> Vec<Application> {
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

    /// Reload the applications from the backend
    pub async fn fetch_all(&self) -> Result<Vec<Application>, Error> {
        let generation = self.store.begin_load();
        match self.client.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store
                    .finish_load_error(generation, format!("Failed to load applications: {}", err));
                Err(err)
            }
        }
    }

    /// Submit a new application and append it locally
    pub async fn apply(&self, draft: &ApplicationDraft) -> Result<Application, Error> {
        self.store.begin();
        match self.client.apply(draft).await {
            Ok(application) => {
                self.store.finish_created(application.clone());
                Ok(application)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to submit application: {}", err));
                Err(err)
            }
        }
    }

    /// Approve an application
    pub async fn approve(&self, id: i64) -> Result<(), Error> {
        self.transition(self.client.approve(id), "approve").await
    }

    /// Reject an application with a reason
    pub async fn reject(&self, id: i64, reason: &str) -> Result<(), Error> {
        self.transition(self.client.reject(id, reason), "reject").await
    }

    /// Revoke a previously approved application
    pub async fn revoke(&self, id: i64, reason: &str) -> Result<(), Error> {
        self.transition(self.client.revoke(id, reason), "revoke").await
    }

    async fn transition(
        &self,
        call: impl std::future::Future<Output = Result<(), Error>>,
        action: &str,
    ) -> Result<(), Error> {
        self.store.begin();
        match call.await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to {} application: {}", action, err));
                Err(err)
            }
        }
    }
}

/// Manager for tour bookings
pub struct BookingManager {
    client: BookingsClient,
    store: ResourceStore<Booking>,
}

impl BookingManager {
    /// Wrap a bookings client in a fresh manager
    pub fn new(client: BookingsClient) -> Self {
        Self {
            client,
            store: ResourceStore::new(),
        }
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<Booking> {
        self.store.snapshot()
    }

    /// The bookings as last loaded or locally patched
    pub fn bookings(&self) -> Vec<Booking> {
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

    /// Reload the bookings from the backend
    pub async fn fetch_all(&self) -> Result<Vec<Booking>, Error> {
        let generation = self.store.begin_load();
        match self.client.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store
                    .finish_load_error(generation, format!("Failed to load bookings: {}", err));
                Err(err)
            }
        }
    }

    /// Create a booking and append it locally
    pub async fn create(&self, draft: &BookingDraft) -> Result<Booking, Error> {
        self.store.begin();
        match self.client.create(draft).await {
            Ok(booking) => {
                self.store.finish_created(booking.clone());
                Ok(booking)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to create booking: {}", err));
                Err(err)
            }
        }
    }

    /// Move a booking to a new status; callers re-fetch to observe it
    pub async fn change_status(&self, id: i64, status: BookingStatus) -> Result<(), Error> {
        self.store.begin();
        match self.client.change_status(id, status).await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to update booking status: {}", err));
                Err(err)
            }
        }
    }

    /// Record payment for a booking; callers re-fetch to observe it
    pub async fn mark_paid(&self, id: i64) -> Result<(), Error> {
        self.store.begin();
        match self.client.mark_paid(id).await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to mark booking as paid: {}", err));
                Err(err)
            }
        }
    }
}

/// Manager for incident reports
pub struct IncidentManager {
    client: IncidentsClient,
    store: ResourceStore<IncidentReport>,
}

impl IncidentManager {
    /// Wrap an incidents client in a fresh manager
    pub fn new(client: IncidentsClient) -> Self {
        Self {
            client,
            store: ResourceStore::new(),
        }
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<IncidentReport> {
        self.store.snapshot()
    }

    /// The reports as last loaded or locally patched
    pub fn incidents(&self) -> Vec<IncidentReport> {
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

    /// Reload the reports from the backend
    pub async fn fetch_all(&self) -> Result<Vec<IncidentReport>, Error> {
        let generation = self.store.begin_load();
        match self.client.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store
                    .finish_load_error(generation, format!("Failed to load incidents: {}", err));
                Err(err)
            }
        }
    }

    /// File a report and append it locally
    pub async fn report(&self, draft: &IncidentDraft) -> Result<IncidentReport, Error> {
        self.store.begin();
        match self.client.report(draft).await {
            Ok(incident) => {
                self.store.finish_created(incident.clone());
                Ok(incident)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to report incident: {}", err));
                Err(err)
            }
        }
    }

    /// Move a report to a new handling state; callers re-fetch to observe it
    pub async fn change_status(&self, id: i64, status: IncidentStatus) -> Result<(), Error> {
        self.store.begin();
        match self.client.change_status(id, status).await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to update incident status: {}", err));
                Err(err)
            }
        }
    }
}

/// Manager for user accounts
pub struct UserManager {
    client: UsersClient,
    store: ResourceStore<User>,
}

impl UserManager {
    /// Wrap a users client in a fresh manager
    pub fn new(client: UsersClient) -> Self {
        Self {
            client,
            store: ResourceStore::new(),
        }
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<User> {
        self.store.snapshot()
    }

    /// The accounts as last loaded or locally patched
    pub fn users(&self) -> Vec<User> {
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

    /// Reload the accounts from the backend
    pub async fn fetch_all(&self) -> Result<Vec<User>, Error> {
        let generation = self.store.begin_load();
        match self.client.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store
                    .finish_load_error(generation, format!("Failed to load users: {}", err));
                Err(err)
            }
        }
    }

    /// Update an account, replacing the local copy with the same id
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<User, Error> {
        self.store.begin();
        match self.client.update(id, update).await {
            Ok(user) => {
                self.store.finish_replaced(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to update user: {}", err));
                Err(err)
            }
        }
    }

    /// Change a user's role, replacing the local copy
    pub async fn change_role(&self, id: i64, role: UserRole) -> Result<User, Error> {
        self.store.begin();
        match self.client.change_role(id, role).await {
            Ok(user) => {
                self.store.finish_replaced(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to change role: {}", err));
                Err(err)
            }
        }
    }

    /// Delete an account and filter it out locally
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.store.begin();
        match self.client.delete(id).await {
            Ok(()) => {
                self.store.finish_removed(id);
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to delete user: {}", err));
                Err(err)
            }
        }
    }
}

/// Manager for visitor registration and island-entry check-in
pub struct RegistrationManager {
    client: RegistrationClient,
    store: ResourceStore<VisitorRegistration>,
}

impl RegistrationManager {
    /// Wrap a registration client in a fresh manager
    pub fn new(client: RegistrationClient) -> Self {
        Self {
            client,
            store: ResourceStore::new(),
        }
    }

    /// Copy out the current request state
    pub fn snapshot(&self) -> Snapshot<VisitorRegistration> {
        self.store.snapshot()
    }

    /// The registrations as last loaded or locally patched
    pub fn registrations(&self) -> Vec<VisitorRegistration> {
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

    /// Reload the registrations from the backend
    pub async fn fetch_all(&self) -> Result<Vec<VisitorRegistration>, Error> {
        let generation = self.store.begin_load();
        match self.client.list().await {
            Ok(items) => {
                self.store.finish_items(generation, items.clone());
                Ok(items)
            }
            Err(err) => {
                self.store
                    .finish_load_error(generation, format!("Failed to load registrations: {}", err));
                Err(err)
            }
        }
    }

    /// Register a visitor group. The draft is validated before any request
    /// goes out; on success the new registration (carrying its generated
    /// unique code) is appended locally and returned.
    pub async fn register(&self, draft: &RegistrationDraft) -> Result<IslandEntryRecord, Error> {
        draft.validate()?;

        self.store.begin();
        match self.client.register(draft).await {
            Ok(record) => {
                self.store
                    .finish_created(record.registration.clone());
                Ok(record)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to register visitors: {}", err));
                Err(err)
            }
        }
    }

    /// Look a registration up by unique code or leader name. Does not touch
    /// the local collection.
    pub async fn lookup(&self, query: &LookupQuery) -> Result<IslandEntryRecord, Error> {
        self.store.begin();
        match self.client.lookup(query).await {
            Ok(record) => {
                self.store.finish_ok();
                Ok(record)
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to look up registration: {}", err));
                Err(err)
            }
        }
    }

    /// Check a paid group in; callers re-look-up to observe the new state
    pub async fn check_in(&self, unique_code: &str) -> Result<(), Error> {
        self.store.begin();
        match self.client.check_in(unique_code).await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to check in: {}", err));
                Err(err)
            }
        }
    }

    /// Record a manual payment; callers re-fetch to observe the new state
    pub async fn mark_paid(&self, id: i64) -> Result<(), Error> {
        self.store.begin();
        match self.client.mark_paid(id).await {
            Ok(()) => {
                self.store.finish_ok();
                Ok(())
            }
            Err(err) => {
                self.store
                    .finish_error(format!("Failed to mark as paid: {}", err));
                Err(err)
            }
        }
    }

    /// Export the visitor log as raw xlsx bytes
    pub async fn export_xlsx(&self) -> Result<Vec<u8>, Error> {
        self.client.export_xlsx().await
    }
}
