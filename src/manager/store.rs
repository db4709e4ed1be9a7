//! Request state shared by every resource manager
//!
//! A [`ResourceStore`] holds the collection last loaded from the backend
//! plus the loading/error state of in-flight calls. Collection loads carry
//! a generation token: only the most recently started load may write its
//! result, so a slow stale response can never clobber a newer one.

use std::sync::Mutex;

/// Gives a resource item its backend id
pub trait Identify {
    /// The backend id of this item
    fn id(&self) -> i64;
}

/// A point-in-time copy of a manager's request state
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// The collection as last loaded or locally patched
    pub items: Vec<T>,

    /// Whether any call is still in flight
    pub loading: bool,

    /// The human-readable error of the last failed call, cleared when a new
    /// call starts
    pub error: Option<String>,
}

struct Inner<T> {
    items: Vec<T>,
    error: Option<String>,
    in_flight: u32,
    latest: u64,
    next_generation: u64,
}

/// Loading/error/collection state for one resource
pub struct ResourceStore<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Clone + Identify> ResourceStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                error: None,
                in_flight: 0,
                latest: 0,
                next_generation: 0,
            }),
        }
    }

    /// Start a call that does not replace the collection: marks the store
    /// loading and clears the previous error.
    pub(crate) fn begin(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight += 1;
        inner.error = None;
    }

    /// Start a collection load. Besides the bookkeeping of [`begin`], bumps
    /// the load generation and returns the token the load must present when
    /// finishing; only the most recently started load may write its result.
    ///
    /// [`begin`]: ResourceStore::begin
    pub(crate) fn begin_load(&self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight += 1;
        inner.error = None;
        inner.next_generation += 1;
        inner.latest = inner.next_generation;
        inner.next_generation
    }

    /// Finish a collection load. The result is dropped when a newer load
    /// started after this one.
    pub(crate) fn finish_items(&self, generation: u64, items: Vec<T>) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        if generation == inner.latest {
            inner.items = items;
            inner.error = None;
        }
    }

    /// Finish a failed collection load, recording its message unless a
    /// newer load has already taken over.
    pub(crate) fn finish_load_error(&self, generation: u64, message: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        if generation == inner.latest {
            inner.error = Some(message);
        }
    }

    /// Finish a failed non-load call, recording its message
    pub(crate) fn finish_error(&self, message: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.error = Some(message);
    }

    /// Finish a call that leaves the collection alone (single-item loads,
    /// status transitions)
    pub(crate) fn finish_ok(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
    }

    /// Finish a successful create by appending the new item
    pub(crate) fn finish_created(&self, item: T) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.items.push(item);
    }

    /// Finish a successful update by replacing the matching item by id
    pub(crate) fn finish_replaced(&self, item: T) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        let id = item.id();
        if let Some(existing) = inner.items.iter_mut().find(|i| i.id() == id) {
            *existing = item;
        }
    }

    /// Finish a successful delete by filtering the item out
    pub(crate) fn finish_removed(&self, id: i64) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.items.retain(|i| i.id() != id);
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.lock().unwrap();
        Snapshot {
            items: inner.items.clone(),
            loading: inner.in_flight > 0,
            error: inner.error.clone(),
        }
    }

    /// The collection as last loaded or locally patched
    pub fn items(&self) -> Vec<T> {
        self.inner.lock().unwrap().items.clone()
    }

    /// Whether any call is still in flight
    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().in_flight > 0
    }

    /// The error of the last failed call, if any
    pub fn error(&self) -> Option<String> {
        self.inner.lock().unwrap().error.clone()
    }
}

impl<T: Clone + Identify> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(i64);

    impl Identify for Item {
        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn stale_load_does_not_overwrite_newer_one() {
        let store = ResourceStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        store.finish_items(second, vec![Item(2)]);
        store.finish_items(first, vec![Item(1)]);

        assert_eq!(store.items(), vec![Item(2)]);
        assert!(!store.is_loading());
    }

    #[test]
    fn stale_load_error_is_dropped() {
        let store = ResourceStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        store.finish_items(second, vec![Item(2)]);
        store.finish_load_error(first, "too late".to_string());

        assert_eq!(store.error(), None);
        assert_eq!(store.items(), vec![Item(2)]);
    }

    #[test]
    fn single_item_call_does_not_invalidate_an_in_flight_load() {
        let store = ResourceStore::new();
        let load = store.begin_load();

        store.begin();
        store.finish_ok();

        store.finish_items(load, vec![Item(1)]);
        assert_eq!(store.items(), vec![Item(1)]);
        assert!(!store.is_loading());
    }

    #[test]
    fn loading_and_error_never_coexist_at_rest() {
        let store: ResourceStore<Item> = ResourceStore::new();
        let generation = store.begin_load();
        assert!(store.is_loading());
        assert_eq!(store.error(), None);

        store.finish_load_error(generation, "backend down".to_string());
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some("backend down".to_string()));
    }

    #[test]
    fn local_patches_apply_by_id() {
        let store = ResourceStore::new();
        let generation = store.begin_load();
        store.finish_items(generation, vec![Item(1), Item(2), Item(3)]);

        store.begin();
        store.finish_removed(2);
        assert_eq!(store.items(), vec![Item(1), Item(3)]);

        store.begin();
        store.finish_created(Item(9));
        assert_eq!(store.items(), vec![Item(1), Item(3), Item(9)]);
    }

    #[test]
    fn failed_local_patch_records_its_error() {
        let store: ResourceStore<Item> = ResourceStore::new();
        store.begin();
        store.finish_error("delete rejected".to_string());

        assert!(!store.is_loading());
        assert_eq!(store.error(), Some("delete rejected".to_string()));
    }
}
