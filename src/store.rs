//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each part of the
//! session is its own store field, so typing in the search box or the
//! composer only notifies the views that read that part.

use leptos::prelude::*;
use opportunity_client::{
    Collection, Composer, DashboardError, DashboardSession, OpportunityFilter, SessionCell,
};
use reactive_stores::Store;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Fetched records and in-flight fetch count
    pub collection: Collection,
    /// Category and search term
    pub filter: OpportunityFilter,
    /// Creation modal
    pub composer: Composer,
    pub creation_enabled: bool,
    pub last_error: Option<DashboardError>,
    /// Transient success message
    pub notice: Option<String>,
    /// Row whose status change is in flight
    pub pending_status: Option<u32>,
}

impl DashboardState {
    pub fn new(creation_enabled: bool) -> Self {
        Self {
            creation_enabled,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// `SessionCell` over the store's session fields, so the shared async
/// actions can drive the reactive state
#[derive(Clone, Copy)]
pub struct SessionHandle(pub DashboardStore);

impl SessionCell for SessionHandle {
    fn update_session<R>(&self, f: impl FnOnce(&mut DashboardSession) -> R) -> R {
        let store = self.0;

        // The collection is moved out rather than cloned; its revision and
        // in-flight count tell whether the transition touched it.
        let collection = std::mem::take(&mut *store.collection().write_untracked());
        let collection_key = (collection.revision(), collection.is_loading());
        let mut session = DashboardSession {
            collection,
            filter: store.filter().get_untracked(),
            composer: store.composer().get_untracked(),
            creation_enabled: store.creation_enabled().get_untracked(),
            last_error: store.last_error().get_untracked(),
            notice: store.notice().get_untracked(),
        };
        let before = (
            session.filter.clone(),
            session.composer.clone(),
            session.last_error.clone(),
            session.notice.clone(),
        );

        let result = f(&mut session);

        let DashboardSession { collection, filter, composer, creation_enabled, last_error, notice } = session;
        let collection_changed = (collection.revision(), collection.is_loading()) != collection_key;
        *store.collection().write_untracked() = collection;
        if collection_changed {
            store.collection().notify();
        }
        if filter != before.0 {
            store.filter().set(filter);
        }
        if composer != before.1 {
            store.composer().set(composer);
        }
        if creation_enabled != store.creation_enabled().get_untracked() {
            store.creation_enabled().set(creation_enabled);
        }
        if last_error != before.2 {
            store.last_error().set(last_error);
        }
        if notice != before.3 {
            store.notice().set(notice);
        }
        result
    }
}
