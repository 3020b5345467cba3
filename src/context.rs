//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use opportunity_client::{CategoryFilter, DashboardConfig, DashboardSession, SessionCell, StatusKind};

use crate::actions;
use crate::store::{DashboardStore, SessionHandle};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Reactive view state
    pub store: DashboardStore,
    /// Injected service configuration
    config: StoredValue<DashboardConfig>,
    /// Trigger to reload opportunities from the service - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload opportunities from the service - write
    set_reload_trigger: WriteSignal<u32>,
}

impl DashboardContext {
    pub fn new(
        store: DashboardStore,
        config: DashboardConfig,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    /// Trigger a full re-fetch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Run a synchronous transition on the session
    pub fn update_session<R>(&self, f: impl FnOnce(&mut DashboardSession) -> R) -> R {
        SessionHandle(self.store).update_session(f)
    }

    pub fn set_category(&self, value: &str) {
        let category = CategoryFilter::from_value(value);
        self.update_session(|s| s.set_category(category));
    }

    pub fn set_search_term(&self, term: String) {
        self.update_session(|s| s.set_search_term(term));
    }

    pub fn open_composer(&self) {
        if !self.update_session(|s| s.open_composer()) {
            log::warn!("Opportunity creation is disabled");
        }
    }

    pub fn submit(&self) {
        actions::submit(self.store, self.config());
    }

    pub fn change_status(&self, id: u32, status: StatusKind) {
        actions::change_status(self.store, self.config(), id, status);
    }
}
