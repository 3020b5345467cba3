//! Dashboard Actions
//!
//! Spawned wrappers around the opportunity-client flows. Each builds a client
//! for the configured service and writes results back into the store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use opportunity_client::{self as client, DashboardConfig, HttpOpportunityClient, SessionCell, StatusKind, SubmitOutcome};

use crate::store::{DashboardStateStoreFields, DashboardStore, SessionHandle};

/// How long the "submitted" notice stays up
const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// Fetch the full collection
pub fn fetch(store: DashboardStore, config: DashboardConfig) {
    spawn_local(async move {
        let api = HttpOpportunityClient::new(config);
        client::refresh(&api, &SessionHandle(store)).await;
    });
}

/// Submit the composer draft; a successful create re-fetches inside the flow
pub fn submit(store: DashboardStore, config: DashboardConfig) {
    spawn_local(async move {
        let api = HttpOpportunityClient::new(config);
        let handle = SessionHandle(store);
        if client::submit_draft(&api, &handle).await == SubmitOutcome::Created {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            handle.update_session(|s| s.clear_notice());
        }
    });
}

/// Move one record to a new status, then re-fetch
pub fn change_status(store: DashboardStore, config: DashboardConfig, id: u32, status: StatusKind) {
    if store.pending_status().get_untracked().is_some() {
        log::debug!("Status change for {} ignored, another is in flight", id);
        return;
    }
    store.pending_status().set(Some(id));
    spawn_local(async move {
        let api = HttpOpportunityClient::new(config);
        client::update_status(&api, &SessionHandle(store), id, status).await;
        store.pending_status().set(None);
    });
}
