//! Dashboard Session
//!
//! The view's ephemeral state and the async actions that drive it.
//!
//! `DashboardSession` holds only synchronous transitions. The free functions
//! `refresh`, `submit_draft` and `update_status` pair those transitions with
//! `OpportunityApi` calls, reaching the state through a `SessionCell` so the
//! same flow runs against a reactive store in the browser and a `RefCell` in
//! tests. No borrow of the session is held across an `.await`.

use std::cell::RefCell;

use crate::client::OpportunityApi;
use crate::display::StatusKind;
use crate::error::{ClientError, ClientResult};
use crate::filter::{filter_opportunities, CategoryFilter, OpportunityFilter};
use crate::models::Opportunity;
use crate::stats::DashboardStats;

/// Which request a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    Fetch,
    Create,
    UpdateStatus,
}

/// Failure surfaced to the view instead of being swallowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardError {
    pub action: DashboardAction,
    pub message: String,
}

impl DashboardError {
    fn new(action: DashboardAction, error: &ClientError) -> Self {
        Self {
            action,
            message: error.to_string(),
        }
    }

    /// Fetch failures can be retried from the banner
    pub fn is_retryable(&self) -> bool {
        self.action == DashboardAction::Fetch
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the content; a re-fetch follows
    Created,
    /// Request failed; modal and draft untouched
    Failed,
    /// Nothing sent: creation disabled, modal closed, blank draft or already submitting
    Skipped,
}

/// The fetched records plus request bookkeeping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collection {
    opportunities: Vec<Opportunity>,
    /// Fetches started and not yet finished; they may overlap
    in_flight: usize,
    /// Bumped every time `opportunities` is replaced
    revision: u64,
}

impl Collection {
    /// Exactly what the last successful fetch returned
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_opportunities(&self.opportunities)
    }
}

/// Creation modal state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composer {
    open: bool,
    draft: String,
    submitting: bool,
}

impl Composer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Everything the dashboard view shows, split into parts that change independently
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSession {
    pub collection: Collection,
    pub filter: OpportunityFilter,
    pub composer: Composer,
    pub creation_enabled: bool,
    pub last_error: Option<DashboardError>,
    pub notice: Option<String>,
}

impl DashboardSession {
    pub fn new(creation_enabled: bool) -> Self {
        Self {
            creation_enabled,
            ..Default::default()
        }
    }

    // ========================
    // Collection
    // ========================

    pub fn opportunities(&self) -> &[Opportunity] {
        self.collection.opportunities()
    }

    pub fn visible(&self) -> Vec<&Opportunity> {
        filter_opportunities(self.collection.opportunities(), &self.filter)
    }

    pub fn stats(&self) -> DashboardStats {
        self.collection.stats()
    }

    pub fn is_loading(&self) -> bool {
        self.collection.is_loading()
    }

    pub fn begin_fetch(&mut self) {
        self.collection.in_flight += 1;
    }

    /// Replace the collection on success; keep it untouched on failure.
    /// Returns whether the fetch succeeded.
    pub fn finish_fetch(&mut self, result: ClientResult<Vec<Opportunity>>) -> bool {
        self.collection.in_flight = self.collection.in_flight.saturating_sub(1);
        match result {
            Ok(opportunities) => {
                self.collection.opportunities = opportunities;
                self.collection.revision += 1;
                self.clear_error_for(DashboardAction::Fetch);
                true
            }
            Err(e) => {
                self.last_error = Some(DashboardError::new(DashboardAction::Fetch, &e));
                false
            }
        }
    }

    // ========================
    // Filter Bar
    // ========================

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    // ========================
    // Composer (creation modal)
    // ========================

    pub fn is_modal_open(&self) -> bool {
        self.composer.open
    }

    pub fn is_submitting(&self) -> bool {
        self.composer.submitting
    }

    pub fn draft(&self) -> &str {
        &self.composer.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.composer.draft = draft.into();
    }

    /// Returns false when creation is disabled
    pub fn open_composer(&mut self) -> bool {
        if !self.creation_enabled {
            return false;
        }
        self.composer.open = true;
        true
    }

    /// Close without sending; the draft is kept for next time
    pub fn cancel_composer(&mut self) {
        if self.composer.submitting {
            return;
        }
        self.composer.open = false;
        self.clear_error_for(DashboardAction::Create);
    }

    /// Content to send, or None if a submit must not happen now
    pub fn begin_submit(&mut self) -> Option<String> {
        let composer = &mut self.composer;
        if !self.creation_enabled || !composer.open || composer.submitting {
            return None;
        }
        if composer.draft.trim().is_empty() {
            return None;
        }
        composer.submitting = true;
        Some(composer.draft.clone())
    }

    pub fn finish_submit(&mut self, result: ClientResult<()>) -> SubmitOutcome {
        self.composer.submitting = false;
        match result {
            Ok(()) => {
                self.composer.draft.clear();
                self.composer.open = false;
                self.clear_error_for(DashboardAction::Create);
                self.notice = Some("Opportunity submitted".to_string());
                SubmitOutcome::Created
            }
            Err(e) => {
                self.last_error = Some(DashboardError::new(DashboardAction::Create, &e));
                SubmitOutcome::Failed
            }
        }
    }

    // ========================
    // Status Updates
    // ========================

    /// Returns whether a re-fetch should follow
    pub fn finish_status_update(&mut self, result: ClientResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.last_error = Some(DashboardError::new(DashboardAction::UpdateStatus, &e));
                false
            }
        }
    }

    // ========================
    // Notices
    // ========================

    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn clear_error_for(&mut self, action: DashboardAction) {
        if matches!(&self.last_error, Some(e) if e.action == action) {
            self.last_error = None;
        }
    }
}

/// Shared, interior-mutable access to a session
pub trait SessionCell {
    fn update_session<R>(&self, f: impl FnOnce(&mut DashboardSession) -> R) -> R;
}

impl SessionCell for RefCell<DashboardSession> {
    fn update_session<R>(&self, f: impl FnOnce(&mut DashboardSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fetch the full collection into the session. Returns whether it succeeded.
pub async fn refresh<A, S>(api: &A, session: &S) -> bool
where
    A: OpportunityApi + ?Sized,
    S: SessionCell,
{
    session.update_session(|s| s.begin_fetch());
    let result = api.list_opportunities().await;
    if let Err(e) = &result {
        log::error!("Error fetching opportunities: {}", e);
    }
    session.update_session(|s| s.finish_fetch(result))
}

/// Send the composer's draft; on success re-fetch exactly once.
pub async fn submit_draft<A, S>(api: &A, session: &S) -> SubmitOutcome
where
    A: OpportunityApi + ?Sized,
    S: SessionCell,
{
    let Some(content) = session.update_session(|s| s.begin_submit()) else {
        log::debug!("Submit skipped");
        return SubmitOutcome::Skipped;
    };

    let result = api.create_opportunity(&content).await;
    if let Err(e) = &result {
        log::error!("Error creating opportunity: {}", e);
    }

    let outcome = session.update_session(|s| s.finish_submit(result));
    if outcome == SubmitOutcome::Created {
        refresh(api, session).await;
    }
    outcome
}

/// Move a record to `status`; on success re-fetch the collection.
pub async fn update_status<A, S>(api: &A, session: &S, id: u32, status: StatusKind) -> bool
where
    A: OpportunityApi + ?Sized,
    S: SessionCell,
{
    if status == StatusKind::Unknown {
        log::warn!("Refusing to set unknown status on opportunity {}", id);
        return false;
    }

    let result = api.update_status(id, status.as_str()).await;
    if let Err(e) = &result {
        log::error!("Error updating opportunity {}: {}", id, e);
    }

    let should_reload = session.update_session(|s| s.finish_status_update(result));
    if should_reload {
        refresh(api, session).await;
    }
    should_reload
}
