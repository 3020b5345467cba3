//! Opportunity Dashboard Core
//!
//! Layered like the frontend that consumes it:
//! - models: wire entities returned by the opportunities service
//! - config: endpoint and feature configuration
//! - client: the `OpportunityApi` seam and its HTTP implementation
//! - filter / stats / display: pure derivations over the fetched collection
//! - session: the dashboard's ephemeral state and its async actions

mod client;
mod config;
mod display;
mod error;
mod filter;
mod models;
mod session;
mod stats;

pub use client::{HttpOpportunityClient, OpportunityApi};
pub use config::{DashboardConfig, DEFAULT_API_BASE_URL};
pub use display::{
    category_label, contact_entries, format_deadline, format_score, status_label, PriorityLevel,
    StatusKind, CATEGORY_OPTIONS, MEDIUM_PRIORITY_THRESHOLD,
};
pub use error::{ClientError, ClientResult};
pub use filter::{filter_opportunities, CategoryFilter, OpportunityFilter};
pub use models::{CreateOpportunity, Opportunity};
pub use session::{
    refresh, submit_draft, update_status, Collection, Composer, DashboardAction, DashboardError,
    DashboardSession, SessionCell, SubmitOutcome,
};
pub use stats::{DashboardStats, HIGH_PRIORITY_THRESHOLD};
