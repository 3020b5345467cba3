//! UI Components
//!
//! Leptos components for the dashboard view.

mod create_modal;
mod dashboard_header;
mod filter_bar;
mod notice_banner;
mod opportunity_list;
mod opportunity_row;
mod stat_card;
mod stats_grid;

pub use create_modal::CreateModal;
pub use dashboard_header::DashboardHeader;
pub use filter_bar::FilterBar;
pub use notice_banner::NoticeBanner;
pub use opportunity_list::OpportunityList;
pub use opportunity_row::OpportunityRow;
pub use stat_card::StatCard;
pub use stats_grid::StatsGrid;
