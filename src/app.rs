//! Opportunity Dashboard App
//!
//! Single dashboard view: header, stats, filter bar, list and creation modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{CreateModal, DashboardHeader, FilterBar, NoticeBanner, OpportunityList, StatsGrid};
use crate::config::load_config;
use crate::context::DashboardContext;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let store = Store::new(DashboardState::new(config.creation_enabled));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = DashboardContext::new(store, config, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("Loading opportunities, trigger={}", trigger);
        actions::fetch(store, ctx.config());
    });

    view! {
        <div class="dashboard">
            <DashboardHeader />

            <main class="dashboard-content">
                <NoticeBanner />
                <StatsGrid />
                <FilterBar />
                <OpportunityList />
            </main>

            <CreateModal />
        </div>
    }
}
