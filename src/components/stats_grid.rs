//! Stats Grid Component
//!
//! Four counts over the full collection; filter and search never change them.

use leptos::prelude::*;

use crate::components::StatCard;
use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn StatsGrid() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");
    let stats = Memo::new(move |_| ctx.store.collection().read().stats());

    view! {
        <div class="stats-grid">
            <StatCard
                label="Total Opportunities"
                value=Signal::derive(move || stats.get().total)
            />
            <StatCard
                label="Active Applications"
                value=Signal::derive(move || stats.get().active)
                accent="stat-value-active"
            />
            <StatCard
                label="Completed"
                value=Signal::derive(move || stats.get().completed)
                accent="stat-value-completed"
            />
            <StatCard
                label="High Priority"
                value=Signal::derive(move || stats.get().high_priority)
                accent="stat-value-high"
            />
        </div>
    }
}
