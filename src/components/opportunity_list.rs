//! Opportunity List Component
//!
//! Filtered view of the fetched collection.

use leptos::prelude::*;
use opportunity_client::filter_opportunities;

use crate::components::OpportunityRow;
use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn OpportunityList() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");

    let visible = Memo::new(move |_| {
        let collection = ctx.store.collection().read();
        let filter = ctx.store.filter().read();
        filter_opportunities(collection.opportunities(), &filter)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let is_loading = move || ctx.store.collection().read().is_loading();
    let is_filtered = move || ctx.store.filter().read().is_active();

    let empty_message = move || {
        if is_loading() {
            "Loading opportunities..."
        } else if is_filtered() {
            "No opportunities match the current filters."
        } else {
            "No opportunities yet."
        }
    };

    view! {
        <div class="card opportunity-list">
            <div class="card-header">
                <h2>"Opportunities"</h2>
                <span class="list-count">{move || visible.get().len()}</span>
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || view! { <p class="empty-state">{empty_message}</p> }
            >
                <div class="opportunity-rows">
                    <For
                        each=move || visible.get()
                        // Keyed on every field, so a re-fetch that changes a record re-renders its row
                        key=|opp| (opp.id, opp.fingerprint())
                        children=move |opp| view! { <OpportunityRow opportunity=opp /> }
                    />
                </div>
            </Show>
        </div>
    }
}
