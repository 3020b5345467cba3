//! Dashboard Header Component
//!
//! Page title and, when creation is enabled, the "Add Opportunity" button.

use leptos::prelude::*;

use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");
    let creation_enabled = move || ctx.store.creation_enabled().get();

    view! {
        <header class="dashboard-header">
            <div class="dashboard-header-inner">
                <h1>"OpportunityBot Dashboard"</h1>
                <Show when=creation_enabled>
                    <button class="add-btn" on:click=move |_| ctx.open_composer()>
                        "+ Add Opportunity"
                    </button>
                </Show>
            </div>
        </header>
    }
}
