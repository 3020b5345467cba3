//! Filter Bar Component
//!
//! Title search and category selector.

use leptos::prelude::*;
use opportunity_client::CATEGORY_OPTIONS;

use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");

    view! {
        <div class="card filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search opportunities..."
                prop:value=move || ctx.store.filter().read().search_term.clone()
                on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
            />
            <select
                class="filter-select"
                on:change=move |ev| ctx.set_category(&event_target_value(&ev))
            >
                {CATEGORY_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    let is_selected = move || ctx.store.filter().read().category.value() == value;
                    view! { <option value=value prop:selected=is_selected>{*label}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
