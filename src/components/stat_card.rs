//! Statistics Card Component

use leptos::prelude::*;

/// Single aggregate count with its label
#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<usize>,
    /// Extra class for the number, e.g. "stat-value-completed"
    #[prop(optional)]
    accent: &'static str,
) -> impl IntoView {
    let value_class = if accent.is_empty() {
        "stat-value".to_string()
    } else {
        format!("stat-value {}", accent)
    };

    view! {
        <div class="card stat-card">
            <h3 class="stat-label">{label}</h3>
            <p class=value_class>{move || value.get()}</p>
        </div>
    }
}
