//! Opportunity Row Component
//!
//! One record: title, status badge, category, deadline, priority,
//! requirements, contact details and a status selector.
//!
//! The selector always shows the record's status as last fetched. A pick is
//! handed to the status action and the control snaps back; the new value
//! appears only once the re-fetch brings it.

use leptos::prelude::*;
use opportunity_client::{
    category_label, contact_entries, format_deadline, format_score, status_label, Opportunity,
    PriorityLevel, StatusKind,
};

use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

/// Characters of the source text shown under the title
const EXCERPT_CHARS: usize = 140;

#[component]
pub fn OpportunityRow(opportunity: Opportunity) -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");

    let id = opportunity.id;
    let status = opportunity.status_kind();
    let priority = PriorityLevel::from_score(opportunity.priority_score);
    let summary = opportunity.content.as_deref().map(excerpt);
    let deadline = opportunity.deadline.as_deref().map(format_deadline);
    let contacts = contact_entries(opportunity.contact_info.as_ref());
    let requirements = opportunity.requirements.clone();
    let current_status = opportunity.status.clone();

    let is_pending = move || ctx.store.pending_status().get() == Some(id);

    let on_status_change = {
        let current_status = current_status.clone();
        move |ev: web_sys::Event| {
            let picked = event_target_value(&ev);
            event_target::<web_sys::HtmlSelectElement>(&ev).set_value(&current_status);
            if let Some(next) = status_choice(&current_status, &picked) {
                ctx.change_status(id, next);
            }
        }
    };

    view! {
        <div class="opportunity-row">
            <div class="opportunity-main">
                <h3 class="opportunity-title">{opportunity.title.clone()}</h3>
                {summary.map(|text| view! { <p class="opportunity-excerpt">{text}</p> })}
                <div class="opportunity-meta">
                    <span class=status.css_class()>{status_label(&opportunity.status)}</span>
                    <span class="opportunity-category">{category_label(&opportunity.category)}</span>
                    {deadline.map(|d| view! { <span class="opportunity-deadline">"⏰ " {d}</span> })}
                </div>
                {(!requirements.is_empty()).then(|| view! {
                    <ul class="opportunity-requirements">
                        {requirements.into_iter().map(|req| view! { <li>{req}</li> }).collect_view()}
                    </ul>
                })}
                {(!contacts.is_empty()).then(|| view! {
                    <dl class="opportunity-contact">
                        {contacts.into_iter().map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }).collect_view()}
                    </dl>
                })}
            </div>

            <div class="opportunity-side">
                <span class=priority.css_class()>
                    "★ " {format_score(opportunity.priority_score)}
                </span>
                <select
                    class="status-select"
                    prop:value=current_status.clone()
                    prop:disabled=is_pending
                    on:change=on_status_change
                >
                    {(status == StatusKind::Unknown).then(|| view! {
                        <option value=current_status.clone() disabled=true selected=true>{status_label(&current_status)}</option>
                    })}
                    {StatusKind::ALL.iter().map(|kind| view! {
                        <option value=kind.as_str() selected={*kind == status}>
                            {status_label(kind.as_str())}
                        </option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}

/// Status to request after picking `picked`, or None when nothing should be sent
fn status_choice(current: &str, picked: &str) -> Option<StatusKind> {
    match StatusKind::from_str(picked) {
        StatusKind::Unknown => None,
        _ if picked == current => None,
        kind => Some(kind),
    }
}

/// First `EXCERPT_CHARS` characters, with an ellipsis if cut
fn excerpt(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_choice() {
        assert_eq!(status_choice("new", "applied"), Some(StatusKind::Applied));
        assert_eq!(status_choice("archived", "completed"), Some(StatusKind::Completed));
        // Re-picking the shown status or the unknown placeholder sends nothing
        assert_eq!(status_choice("applied", "applied"), None);
        assert_eq!(status_choice("archived", "archived"), None);
    }

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("  Apply by Friday \n"), "Apply by Friday");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(EXCERPT_CHARS + 10);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
        assert!(cut.ends_with('…'));
    }
}
