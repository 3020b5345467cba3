//! Notice Banner Component
//!
//! Success notice after a submit, and the last non-composer error with
//! Retry (fetch failures) and Dismiss.

use leptos::prelude::*;
use opportunity_client::{DashboardAction, DashboardError};

use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

fn error_title(error: &DashboardError) -> &'static str {
    match error.action {
        DashboardAction::Fetch => "Could not load opportunities",
        DashboardAction::Create => "Could not submit opportunity",
        DashboardAction::UpdateStatus => "Could not update status",
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");

    let notice = move || ctx.store.notice().get();
    // Create errors are shown inside the modal instead
    let banner_error = move || {
        ctx.store
            .last_error()
            .get()
            .filter(|e| e.action != DashboardAction::Create)
    };

    view! {
        {move || notice().map(|text| view! {
            <div class="banner banner-success">{text}</div>
        })}
        {move || banner_error().map(|error| {
            let retryable = error.is_retryable();
            view! {
                <div class="banner banner-error">
                    <div class="banner-text">
                        <strong>{error_title(&error)}</strong>
                        <span>{error.message.clone()}</span>
                    </div>
                    <div class="banner-actions">
                        <Show when=move || retryable>
                            <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                        </Show>
                        <button
                            class="dismiss-btn"
                            on:click=move |_| ctx.update_session(|s| s.dismiss_error())
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_titles() {
        let error = DashboardError {
            action: DashboardAction::Fetch,
            message: "HTTP request failed".to_string(),
        };
        assert_eq!(error_title(&error), "Could not load opportunities");
        assert!(error.is_retryable());
    }
}
