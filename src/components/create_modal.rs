//! Create Opportunity Modal
//!
//! Free-text composer. The service derives title, category, deadline and
//! priority from the text, so nothing else is collected here.

use leptos::prelude::*;
use opportunity_client::DashboardAction;

use crate::context::DashboardContext;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn CreateModal() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext should be provided");

    let is_open = move || ctx.store.composer().read().is_open();
    let is_submitting = move || ctx.store.composer().read().is_submitting();
    let draft = move || ctx.store.composer().read().draft().to_string();
    let can_submit = move || !is_submitting() && !draft().trim().is_empty();
    let create_error = move || {
        ctx.store
            .last_error()
            .get()
            .filter(|e| e.action == DashboardAction::Create)
            .map(|e| e.message)
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };
    let cancel = move || ctx.update_session(|s| s.cancel_composer());

    view! {
        <Show when=is_open>
            <div class="modal-backdrop" on:click=move |_| cancel()>
                <form
                    class="modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <h2>"Add Opportunity"</h2>
                    <p class="modal-hint">
                        "Paste the announcement or message. Details are extracted automatically."
                    </p>
                    <textarea
                        class="modal-textarea"
                        rows="8"
                        placeholder="e.g. We're hiring a junior Rust developer, apply before March 1st..."
                        prop:value=draft
                        prop:disabled=is_submitting
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.update_session(|s| s.set_draft(value));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                cancel();
                            }
                        }
                    />
                    {move || create_error().map(|message| view! {
                        <p class="modal-error">{message}</p>
                    })}
                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| cancel()>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn" prop:disabled=move || !can_submit()>
                            {move || if is_submitting() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
