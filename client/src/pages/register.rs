//! Patient registration page: a controlled three-field form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every keystroke replaces one field of a screen-local `PatientDraft`. Submit
//! is intercepted (no native navigation) and the draft is handed to the
//! `DraftSink` found in context. The form has a single editing state; a submit
//! neither clears the draft nor shows a confirmation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::sink::DraftSink;
use crate::state::draft::{DraftField, PatientDraft};

/// Hand `draft` to `sink` if every field is present.
///
/// The browser's `required` check normally blocks an incomplete submit before
/// it reaches us; this keeps the sink contract intact when that check is
/// bypassed.
///
/// # Errors
///
/// Returns the missing fields, in form order, without invoking the sink.
pub fn submit_draft(draft: &PatientDraft, sink: &DraftSink) -> Result<(), Vec<DraftField>> {
    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(missing);
    }
    sink.submit(draft);
    Ok(())
}

fn blocked_submit_message(missing: &[DraftField]) -> String {
    let names = missing.iter().map(|field| field.name()).collect::<Vec<_>>().join(", ");
    format!("registration submit blocked, missing: {names}")
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let sink = use_context::<DraftSink>().unwrap_or_default();
    let draft = RwSignal::new(PatientDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if let Err(missing) = submit_draft(&current, &sink) {
            let message = blocked_submit_message(&missing);
            #[cfg(feature = "hydrate")]
            log::warn!("{message}");
            #[cfg(not(feature = "hydrate"))]
            leptos::logging::warn!("{message}");
        }
    };

    let inputs = DraftField::ALL
        .into_iter()
        .map(move |field| {
            view! {
                <input
                    class="register-input"
                    type=field.input_type()
                    name=field.name()
                    placeholder=field.placeholder()
                    required=true
                    prop:value=move || draft.with(|d| d.get(field).to_owned())
                    on:input=move |ev| {
                        draft.update(|d| {
                            d.apply_change(field.name(), event_target_value(&ev));
                        });
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="register-page">
            <form class="register-form" on:submit=on_submit>
                {inputs}
                <button class="register-button" type="submit">
                    "Register"
                </button>
            </form>
        </div>
    }
}
