//! Confirm-then-act controls, including the deck delete gesture.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ConfirmGateControls` renders whatever controls the gate's current state
//! offers, so a cancel or confirm button only exists while armed.
//! `DeleteConfirmation` wires a gate to a backend delete request.

#[cfg(test)]
#[path = "confirm_gate_test.rs"]
mod confirm_gate_test;

use leptos::prelude::*;

use crate::hooks::confirm_gate::{ConfirmGate, use_confirm_gate};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::DeckKind;
use crate::state::confirm_gate::GateControl;

/// Button text for each gate control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateLabels {
    pub trigger: String,
    pub cancel: String,
    pub confirm: String,
}

impl Default for GateLabels {
    fn default() -> Self {
        Self {
            trigger: "Delete...".to_owned(),
            cancel: "Cancel".to_owned(),
            confirm: "Yes, delete".to_owned(),
        }
    }
}

impl GateLabels {
    pub fn for_control(&self, control: GateControl) -> &str {
        match control {
            GateControl::Trigger => &self.trigger,
            GateControl::Cancel => &self.cancel,
            GateControl::Confirm => &self.confirm,
        }
    }
}

fn control_class(control: GateControl) -> &'static str {
    match control {
        GateControl::Trigger => "btn confirm-gate__trigger",
        GateControl::Cancel => "btn confirm-gate__cancel",
        GateControl::Confirm => "btn btn--danger confirm-gate__confirm",
    }
}

/// Controls for a confirm gate: the trigger while disarmed, cancel and
/// confirm (plus the optional prompt) while armed.
#[component]
pub fn ConfirmGateControls(
    gate: ConfirmGate,
    #[prop(optional)] labels: Option<GateLabels>,
    #[prop(optional, into)] prompt: Option<String>,
) -> impl IntoView {
    let labels = labels.unwrap_or_default();

    let prompt_view = move || {
        prompt
            .clone()
            .filter(|_| gate.is_armed())
            .map(|text| view! { <span class="confirm-gate__prompt">{text}</span> })
    };

    let controls = move || {
        let labels = labels.clone();
        gate.state()
            .get()
            .controls()
            .iter()
            .map(move |&control| {
                let class = control_class(control);
                let label = labels.for_control(control).to_owned();
                view! {
                    <button
                        class=class
                        on:click=move |_| match control {
                            GateControl::Trigger => gate.activate_trigger(),
                            GateControl::Cancel => gate.cancel(),
                            GateControl::Confirm => gate.confirm(),
                        }
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <span class="confirm-gate" class:confirm-gate--armed=move || gate.is_armed()>
            {prompt_view}
            {controls}
        </span>
    }
}

/// Route a finished delete: `on_deleted` runs only when the backend accepted
/// it; a failure is logged and goes no further.
#[cfg(any(test, feature = "hydrate"))]
fn finish_delete(kind: DeckKind, id: &str, result: Result<(), ApiError>, on_deleted: Option<Callback<()>>) {
    match result {
        Ok(()) => {
            log::info!("deleted {} {id}", kind.name());
            if let Some(on_deleted) = on_deleted {
                on_deleted.run(());
            }
        }
        Err(e) => log::error!("failed to delete {} {id}: {e}", kind.name()),
    }
}

/// Delete control for a deck. Confirming dispatches the delete request;
/// `on_deleted` runs once the backend accepts it. A failed delete is logged
/// and leaves the caller uninformed.
#[component]
pub fn DeleteConfirmation(
    kind: DeckKind,
    #[prop(into)] id: String,
    #[prop(optional)] on_deleted: Option<Callback<()>>,
) -> impl IntoView {
    let on_confirm = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_resource(kind, &id).await;
                finish_delete(kind, &id, result, on_deleted);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, &id, on_deleted);
        }
    });
    let gate = use_confirm_gate(on_confirm);

    view! {
        <div class="delete-confirmation">
            <ConfirmGateControls gate=gate prompt="Really delete?"/>
        </div>
    }
}
