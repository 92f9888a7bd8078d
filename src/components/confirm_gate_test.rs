use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn default_labels_match_delete_gesture() {
    let labels = GateLabels::default();
    assert_eq!(labels.for_control(GateControl::Trigger), "Delete...");
    assert_eq!(labels.for_control(GateControl::Cancel), "Cancel");
    assert_eq!(labels.for_control(GateControl::Confirm), "Yes, delete");
}

#[test]
fn custom_labels_are_used_per_control() {
    let labels = GateLabels {
        trigger: "Archive".to_owned(),
        cancel: "Keep".to_owned(),
        confirm: "Archive now".to_owned(),
    };
    assert_eq!(labels.for_control(GateControl::Trigger), "Archive");
    assert_eq!(labels.for_control(GateControl::Confirm), "Archive now");
}

#[test]
fn only_confirm_is_styled_as_danger() {
    assert!(control_class(GateControl::Confirm).contains("btn--danger"));
    assert!(!control_class(GateControl::Cancel).contains("btn--danger"));
    assert!(!control_class(GateControl::Trigger).contains("btn--danger"));
}

// =============================================================
// Delete result routing
// =============================================================

fn counting_callback() -> (Owner, Callback<()>, Arc<AtomicUsize>) {
    let owner = Owner::new();
    owner.set();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_cb = calls.clone();
    let callback = Callback::new(move |()| {
        calls_cb.fetch_add(1, Ordering::SeqCst);
    });
    (owner, callback, calls)
}

#[test]
fn finish_delete_runs_callback_once_on_success() {
    let (_owner, on_deleted, calls) = counting_callback();
    finish_delete(DeckKind::Idea, "42", Ok(()), Some(on_deleted));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn finish_delete_skips_callback_on_failure() {
    let (_owner, on_deleted, calls) = counting_callback();
    finish_delete(DeckKind::Idea, "42", Err(ApiError::Status(500)), Some(on_deleted));
    finish_delete(
        DeckKind::Person,
        "p-1",
        Err(ApiError::Request("offline".to_owned())),
        Some(on_deleted),
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn finish_delete_without_callback_is_fine() {
    finish_delete(DeckKind::Quote, "q", Ok(()), None);
    finish_delete(DeckKind::Quote, "q", Err(ApiError::Unavailable), None);
}

// =============================================================
// Rendered controls
// =============================================================

#[cfg(feature = "ssr")]
fn render_controls(gate: ConfirmGate) -> String {
    view! { <ConfirmGateControls gate=gate prompt="Really delete?"/> }.to_html()
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_controls_swap_when_armed_and_restore_after_cancel() {
    let (_owner, on_confirm, calls) = counting_callback();
    let gate = use_confirm_gate(on_confirm);

    let disarmed = render_controls(gate);
    assert!(disarmed.contains("confirm-gate__trigger"));
    assert!(disarmed.contains("Delete..."));
    assert!(!disarmed.contains("confirm-gate__cancel"));
    assert!(!disarmed.contains("confirm-gate__confirm"));
    assert!(!disarmed.contains("Really delete?"));

    gate.activate_trigger();
    let armed = render_controls(gate);
    assert!(!armed.contains("confirm-gate__trigger"));
    assert!(armed.contains("confirm-gate__cancel"));
    assert!(armed.contains("btn--danger confirm-gate__confirm"));
    assert!(armed.contains("Really delete?"));

    gate.cancel();
    let restored = render_controls(gate);
    assert!(restored.contains("confirm-gate__trigger"));
    assert!(!restored.contains("confirm-gate__cancel"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_controls_restore_trigger_after_confirm() {
    let (_owner, on_confirm, calls) = counting_callback();
    let gate = use_confirm_gate(on_confirm);

    gate.activate_trigger();
    gate.confirm();
    let html = render_controls(gate);
    assert!(html.contains("confirm-gate__trigger"));
    assert!(!html.contains("confirm-gate__confirm"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
