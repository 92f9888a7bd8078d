//! Reactive confirm gate owned by the component presenting it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `state::confirm_gate::GateState` in a signal so controls re-render
//! on transitions, and holds the completion callback supplied at construction.
//! The callback runs synchronously during the confirm transition; anything it
//! starts (a network delete, say) is not awaited or observed here.

#[cfg(test)]
#[path = "confirm_gate_test.rs"]
mod confirm_gate_test;

use leptos::prelude::*;

use crate::state::confirm_gate::{GateEvent, GateState};

/// Handle to a gate created with [`use_confirm_gate`].
#[derive(Clone, Copy)]
pub struct ConfirmGate {
    state: RwSignal<GateState>,
    on_confirm: Callback<()>,
}

/// Create a disarmed gate that runs `on_confirm` once per confirmed arm cycle.
pub fn use_confirm_gate(on_confirm: Callback<()>) -> ConfirmGate {
    ConfirmGate {
        state: RwSignal::new(GateState::default()),
        on_confirm,
    }
}

impl ConfirmGate {
    /// Arm the gate. No effect if already armed.
    pub fn activate_trigger(&self) {
        self.apply(GateEvent::Trigger);
    }

    /// Disarm without running the callback.
    pub fn cancel(&self) {
        self.apply(GateEvent::Cancel);
    }

    /// Disarm, then run the callback. No-op while disarmed.
    pub fn confirm(&self) {
        self.apply(GateEvent::Confirm);
    }

    /// Tracked read of whether the gate is armed.
    pub fn is_armed(&self) -> bool {
        self.state.get().is_armed()
    }

    pub fn state(&self) -> Signal<GateState> {
        self.state.into()
    }

    fn apply(&self, event: GateEvent) {
        let current = self.state.get_untracked();
        let step = current.step(event);
        // Only write on a real change so idempotent triggers do not notify.
        if step.next != current {
            log::debug!("confirm gate {current:?} --{event:?}--> {:?}", step.next);
            self.state.set(step.next);
        }
        if step.fire {
            self.on_confirm.run(());
        }
    }
}
