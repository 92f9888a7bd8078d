//! Two-state machine behind every confirm-then-act control.
//!
//! DESIGN
//! ======
//! A guarded action is never run by its trigger. The trigger arms the gate;
//! only a confirm from the armed state fires, and it disarms in the same step.
//! Rendering derives the visible controls from the state alone, so a control
//! that would be a no-op is never offered.

#[cfg(test)]
#[path = "confirm_gate_test.rs"]
mod confirm_gate_test;

/// Whether the gate is waiting for the user's second, affirmative choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Disarmed,
    Armed,
}

/// User interactions a gate reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Trigger,
    Cancel,
    Confirm,
}

/// A control the presentation layer renders for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateControl {
    Trigger,
    Cancel,
    Confirm,
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: GateState,
    /// True only on `Armed --Confirm--> Disarmed`.
    pub fire: bool,
}

const DISARMED_CONTROLS: &[GateControl] = &[GateControl::Trigger];
const ARMED_CONTROLS: &[GateControl] = &[GateControl::Cancel, GateControl::Confirm];

impl GateState {
    /// Apply `event`. Events with no transition from the current state
    /// leave it unchanged and never fire.
    pub fn step(self, event: GateEvent) -> Step {
        match (self, event) {
            (Self::Disarmed | Self::Armed, GateEvent::Trigger) => Step {
                next: Self::Armed,
                fire: false,
            },
            (Self::Armed, GateEvent::Cancel) => Step {
                next: Self::Disarmed,
                fire: false,
            },
            (Self::Armed, GateEvent::Confirm) => Step {
                next: Self::Disarmed,
                fire: true,
            },
            (Self::Disarmed, GateEvent::Cancel | GateEvent::Confirm) => Step {
                next: Self::Disarmed,
                fire: false,
            },
        }
    }

    pub fn is_armed(self) -> bool {
        self == Self::Armed
    }

    /// Controls to render, in display order.
    pub fn controls(self) -> &'static [GateControl] {
        match self {
            Self::Disarmed => DISARMED_CONTROLS,
            Self::Armed => ARMED_CONTROLS,
        }
    }

    /// Whether `event` corresponds to a control currently on screen.
    pub fn offers(self, event: GateEvent) -> bool {
        let control = match event {
            GateEvent::Trigger => GateControl::Trigger,
            GateEvent::Cancel => GateControl::Cancel,
            GateEvent::Confirm => GateControl::Confirm,
        };
        self.controls().contains(&control)
    }
}
