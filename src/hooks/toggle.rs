//! Boolean view-state hooks for show/hide and on/off controls.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use leptos::prelude::*;

use crate::util::ui_persistence;

/// Handle returned by [`use_toggle`] and [`use_persisted_toggle`].
#[derive(Clone, Copy)]
pub struct ToggleHandle {
    value: RwSignal<bool>,
}

/// Component-local on/off flag.
pub fn use_toggle(initial: bool) -> ToggleHandle {
    ToggleHandle {
        value: RwSignal::new(initial),
    }
}

/// On/off flag seeded from `localStorage` and written back whenever it
/// changes. Falls back to `default` when nothing valid is stored.
pub fn use_persisted_toggle(key: &'static str, default: bool) -> ToggleHandle {
    let handle = use_toggle(stored_or_default(key, default));
    let value = handle.value;
    Effect::new(move || {
        ui_persistence::save_json(key, &value.get());
    });
    handle
}

fn stored_or_default(key: &str, default: bool) -> bool {
    ui_persistence::load_json::<bool>(key).unwrap_or(default)
}

impl ToggleHandle {
    /// Tracked read.
    pub fn get(&self) -> bool {
        self.value.get()
    }

    pub fn get_untracked(&self) -> bool {
        self.value.get_untracked()
    }

    pub fn set(&self, on: bool) {
        self.value.set(on);
    }

    pub fn toggle(&self) {
        self.value.update(|v| *v = !*v);
    }

    /// Underlying signal, for binding to inputs such as `Toggle`.
    pub fn signal(&self) -> RwSignal<bool> {
        self.value
    }
}
