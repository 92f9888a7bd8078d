//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components map props to markup. Branching decisions live in small pure
//! helpers next to each component; shared view settings are read from the
//! `RwSignal<UiState>` context when present.

pub mod confirm_gate;
pub mod links;
pub mod margin;
pub mod modal;
pub mod star_rating;
pub mod toggle;
