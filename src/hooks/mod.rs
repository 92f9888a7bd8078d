//! View-state hooks wrapping Leptos signal primitives.
//!
//! DESIGN
//! ======
//! Each hook owns one small piece of component-local state and exposes
//! transition methods instead of the raw signal, so callers cannot put the
//! state somewhere its rules do not allow.

pub mod confirm_gate;
pub mod toggle;
