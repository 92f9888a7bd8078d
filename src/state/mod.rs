//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types here are plain values; components wrap them in signals so the
//! transition rules stay testable without a reactive runtime.

pub mod confirm_gate;
pub mod ui;
