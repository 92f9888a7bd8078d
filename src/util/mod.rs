//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the components stay renderable on the server and testable natively.

pub mod dark_mode;
pub mod modal;
pub mod ui_persistence;
