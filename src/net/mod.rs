//! Networking modules for the Civil HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the few requests presentational controls trigger directly
//! (deletes behind a confirm gate); `types` defines the shared vocabulary.

pub mod api;
pub mod types;
