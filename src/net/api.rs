//! REST API helpers for requests issued by presentational controls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `ApiError::Unavailable` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; how a failure is shown is
//! decided by whoever issued the request.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::DeckKind;

const API_BASE: &str = "/api";

/// Failure of a request to the Civil backend.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("not available on server")]
    Unavailable,
}

fn resource_endpoint(kind: DeckKind, id: &str) -> String {
    format!("{API_BASE}/{}/{id}", kind.path_segment())
}

/// Delete a deck via `DELETE /api/{segment}/{id}`.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the server responds
/// with a non-OK status.
pub async fn delete_resource(kind: DeckKind, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = resource_endpoint(kind, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = resource_endpoint(kind, id);
        Err(ApiError::Unavailable)
    }
}
