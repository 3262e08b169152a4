//! REST helpers for the resource proxy.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api/resources/...` routes.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since tables
//! only fetch after mounting in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages map failures to a generic
//! toast and log the detail, so no request failure can break rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::Entity;

/// Failure of one REST round-trip.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected record shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// An update or delete was attempted on a record without an id.
    #[error("record has no id")]
    MissingId,
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// CRUD verb, used for user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrudOp {
    Load,
    Create,
    Update,
    Toggle,
    Delete,
}

impl CrudOp {
    const fn verb(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Create => "create",
            Self::Update => "update",
            Self::Toggle => "update the status of",
            Self::Delete => "delete",
        }
    }

    const fn past(self) -> &'static str {
        match self {
            Self::Load => "loaded",
            Self::Create => "created",
            Self::Update | Self::Toggle => "updated",
            Self::Delete => "deleted",
        }
    }
}

/// Generic alert text for a failed operation.
pub fn failure_message(op: CrudOp, label: &str) -> String {
    let noun = if matches!(op, CrudOp::Load) { "records" } else { label };
    format!("Failed to {} {noun}. Please try again.", op.verb())
}

/// Alert text for a successful operation.
pub fn success_message(op: CrudOp, label: &str) -> String {
    format!("{label} {} successfully.", op.past())
}

fn collection_endpoint(resource: &str) -> String {
    format!("/api/resources/{resource}")
}

fn record_endpoint(resource: &str, id: &str) -> String {
    format!("/api/resources/{resource}/{id}")
}

fn require_id(id: &str) -> Result<&str, ApiError> {
    if id.trim().is_empty() { Err(ApiError::MissingId) } else { Ok(id) }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch every record of `E` via `GET /api/resources/{resource}`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not an array of `E`.
pub async fn fetch_all<E: Entity>() -> Result<Vec<E>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&collection_endpoint(E::RESOURCE))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = collection_endpoint(E::RESOURCE);
        Err(ApiError::Unavailable)
    }
}

/// Create a record via `POST /api/resources/{resource}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the record.
pub async fn create<E: Entity>(record: &E) -> Result<E, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&collection_endpoint(E::RESOURCE))
            .json(record)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        Err(ApiError::Unavailable)
    }
}

/// Replace a record via `PUT /api/resources/{resource}/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::MissingId`] for unsaved records, otherwise any request failure.
pub async fn update<E: Entity>(record: &E) -> Result<E, ApiError> {
    let id = require_id(record.id())?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&record_endpoint(E::RESOURCE, id))
            .json(record)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_endpoint(E::RESOURCE, id);
        Err(ApiError::Unavailable)
    }
}

/// Partially update a record via `PATCH /api/resources/{resource}/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::MissingId`] for an empty id, otherwise any request failure.
pub async fn patch<E: Entity>(id: &str, body: &serde_json::Value) -> Result<E, ApiError> {
    let id = require_id(id)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&record_endpoint(E::RESOURCE, id))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (record_endpoint(E::RESOURCE, id), body);
        Err(ApiError::Unavailable)
    }
}

/// Delete a record via `DELETE /api/resources/{resource}/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::MissingId`] for an empty id, otherwise any request failure.
pub async fn delete<E: Entity>(id: &str) -> Result<(), ApiError> {
    let id = require_id(id)?;
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&record_endpoint(E::RESOURCE, id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_endpoint(E::RESOURCE, id);
        Err(ApiError::Unavailable)
    }
}
