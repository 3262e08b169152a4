//! Same-origin resource proxy handlers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to `/api/resources/{resource}[/{id}]`. Each
//! handler resolves the resource's upstream base URL and forwards the request
//! unchanged, so the client never needs upstream URLs or CORS access.

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::Response;

use crate::error::ProxyError;
use crate::state::AppState;
use crate::upstream::UpstreamResponse;

pub async fn list(State(state): State<AppState>, Path(resource): Path<String>) -> Result<Response, ProxyError> {
    proxy(&state, Method::GET, &resource, None, None).await
}

pub async fn create(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    proxy(&state, Method::POST, &resource, None, Some(body)).await
}

pub async fn get_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    proxy(&state, Method::GET, &resource, Some(&id), None).await
}

pub async fn replace_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    proxy(&state, Method::PUT, &resource, Some(&id), Some(body)).await
}

pub async fn patch_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    proxy(&state, Method::PATCH, &resource, Some(&id), Some(body)).await
}

pub async fn delete_record(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Response, ProxyError> {
    proxy(&state, Method::DELETE, &resource, Some(&id), None).await
}

async fn proxy(
    state: &AppState,
    method: Method,
    resource: &str,
    id: Option<&str>,
    body: Option<Bytes>,
) -> Result<Response, ProxyError> {
    let result = state.upstream.forward(method.clone(), resource, id, body).await;
    match &result {
        Ok(reply) => tracing::info!(%method, resource, id, status = reply.status, "proxied"),
        Err(e) => tracing::warn!(%method, resource, id, error = %e, "proxy failed"),
    }
    Ok(into_response(result?))
}

fn into_response(reply: UpstreamResponse) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = Response::new(Body::from(reply.body));
    *response.status_mut() = status;
    if let Some(value) = reply.content_type.and_then(|ct| ct.parse().ok()) {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
#[path = "resources_test.rs"]
mod tests;
