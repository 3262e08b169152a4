//! Proxy errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors produced while forwarding a resource request upstream.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The path names a resource the admin app does not manage.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The record id cannot name a single record under the resource.
    #[error("invalid record id: {0:?}")]
    InvalidRecordId(String),

    /// The resource is known but no upstream URL is configured for it.
    #[error("no upstream configured for {0}")]
    Unconfigured(String),

    /// The upstream could not be reached or its body could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The shared HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownResource(_) | Self::InvalidRecordId(_) => StatusCode::NOT_FOUND,
            Self::Unconfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownResource(_) => "E_UNKNOWN_RESOURCE",
            Self::InvalidRecordId(_) => "E_INVALID_RECORD_ID",
            Self::Unconfigured(_) => "E_UPSTREAM_UNCONFIGURED",
            Self::Upstream(_) => "E_UPSTREAM_REQUEST",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": { "code": self.error_code(), "message": self.to_string() }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
