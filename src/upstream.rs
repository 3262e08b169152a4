//! Forwarding client for the per-resource upstream REST APIs.
//!
//! DESIGN
//! ======
//! One pooled `reqwest::Client` serves every resource. Requests are forwarded
//! one-to-one: the upstream status, content type and body come back
//! untouched, and only transport failures become proxy errors.

use std::collections::BTreeMap;
use std::time::Duration;

use axum::body::Bytes;
use reqwest::{Method, Url};
use reqwest::header::CONTENT_TYPE;

use crate::config::AppConfig;
use crate::error::ProxyError;

/// Raw upstream reply, passed back to the browser as-is.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

pub struct UpstreamClient {
    http: reqwest::Client,
    upstreams: BTreeMap<&'static str, String>,
}

impl UpstreamClient {
    /// Build the shared client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: &AppConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstreams: config.upstreams.clone() })
    }

    /// Base URL for `resource`.
    ///
    /// # Errors
    ///
    /// [`ProxyError::UnknownResource`] for paths the admin app does not manage,
    /// [`ProxyError::Unconfigured`] for known resources without an upstream.
    pub fn base_url(&self, resource: &str) -> Result<&str, ProxyError> {
        if !client::net::types::RESOURCES.iter().any(|known| *known == resource) {
            return Err(ProxyError::UnknownResource(resource.to_owned()));
        }
        self.upstreams
            .get(resource)
            .map(String::as_str)
            .ok_or_else(|| ProxyError::Unconfigured(resource.to_owned()))
    }

    /// Send `method` to the collection (`id == None`) or a record of `resource`.
    ///
    /// # Errors
    ///
    /// Returns a routing error from [`Self::base_url`], or
    /// [`ProxyError::Upstream`] when the upstream cannot be reached.
    pub async fn forward(
        &self,
        method: Method,
        resource: &str,
        id: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<UpstreamResponse, ProxyError> {
        let url = target_url(self.base_url(resource)?, id)?;

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body.filter(|b| !b.is_empty()) {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.to_string()))?;

        tracing::debug!(%method, %url, status, bytes = body.len(), "upstream responded");
        Ok(UpstreamResponse { status, content_type, body })
    }
}

/// `{base}` for the collection, `{base}/{id}` for one record.
///
/// The id is appended as a single percent-encoded path segment, so `/`, `?`
/// and `#` inside it never leave the resource's base path.
///
/// # Errors
///
/// [`ProxyError::InvalidRecordId`] for empty, `.` or `..` ids;
/// [`ProxyError::Upstream`] if the configured base is not a usable URL.
pub fn target_url(base: &str, id: Option<&str>) -> Result<Url, ProxyError> {
    let mut url = Url::parse(base).map_err(|e| ProxyError::Upstream(format!("invalid upstream URL {base}: {e}")))?;
    let Some(id) = id else {
        return Ok(url);
    };
    if matches!(id, "" | "." | "..") {
        return Err(ProxyError::InvalidRecordId(id.to_owned()));
    }
    url.path_segments_mut()
        .map_err(|()| ProxyError::Upstream(format!("upstream URL cannot take a path: {base}")))?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
