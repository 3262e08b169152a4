//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single upstream client so every proxied request shares one
//! connection pool.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ProxyError;
use crate::upstream::UpstreamClient;

/// Clone is required by Axum; the client is `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ProxyError> {
        Ok(Self { upstream: Arc::new(UpstreamClient::new(config)?) })
    }
}
