//! Server configuration parsed from environment variables.

use std::collections::BTreeMap;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: String, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Upstream base URL per resource path, without a trailing slash.
    pub upstreams: BTreeMap<&'static str, String>,
    pub timeouts: UpstreamTimeouts,
}

impl AppConfig {
    /// Build typed server config from process environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MOCK_API_BASE_URL`: shared prefix; each resource maps to `{prefix}/{resource}`
    /// - `ADMIN_API_<RESOURCE>_URL`: per-resource base URL, overrides the prefix
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or a URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_number(&read, "PORT", DEFAULT_PORT)?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_number(&read, "UPSTREAM_REQUEST_TIMEOUT_SECS", DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_number(&read, "UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS)?,
        };

        let prefix = read("MOCK_API_BASE_URL").map(|v| normalize_url("MOCK_API_BASE_URL", &v)).transpose()?;
        let mut upstreams = BTreeMap::new();
        for resource in client::net::types::RESOURCES {
            let var = resource_env_var(resource);
            let url = match read(var.as_str()) {
                Some(raw) => Some(normalize_url(&var, &raw)?),
                None => prefix.as_ref().map(|p| format!("{p}/{resource}")),
            };
            if let Some(url) = url {
                upstreams.insert(*resource, url);
            }
        }

        Ok(Self { port, upstreams, timeouts })
    }
}

/// Environment variable naming the upstream for `resource`, e.g.
/// `contact-leads` -> `ADMIN_API_CONTACT_LEADS_URL`.
pub fn resource_env_var(resource: &str) -> String {
    format!("ADMIN_API_{}_URL", resource.replace('-', "_").to_ascii_uppercase())
}

fn parse_number<T, F>(read: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match read(var) {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var: var.to_owned(), value }),
    }
}

fn normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl { var: var.to_owned(), value: raw.to_owned() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
