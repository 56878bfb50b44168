use std::time::Duration;

use crate::error::{DashmatchError, Result};

pub const DEFAULT_STORE_URL: &str = "http://localhost:9200";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read configuration from `DASHMATCH_STORE_URL` and
    /// `DASHMATCH_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("DASHMATCH_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let timeout = parse_timeout(std::env::var("DASHMATCH_TIMEOUT_SECS").ok().as_deref())?;
        Ok(Self { base_url, timeout })
    }
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    match raw {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(raw) => raw.parse().map(Duration::from_secs).map_err(|_| {
            DashmatchError::Config(format!(
                "DASHMATCH_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
            ))
        }),
    }
}
