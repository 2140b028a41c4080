//! Resolver configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for resolution and the request-scoped cache
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// On a tier-1 miss, log every slug present in the live listing.
    /// Off by default: the diagnostic is invaluable when chasing slug
    /// drift but puts the full catalog's slugs into the logs.
    pub log_catalog_on_miss: bool,
    /// Retry a per-slug fetch with the normalized form when the raw
    /// slug misses
    pub normalized_retry: bool,
    /// Max entries in the request-scoped cache
    pub cache_capacity: u64,
    /// Optional cache entry TTL in seconds
    pub cache_ttl_secs: Option<u64>,
}

impl ResolverConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With the tier-1 miss catalog diagnostic enabled
    #[inline]
    #[must_use]
    pub fn with_catalog_diagnostic(mut self, enabled: bool) -> Self {
        self.log_catalog_on_miss = enabled;
        self
    }

    /// With or without the normalized-form retry
    #[inline]
    #[must_use]
    pub fn with_normalized_retry(mut self, enabled: bool) -> Self {
        self.normalized_retry = enabled;
        self
    }

    /// With a cache capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// With a cache TTL
    #[inline]
    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl_secs = Some(ttl.as_secs());
        self
    }

    /// Cache TTL as a duration, if configured
    #[inline]
    #[must_use]
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }

    /// Parse a configuration from TOML text.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on invalid TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read or
    /// [`ConfigError::Parse`] when it is not valid TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            log_catalog_on_miss: false,
            normalized_retry: true,
            cache_capacity: 16,
            cache_ttl_secs: None,
        }
    }
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
