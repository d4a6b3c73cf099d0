pub mod constants;

use serde::Deserialize;
use std::time::Duration;

use constants::{GEOLOCATION_BASE_URL, REMOTE_TIMEOUT_MS, VERSION_FEED_URL};

// * Endpoint and deadline settings for the two remote lookups.
// * Every field falls back to the constant default when missing from a config source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub version_feed_url: String,
    pub geolocation_base_url: String,
    pub timeout_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            version_feed_url: VERSION_FEED_URL.to_string(),
            geolocation_base_url: GEOLOCATION_BASE_URL.to_string(),
            timeout_ms: REMOTE_TIMEOUT_MS,
        }
    }
}

impl RemoteConfig {
    pub fn with_version_feed_url(mut self, url: impl Into<String>) -> Self {
        self.version_feed_url = url.into();
        self
    }

    pub fn with_geolocation_base_url(mut self, url: impl Into<String>) -> Self {
        self.geolocation_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_constants() {
        let config = RemoteConfig::default();
        assert_eq!(config.version_feed_url, VERSION_FEED_URL);
        assert_eq!(config.geolocation_base_url, GEOLOCATION_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{"timeout_ms": 250}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.version_feed_url, VERSION_FEED_URL);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RemoteConfig::default()
            .with_version_feed_url("http://127.0.0.1:1/releases")
            .with_geolocation_base_url("http://127.0.0.1:1/json/")
            .with_timeout(Duration::from_millis(100));
        assert_eq!(config.version_feed_url, "http://127.0.0.1:1/releases");
        assert_eq!(config.geolocation_base_url, "http://127.0.0.1:1/json/");
        assert_eq!(config.timeout_ms, 100);
    }

    #[test]
    fn test_oversized_timeout_saturates() {
        let config = RemoteConfig::default().with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, u64::MAX);
    }
}
