// * Telemetry - JSON Logging and Prometheus Metrics
// * Structured logging setup plus counters for the remote lookups

use crate::network::errors::Endpoint;
use lazy_static::lazy_static;
use prometheus::{
    register_counter, register_counter_vec, register_histogram_vec, Counter, CounterVec,
    Encoder, HistogramVec, TextEncoder,
};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

lazy_static! {
    // * Remote lookups by endpoint and outcome
    pub static ref REMOTE_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "forge_remote_requests_total",
        "Total remote lookups by endpoint and outcome",
        &["endpoint", "outcome"]
    ).unwrap();

    // * Remote lookup duration, deadline included
    pub static ref REMOTE_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "forge_remote_request_duration_seconds",
        "Remote lookup duration in seconds",
        &["endpoint"],
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    ).unwrap();

    // * User-agent generations served from the static table instead of the release feed
    pub static ref USER_AGENT_FALLBACKS_TOTAL: Counter = register_counter!(
        "forge_user_agent_fallbacks_total",
        "User-agent generations that fell back to the static table"
    ).unwrap();
}

/// Initializes the tracing subscriber with JSON formatting
///
/// Fails instead of panicking when the host application already installed a subscriber.
///
/// # Example
/// ```ignore
/// use header_forge::ops::telemetry;
///
/// telemetry::init_tracing()?;
/// tracing::info!(ip = "8.8.8.8", "Resolving geo headers");
/// ```
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with_level("info")
}

/// Initializes JSON tracing with a fallback filter used when `RUST_LOG` is unset
pub fn init_tracing_with_level(level: &str) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .try_init()
}

/// Initializes human-readable tracing (for development)
pub fn init_tracing_pretty() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .try_init()
}

/// Returns the current metrics in the Prometheus text format
pub fn get_metrics_string() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Records one finished remote lookup
pub fn record_remote_request(endpoint: Endpoint, outcome: &str, seconds: f64) {
    REMOTE_REQUESTS_TOTAL
        .with_label_values(&[endpoint.as_str(), outcome])
        .inc();
    REMOTE_REQUEST_DURATION_SECONDS
        .with_label_values(&[endpoint.as_str()])
        .observe(seconds);
}

/// Records a user-agent generation that used the static table
pub fn record_user_agent_fallback() {
    USER_AGENT_FALLBACKS_TOTAL.inc();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_remote_request() {
        let before = REMOTE_REQUESTS_TOTAL
            .with_label_values(&["geolocation", "timeout"])
            .get();
        record_remote_request(Endpoint::Geolocation, "timeout", 5.0);
        let after = REMOTE_REQUESTS_TOTAL
            .with_label_values(&["geolocation", "timeout"])
            .get();
        assert!(after >= before + 1.0);
    }

    #[test]
    fn test_record_fallback() {
        let before = USER_AGENT_FALLBACKS_TOTAL.get();
        record_user_agent_fallback();
        assert!(USER_AGENT_FALLBACKS_TOTAL.get() >= before + 1.0);
    }

    #[test]
    fn test_second_init_is_an_error() {
        // * Whichever call wins the global slot, the other must not panic
        let first = init_tracing_with_level("warn");
        let second = init_tracing_pretty();
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_get_metrics_string() {
        record_remote_request(Endpoint::VersionFeed, "success", 0.2);
        let metrics = get_metrics_string();
        assert!(metrics.contains("forge_remote_requests_total"));
    }
}
