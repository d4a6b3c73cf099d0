// * Operations: logging setup and metrics for the remote lookups

pub mod telemetry;

// * Re-exports for convenient access
pub use telemetry::{
    get_metrics_string, init_tracing, init_tracing_pretty, init_tracing_with_level,
    record_remote_request, record_user_agent_fallback,
};
