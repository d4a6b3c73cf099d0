use std::fmt;
use std::time::Duration;
use thiserror::Error;

// * Identifies which remote lookup produced an error or metric sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    VersionFeed,
    Geolocation,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::VersionFeed => "version_feed",
            Endpoint::Geolocation => "geolocation",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// * Unified Error type for the remote lookups.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} did not answer within {after:?}")]
    Timeout { endpoint: Endpoint, after: Duration },

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: Endpoint, status: u16 },

    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Release feed returned no releases")]
    NoReleases,

    #[error("Release feed entry has no milestone")]
    MissingMilestone,

    #[error("GeoLocation failed: {status}")]
    LookupFailed {
        status: String,
        message: Option<String>,
    },

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl NetworkError {
    // * Folds reqwest's own timeout into the timeout variant so callers see one shape.
    pub(crate) fn from_transport(endpoint: Endpoint, err: reqwest::Error, after: Duration) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout { endpoint, after }
        } else {
            NetworkError::Transport(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Timeout { .. })
    }

    // * Short label used for the outcome dimension of request metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::Transport(_) => "transport",
            NetworkError::Timeout { .. } => "timeout",
            NetworkError::HttpStatus { .. } => "status",
            NetworkError::MalformedBody(_) => "malformed",
            NetworkError::NoReleases | NetworkError::MissingMilestone => "malformed",
            NetworkError::LookupFailed { .. } => "rejected",
            NetworkError::InvalidEndpoint(_) => "config",
        }
    }
}
