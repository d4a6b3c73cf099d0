use crate::network::errors::NetworkError;
use thiserror::Error;

// * Error type for header generation.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid value for header {name}")]
    InvalidHeader { name: &'static str },
}

// * Returned when a string is not one of an enum's wire tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub value: String,
}
