use discfinder_sources::SourceError;
use thiserror::Error;

use crate::locate::LocateError;

#[derive(Error, Debug)]
pub enum FinderError {
    /// The request could not complete or the service answered with a failure.
    #[error("Network error: {0}")]
    Network(SourceError),
    /// A geocode returned no candidates, or none with a usable position.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The user or platform refused access to the current location.
    #[error("Location permission denied: {0}")]
    PermissionDenied(String),
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FinderError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<SourceError> for FinderError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(text) => Self::NotFound(text),
            // A match without a usable position is as good as no match.
            invalid @ SourceError::InvalidCoordinates { .. } => Self::NotFound(invalid.to_string()),
            other => Self::Network(other),
        }
    }
}

impl From<LocateError> for FinderError {
    fn from(err: LocateError) -> Self {
        match err {
            LocateError::PermissionDenied(reason) => Self::PermissionDenied(reason),
            LocateError::Unavailable(reason) => Self::LocationUnavailable(reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
