use thiserror::Error;
pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Error, Debug)]
pub enum SourceError {
    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request to {url} failed with HTTP status {status}")]
    Status { status: u16, url: String },
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("No match found for '{0}'")]
    NotFound(String),
    #[error("Geocoder returned unusable coordinates: lat={lat:?}, lon={lon:?}")]
    InvalidCoordinates { lat: String, lon: String },
    #[error("Provider returned status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    ProviderStatus {
        status: String,
        message: Option<String>,
    },
}

impl SourceError {
    /// HTTP status code carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            #[cfg(feature = "fetch")]
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
