//! Where the user is.
//!
//! Position lookup is platform business (a browser prompt, a GPS daemon, a config
//! value). The finder only needs the answer, or the reason there is none.

use discfinder_sources::Coordinates;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

pub trait LocationSource {
    fn current_position(&self) -> Result<Coordinates, LocateError>;
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub Coordinates);

impl LocationSource for FixedLocation {
    fn current_position(&self) -> Result<Coordinates, LocateError> {
        Ok(self.0)
    }
}

/// Always refuses, as when a user declines the location prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

impl LocationSource for DeniedLocation {
    fn current_position(&self) -> Result<Coordinates, LocateError> {
        Err(LocateError::PermissionDenied(
            "location access was refused".to_string(),
        ))
    }
}

impl<F> LocationSource for F
where
    F: Fn() -> Result<Coordinates, LocateError>,
{
    fn current_position(&self) -> Result<Coordinates, LocateError> {
        self()
    }
}
