use serde::Deserialize;

use crate::geo::Coordinates;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Envelope of a Places-style nearby or text search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl PlacesResponse {
    /// `OK` and `ZERO_RESULTS` are the only statuses that carry a usable answer.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK || self.status == STATUS_ZERO_RESULTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlaceGeometry {
    pub location: PlaceLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Short address, returned by nearby search.
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Full address, returned by text search.
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
}

impl PlaceResult {
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        self.geometry
            .map(|g| Coordinates::new(g.location.lat, g.location.lng))
            .filter(Coordinates::is_finite)
    }
}
