use serde::Deserialize;

use crate::geo::Coordinates;

/// Structured address returned with `addressdetails=1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeocodeAddress {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl GeocodeAddress {
    /// First of city, town, village.
    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        [&self.city, &self.town, &self.village]
            .into_iter()
            .find_map(|v| v.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// One candidate from a Nominatim search. Coordinates arrive as strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub place_id: Option<u64>,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
}

impl GeocodeCandidate {
    /// Parsed coordinates, `None` unless both strings are finite numbers.
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lon = self.lon.trim().parse::<f64>().ok()?;
        Some(Coordinates::new(lat, lon)).filter(Coordinates::is_finite)
    }
}
