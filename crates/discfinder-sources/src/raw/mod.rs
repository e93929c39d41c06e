//! Raw record shapes, exactly as each upstream provider returns them.
//!
//! Every field a provider might omit is optional here. Interpreting these records
//! (choosing defaults, building links) happens downstream.

mod geocode;
mod osm;
mod places;

pub use geocode::{GeocodeAddress, GeocodeCandidate};
pub use osm::{Facet, OsmCenter, OsmElement, OsmKind, OverpassResponse};
pub use places::{PlaceGeometry, PlaceLocation, PlaceResult, PlacesResponse};

/// One raw record from any supported provider.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    /// Tagged element from an Overpass region query.
    Osm(OsmElement),
    /// Result from a Places-style nearby or text search.
    Place(PlaceResult),
    /// Candidate from a Nominatim place-name search.
    Geocode(GeocodeCandidate),
}

impl From<OsmElement> for RawRecord {
    fn from(value: OsmElement) -> Self {
        Self::Osm(value)
    }
}

impl From<PlaceResult> for RawRecord {
    fn from(value: PlaceResult) -> Self {
        Self::Place(value)
    }
}

impl From<GeocodeCandidate> for RawRecord {
    fn from(value: GeocodeCandidate) -> Self {
        Self::Geocode(value)
    }
}
