//! Upstream data sources for discfinder.
//!
//! This crate owns everything that touches the outside world: the geometry used to
//! scope a query ([`BoundingBox`], [`SearchRadius`]), the raw record shapes returned
//! by each provider ([`RawRecord`]) and, behind the default `fetch` feature, the HTTP
//! clients that retrieve them.
//!
//! Nothing here interprets a record. Turning raw records into courses is the job of
//! the `discfinder` crate.

pub mod endpoints;
pub mod geo;
pub mod raw;
pub mod test_data;

#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod testing;

mod error;

pub use error::{Result, SourceError};
pub use geo::{
    BoundingBox, Coordinates, DEFAULT_RADIUS_KM, KM_PER_DEGREE, SearchRadius, bbox_around,
    clamp_provider_radius,
};
pub use raw::{
    Facet, GeocodeAddress, GeocodeCandidate, OsmCenter, OsmElement, OsmKind, PlaceGeometry,
    PlaceLocation, PlaceResult, RawRecord,
};

#[cfg(feature = "fetch")]
pub use fetch::{NominatimClient, OverpassClient, PlacesClient};
