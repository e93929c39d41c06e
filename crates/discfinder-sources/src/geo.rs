//! Flat-earth geometry for scoping region queries.
//!
//! One degree of latitude *and* longitude is taken to be [`KM_PER_DEGREE`] kilometres.
//! No cosine correction is applied to longitude, so boxes get narrower in real terms
//! the further they sit from the equator. At the city/metro scale these queries target
//! that error is tolerable; near the poles it is not, and callers should not rely on
//! these boxes there.

use std::fmt;

/// Kilometres per degree used by every conversion in this module.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Default radius for region queries, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Smallest radius a Places-style provider accepts, in metres.
pub const MIN_PROVIDER_RADIUS_M: f64 = 500.0;
/// Largest radius a Places-style provider accepts, in metres.
pub const MAX_PROVIDER_RADIUS_M: f64 = 50_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both components are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Radius of a search around a point.
///
/// Region queries are sized in kilometres. Places-style providers take metres and
/// refuse anything outside `[500, 50_000]`, so [`SearchRadius::Meters`] is clamped
/// to that window before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchRadius {
    Kilometers(f64),
    Meters(f64),
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::Kilometers(DEFAULT_RADIUS_KM)
    }
}

impl SearchRadius {
    /// Effective radius in kilometres, after clamping a metre radius.
    #[must_use]
    pub fn km(self) -> f64 {
        match self {
            Self::Kilometers(km) => km,
            Self::Meters(_) => self.meters() / 1000.0,
        }
    }

    /// Effective radius in metres. A [`SearchRadius::Meters`] value is clamped to the
    /// provider window; a kilometre value is converted as-is.
    #[must_use]
    pub fn meters(self) -> f64 {
        match self {
            Self::Kilometers(km) => km * 1000.0,
            Self::Meters(m) => clamp_provider_radius(m),
        }
    }
}

/// Clamp a radius in metres to what Places-style providers accept.
///
/// Non-finite input falls back to the maximum.
#[must_use]
pub fn clamp_provider_radius(meters: f64) -> f64 {
    if meters.is_nan() {
        return MAX_PROVIDER_RADIUS_M;
    }
    meters.clamp(MIN_PROVIDER_RADIUS_M, MAX_PROVIDER_RADIUS_M)
}

/// A south/west/north/east rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Square box centred on `center`, extending `radius` in each cardinal direction.
    #[must_use]
    pub fn around(center: Coordinates, radius: SearchRadius) -> Self {
        let delta = radius.km() / KM_PER_DEGREE;
        Self {
            south: center.lat - delta,
            west: center.lon - delta,
            north: center.lat + delta,
            east: center.lon + delta,
        }
    }

    #[must_use]
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Distance from the centre to a corner, in metres, using the same flat-earth scale.
    #[must_use]
    pub fn half_diagonal_meters(&self) -> f64 {
        let half_lat_km = (self.north - self.south).abs() / 2.0 * KM_PER_DEGREE;
        let half_lon_km = (self.east - self.west).abs() / 2.0 * KM_PER_DEGREE;
        half_lat_km.hypot(half_lon_km) * 1000.0
    }

    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat)
            && (self.west..=self.east).contains(&point.lon)
    }

    /// Overpass QL bounding-box filter, `(s,w,n,e)`.
    #[must_use]
    pub fn overpass_filter(&self) -> String {
        format!(
            "({},{},{},{})",
            self.south, self.west, self.north, self.east
        )
    }
}

/// Box around `(lat, lon)` with a radius in kilometres.
#[must_use]
pub fn bbox_around(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    BoundingBox::around(
        Coordinates::new(lat, lon),
        SearchRadius::Kilometers(radius_km),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_bbox_around_st_louis() {
        let bbox = bbox_around(38.627, -90.199, 50.0);
        assert!(approx(bbox.south, 38.177), "south was {}", bbox.south);
        assert!(approx(bbox.north, 39.077), "north was {}", bbox.north);
        assert!(approx(bbox.west, -90.649), "west was {}", bbox.west);
        assert!(approx(bbox.east, -89.749), "east was {}", bbox.east);
    }

    #[test]
    fn test_default_radius_is_fifty_km() {
        assert_eq!(SearchRadius::default(), SearchRadius::Kilometers(50.0));
        let a = BoundingBox::around(Coordinates::new(10.0, 10.0), SearchRadius::default());
        let b = bbox_around(10.0, 10.0, 50.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_meter_radius_is_clamped() {
        assert_eq!(SearchRadius::Meters(10.0).meters(), 500.0);
        assert_eq!(SearchRadius::Meters(120_000.0).meters(), 50_000.0);
        assert_eq!(SearchRadius::Meters(2_500.0).meters(), 2_500.0);
        assert_eq!(SearchRadius::Meters(f64::NAN).meters(), 50_000.0);
        assert!(approx(SearchRadius::Meters(120_000.0).km(), 50.0));
    }

    #[test]
    fn test_kilometer_radius_is_not_clamped() {
        assert_eq!(SearchRadius::Kilometers(80.0).meters(), 80_000.0);
    }

    #[test]
    fn test_center_and_half_diagonal() {
        let bbox = bbox_around(38.627, -90.199, 10.0);
        let center = bbox.center();
        assert!(approx(center.lat, 38.627));
        assert!(approx(center.lon, -90.199));
        // 10 km each way on both axes
        assert!((bbox.half_diagonal_meters() - 10_000.0 * 2f64.sqrt()).abs() < 1.0);
        assert!(bbox.contains(center));
        assert!(!bbox.contains(Coordinates::new(0.0, 0.0)));
    }

    #[test]
    fn test_overpass_filter_order() {
        let bbox = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bbox.overpass_filter(), "(1,2,3,4)");
    }
}
