//! Remote course searches.
//!
//! [`CourseFinder`] turns a point, a place name or a map viewport into a deduplicated
//! list of [`CourseItem`]s from the configured provider.
//!
//! ```no_run
//! use discfinder::{CourseFinder, FinderConfig, sources::Coordinates};
//!
//! # async fn run() -> Result<(), discfinder::error::FinderError> {
//! let finder = CourseFinder::new(FinderConfig::default())?;
//! let fetched = finder
//!     .near_with_fallback(Coordinates::new(38.627, -90.199))
//!     .await?;
//! println!("{} courses from {}", fetched.len(), fetched.source);
//! # Ok(())
//! # }
//! ```

use discfinder_sources::{
    BoundingBox, Coordinates, NominatimClient, OverpassClient, PlacesClient, SearchRadius,
    fetch::http_client,
};
use tracing::{info, instrument, warn};

use crate::{
    config::{FinderConfig, MAX_RADIUS_KM, MIN_RADIUS_KM, Provider},
    course::{CourseItem, SourceKind, normalize_all},
    error::{FinderError, Result},
    locate::LocationSource,
    search::dedupe,
    state::FetchedCourses,
};

#[derive(Debug, Clone)]
enum Backend {
    Overpass(OverpassClient),
    Places(PlacesClient),
}

/// Entry point for remote course searches.
///
/// Every search issues its requests once; only [`CourseFinder::near_with_fallback`]
/// retries, and only once.
#[derive(Debug, Clone)]
pub struct CourseFinder {
    config: FinderConfig,
    backend: Backend,
    geocoder: NominatimClient,
}

impl CourseFinder {
    /// Build the HTTP clients for `config`.
    #[instrument(name = "Create CourseFinder", skip_all, fields(provider = ?config.provider), level = "info")]
    pub fn new(config: FinderConfig) -> Result<Self> {
        config.validate()?;
        let client = http_client(&config.user_agent)?;

        let backend = match &config.provider {
            Provider::Overpass => {
                Backend::Overpass(OverpassClient::new(client.clone(), &config.overpass_url)?)
            }
            Provider::Places { api_key } => Backend::Places(PlacesClient::new(
                client.clone(),
                &config.places_url,
                api_key.as_str(),
            )?),
        };
        let geocoder = NominatimClient::new(client, &config.nominatim_url)?;

        info!("CourseFinder ready");
        Ok(Self {
            config,
            backend,
            geocoder,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Where results of this finder come from.
    #[must_use]
    pub fn source(&self) -> SourceKind {
        match self.backend {
            Backend::Overpass(_) => SourceKind::OpenStreetMap,
            Backend::Places(_) => SourceKind::Places,
        }
    }

    /// Courses within the configured radius of `center`.
    #[instrument(name = "Courses near point", skip(self), level = "info")]
    pub async fn near(&self, center: Coordinates) -> Result<FetchedCourses> {
        self.near_within(center, self.config.radius_km).await
    }

    /// Courses within `radius_km` of `center`.
    ///
    /// The radius must be finite and positive; it is clamped to the same window as
    /// [`FinderConfigBuilder::radius_km`](crate::FinderConfigBuilder::radius_km).
    #[instrument(name = "Courses within radius", skip(self), level = "info")]
    pub async fn near_within(&self, center: Coordinates, radius_km: f64) -> Result<FetchedCourses> {
        let radius = search_radius(radius_km)?;
        if !center.is_finite() {
            return Err(FinderError::InvalidParameter(format!(
                "center {center} is not a valid position"
            )));
        }

        let courses = match &self.backend {
            Backend::Overpass(client) => {
                let bbox = BoundingBox::around(center, radius);
                normalize_all(client.query_region(&bbox, &self.config.facet).await?)
            }
            Backend::Places(client) => normalize_all(
                client
                    .nearby(center, radius, &self.config.places_keyword)
                    .await?,
            ),
        };
        Ok(self.finish(courses))
    }

    /// Like [`CourseFinder::near`], but a failure triggers one more search around
    /// the configured fallback centre.
    ///
    /// If that also fails the original error is returned.
    #[instrument(name = "Courses near point with fallback", skip(self), level = "info")]
    pub async fn near_with_fallback(&self, center: Coordinates) -> Result<FetchedCourses> {
        match self.near(center).await {
            Ok(fetched) => Ok(fetched),
            Err(err) => {
                let fallback = self.config.fallback_center;
                warn!(error = %err, %fallback, "Search failed, retrying at fallback center");
                self.near(fallback).await.map_err(|retry_err| {
                    warn!(error = %retry_err, "Fallback search failed");
                    err
                })
            }
        }
    }

    /// Courses around wherever `location` says the user is.
    #[instrument(name = "Courses near user", skip_all, level = "info")]
    pub async fn near_location(&self, location: &dyn LocationSource) -> Result<FetchedCourses> {
        let position = location.current_position()?;
        self.near_with_fallback(position).await
    }

    /// Courses within the configured radius of a named place.
    ///
    /// The name is geocoded to its single best match; an unknown name is
    /// [`FinderError::NotFound`].
    #[instrument(name = "Courses near place", skip(self), level = "info")]
    pub async fn place(&self, name: &str) -> Result<FetchedCourses> {
        let center = self.geocoder.geocode(name).await?;
        info!(%center, "Place resolved");
        self.near(center).await
    }

    /// Courses inside the visible map area.
    #[instrument(name = "Courses in viewport", skip(self), level = "info")]
    pub async fn viewport(&self, bounds: &BoundingBox) -> Result<FetchedCourses> {
        let courses = match &self.backend {
            Backend::Overpass(client) => {
                normalize_all(client.query_region(bounds, &self.config.facet).await?)
            }
            Backend::Places(client) => normalize_all(
                client
                    .viewport(bounds, &self.config.places_keyword)
                    .await?,
            ),
        };
        Ok(self.finish(courses))
    }

    fn finish(&self, courses: Vec<CourseItem>) -> FetchedCourses {
        let courses = dedupe(courses);
        info!(courses = courses.len(), source = %self.source(), "Search complete");
        FetchedCourses::new(courses, self.source())
    }
}

fn search_radius(radius_km: f64) -> Result<SearchRadius> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(FinderError::InvalidParameter(format!(
            "radius {radius_km} km must be a positive number"
        )));
    }
    Ok(SearchRadius::Kilometers(
        radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinderConfigBuilder;

    #[test]
    fn test_source_follows_provider() {
        let osm = CourseFinder::new(FinderConfigBuilder::overpass().build()).unwrap();
        assert_eq!(osm.source(), SourceKind::OpenStreetMap);

        let places = CourseFinder::new(FinderConfigBuilder::places("k").build()).unwrap();
        assert_eq!(places.source(), SourceKind::Places);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = FinderConfigBuilder::new().nominatim_url("::").build();
        assert!(matches!(
            CourseFinder::new(config),
            Err(FinderError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_non_finite_center() {
        let finder = CourseFinder::new(FinderConfig::default()).unwrap();
        let err = finder
            .near(Coordinates::new(f64::NAN, 0.0))
            .await
            .unwrap_err();
        assert!(matches!(err, FinderError::InvalidParameter(_)));
    }

    #[test]
    fn test_search_radius() {
        assert_eq!(search_radius(25.0).unwrap(), SearchRadius::Kilometers(25.0));
        assert_eq!(search_radius(0.2).unwrap(), SearchRadius::Kilometers(1.0));
        assert_eq!(search_radius(9_000.0).unwrap(), SearchRadius::Kilometers(500.0));
        for bad in [0.0, -50.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(search_radius(bad), Err(FinderError::InvalidParameter(_))),
                "{bad} should be rejected"
            );
        }
    }
}
