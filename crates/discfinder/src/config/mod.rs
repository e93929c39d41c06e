use std::fmt;

use discfinder_sources::{
    Coordinates, DEFAULT_RADIUS_KM, Facet,
    endpoints::{DEFAULT_NOMINATIM_URL, DEFAULT_OVERPASS_URL, DEFAULT_PLACES_URL, DEFAULT_USER_AGENT},
};
use url::Url;

use crate::error::FinderError;

/// Where course searches go.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Provider {
    /// OpenStreetMap via Overpass region queries.
    #[default]
    Overpass,
    /// A Google Places-style nearby/text search service.
    Places { api_key: String },
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overpass => f.write_str("Overpass"),
            Self::Places { .. } => f.write_str("Places { api_key: <redacted> }"),
        }
    }
}

/// Centre used when a location-based search fails: downtown St. Louis.
pub const DEFAULT_FALLBACK_CENTER: Coordinates = Coordinates::new(38.627, -90.199);
pub const DEFAULT_PLACES_KEYWORD: &str = "disc golf";
pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 500.0;

pub const ENV_OVERPASS_URL: &str = "DISCFINDER_OVERPASS_URL";
pub const ENV_NOMINATIM_URL: &str = "DISCFINDER_NOMINATIM_URL";
pub const ENV_PLACES_URL: &str = "DISCFINDER_PLACES_URL";
pub const ENV_USER_AGENT: &str = "DISCFINDER_USER_AGENT";
pub const ENV_PLACES_API_KEY: &str = "GOOGLE_PLACES_API_KEY";

/// Everything a [`CourseFinder`](crate::CourseFinder) needs to talk to its providers.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub provider: Provider,
    pub overpass_url: String,
    pub nominatim_url: String,
    pub places_url: String,
    pub user_agent: String,
    /// Tag predicate for Overpass region queries.
    pub facet: Facet,
    /// Keyword for Places nearby searches.
    pub places_keyword: String,
    /// Radius used by searches that do not name one.
    pub radius_km: f64,
    pub fallback_center: Coordinates,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            places_url: DEFAULT_PLACES_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            facet: Facet::default(),
            places_keyword: DEFAULT_PLACES_KEYWORD.to_string(),
            radius_km: DEFAULT_RADIUS_KM,
            fallback_center: DEFAULT_FALLBACK_CENTER,
        }
    }
}

impl FinderConfig {
    #[must_use]
    pub fn builder() -> FinderConfigBuilder {
        FinderConfigBuilder::new()
    }

    /// Defaults overridden by environment variables.
    ///
    /// Setting `GOOGLE_PLACES_API_KEY` switches the provider to Places.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = FinderConfigBuilder::new();
        if let Some(url) = get(ENV_OVERPASS_URL) {
            builder = builder.overpass_url(url);
        }
        if let Some(url) = get(ENV_NOMINATIM_URL) {
            builder = builder.nominatim_url(url);
        }
        if let Some(url) = get(ENV_PLACES_URL) {
            builder = builder.places_url(url);
        }
        if let Some(agent) = get(ENV_USER_AGENT) {
            builder = builder.user_agent(agent);
        }
        if let Some(key) = get(ENV_PLACES_API_KEY) {
            builder = builder.provider(Provider::Places { api_key: key });
        }
        builder.build()
    }

    /// Check endpoints parse and the selected provider has what it needs.
    pub fn validate(&self) -> Result<(), FinderError> {
        for (name, value) in [
            ("overpass_url", &self.overpass_url),
            ("nominatim_url", &self.nominatim_url),
            ("places_url", &self.places_url),
        ] {
            Url::parse(value).map_err(|e| {
                FinderError::ConfigError(format!("{name} '{value}' is not a valid URL: {e}"))
            })?;
        }
        if let Provider::Places { api_key } = &self.provider {
            if api_key.trim().is_empty() {
                return Err(FinderError::ConfigError(
                    "Places provider requires an API key".to_string(),
                ));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err(FinderError::ConfigError(
                "user agent must not be empty".to_string(),
            ));
        }
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.radius_km) {
            return Err(FinderError::ConfigError(format!(
                "radius {} km is outside {MIN_RADIUS_KM}..={MAX_RADIUS_KM}",
                self.radius_km
            )));
        }
        if !self.fallback_center.is_finite() {
            return Err(FinderError::ConfigError(format!(
                "fallback center {} is not a valid position",
                self.fallback_center
            )));
        }
        Ok(())
    }
}

/// Builder for creating finder configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct FinderConfigBuilder {
    config: FinderConfig,
}

impl FinderConfigBuilder {
    /// Create a new builder with sensible defaults
    pub fn new() -> Self {
        Self {
            config: FinderConfig::default(),
        }
    }

    /// OpenStreetMap region queries on `sport=disc_golf`.
    pub fn overpass() -> Self {
        Self::new().provider(Provider::Overpass).facet(Facet::sport())
    }

    /// Places nearby searches with the given API key.
    pub fn places(api_key: impl Into<String>) -> Self {
        Self::new().provider(Provider::Places {
            api_key: api_key.into(),
        })
    }

    /// Small radius for dense metro areas.
    pub fn local() -> Self {
        Self::new().radius_km(15.0)
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.config.provider = provider;
        self
    }

    pub fn facet(mut self, facet: Facet) -> Self {
        self.config.facet = facet;
        self
    }

    /// Default search radius in kilometres, clamped to `[1, 500]`. Non-finite input
    /// is ignored.
    pub fn radius_km(mut self, km: f64) -> Self {
        if km.is_finite() {
            self.config.radius_km = km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
        }
        self
    }

    pub fn fallback_center(mut self, center: Coordinates) -> Self {
        self.config.fallback_center = center;
        self
    }

    pub fn overpass_url(mut self, url: impl Into<String>) -> Self {
        self.config.overpass_url = url.into();
        self
    }

    pub fn nominatim_url(mut self, url: impl Into<String>) -> Self {
        self.config.nominatim_url = url.into();
        self
    }

    pub fn places_url(mut self, url: impl Into<String>) -> Self {
        self.config.places_url = url.into();
        self
    }

    pub fn places_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.places_keyword = keyword.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> FinderConfig {
        self.config
    }
}
