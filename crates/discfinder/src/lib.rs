//! Discfinder - Disc Golf Course Discovery
//!
//! Discfinder finds disc golf courses near a point, a named place or a map viewport.
//! Results from OpenStreetMap (via Overpass), a Google Places-style service, or a
//! Nominatim geocode are normalized into one [`CourseItem`] shape, deduplicated, and
//! then filtered and sorted locally.
//!
//! # Quick Start
//!
//! Filtering and sorting work without a network connection, over the built-in
//! curated list:
//!
//! ```rust
//! use discfinder::{ComposeParams, Difficulty, DifficultyFilter, ResultSlot, SortKey};
//!
//! let slot = ResultSlot::new();
//! let params = ComposeParams::new()
//!     .difficulty(DifficultyFilter::Only(Difficulty::Beginner))
//!     .sort_by(SortKey::Name);
//!
//! for course in slot.compose(&params) {
//!     println!("{course}");
//! }
//! ```
//!
//! Remote searches go through [`CourseFinder`] (the `fetch` feature, on by default):
//!
//! ```no_run
//! use discfinder::{CourseFinder, FinderConfig, ResultSlot};
//!
//! # async fn run() -> Result<(), discfinder::error::FinderError> {
//! let finder = CourseFinder::new(FinderConfig::from_env())?;
//! let slot = ResultSlot::new();
//!
//! slot.load(finder.place("Springfield, MO")).await?;
//! println!("{} courses visible", slot.visible().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Three providers**: Overpass region queries, Places nearby search, Nominatim geocoding
//! - **One record shape**: every upstream record becomes a [`CourseItem`] with defaults filled in
//! - **Deduplication**: first occurrence of each `(name, city)` wins
//! - **Latest search wins**: [`ResultSlot`] discards responses that arrive after a newer search
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
#[cfg(feature = "fetch")]
mod core;
mod course;
pub mod error;
mod locate;
mod search;
mod state;

#[cfg(feature = "fetch")]
pub use core::CourseFinder;

pub use config::{
    DEFAULT_FALLBACK_CENTER, DEFAULT_PLACES_KEYWORD, FinderConfig, FinderConfigBuilder, Provider,
};
pub use course::{
    CourseItem, DEFAULT_DIFFICULTY, DEFAULT_HOLES, DEFAULT_NAME, DEFAULT_RATING, Difficulty,
    ParseDifficultyError, SourceKind, UNKNOWN_CITY, map_url, normalize, normalize_all,
    normalize_geocode, normalize_osm, normalize_place, parse_holes, seed::seed_courses,
};
pub use discfinder_sources as sources;
pub use locate::{DeniedLocation, FixedLocation, LocateError, LocationSource};
pub use search::{ComposeParams, DifficultyFilter, SortKey, compose, dedupe};
pub use state::{FetchedCourses, ResultSlot, Ticket};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Discfinder library.
///
/// `RUST_LOG` wins over `level` when set. Safe to call more than once; only the
/// first call installs a subscriber.
///
/// # Examples
///
/// ```rust
/// use discfinder::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), discfinder::error::FinderError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::FinderError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("hyper_util=warn".parse()?)
            .add_directive("reqwest=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| error::FinderError::Other(anyhow::anyhow!(e)))?;
        Ok(())
    })
}
