//! The currently displayed course set.
//!
//! Searches can overlap: a user pans the map twice and the first response lands
//! after the second. Every search takes a [`Ticket`] from [`ResultSlot::begin`] and
//! only the most recent ticket may replace what is shown.

use std::{
    future::Future,
    sync::{
        RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    course::{CourseItem, SourceKind, seed::seed_courses},
    error::Result,
    search::{ComposeParams, compose},
};

/// The outcome of one remote search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FetchedCourses {
    pub courses: Vec<CourseItem>,
    pub source: SourceKind,
    pub fetched_at: DateTime<Utc>,
}

impl FetchedCourses {
    #[must_use]
    pub fn new(courses: Vec<CourseItem>, source: SourceKind) -> Self {
        Self {
            courses,
            source,
            fetched_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Generation number of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct ResultSlot {
    generation: AtomicU64,
    current: RwLock<Option<FetchedCourses>>,
}

impl ResultSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search. Any ticket handed out earlier is now stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Store `fetched` if `ticket` is still the latest. Returns whether it was stored.
    pub fn apply(&self, ticket: Ticket, fetched: FetchedCourses) -> bool {
        let mut current = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Checked under the write lock so a newer apply cannot interleave.
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                latest = self.generation.load(Ordering::Acquire),
                courses = fetched.len(),
                "Discarding stale search result"
            );
            return false;
        }
        *current = Some(fetched);
        true
    }

    /// Run `search` as the newest request and store its result if still current.
    ///
    /// Returns `Ok(false)` when a newer search started before this one finished,
    /// whether this one succeeded or failed. Only the latest search reports errors.
    pub async fn load<F>(&self, search: F) -> Result<bool>
    where
        F: Future<Output = Result<FetchedCourses>>,
    {
        let ticket = self.begin();
        match search.await {
            Ok(fetched) => Ok(self.apply(ticket, fetched)),
            Err(err) if !self.is_current(ticket) => {
                debug!(ticket = ticket.0, error = %err, "Discarding stale search error");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// The fetched set, or the seed list when nothing non-empty has been fetched.
    #[must_use]
    pub fn visible(&self) -> Vec<CourseItem> {
        let current = match self.current.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match current.as_ref() {
            Some(fetched) if !fetched.is_empty() => fetched.courses.clone(),
            _ => seed_courses().to_vec(),
        }
    }

    /// Where the visible set came from.
    #[must_use]
    pub fn source(&self) -> SourceKind {
        let current = match self.current.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match current.as_ref() {
            Some(fetched) if !fetched.is_empty() => fetched.source,
            _ => SourceKind::Curated,
        }
    }

    /// Drop the fetched set and invalidate searches in flight.
    pub fn clear(&self) {
        let mut current = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.generation.fetch_add(1, Ordering::AcqRel);
        *current = None;
    }

    /// Filter and sort the visible set.
    #[must_use]
    pub fn compose(&self, params: &ComposeParams) -> Vec<CourseItem> {
        compose(&self.visible(), params)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{course::normalize_all, error::FinderError, search::SortKey};

    fn fetched() -> FetchedCourses {
        let items = normalize_all(discfinder_sources::test_data::place_results());
        FetchedCourses::new(items, SourceKind::Places)
    }

    #[test]
    fn test_empty_slot_shows_seed() {
        let slot = ResultSlot::new();
        assert_eq!(slot.visible(), seed_courses().to_vec());
        assert_eq!(slot.source(), SourceKind::Curated);
    }

    #[test]
    fn test_latest_ticket_wins() {
        let slot = ResultSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert!(second > first);

        assert!(slot.apply(second, fetched()));
        assert!(!slot.apply(first, FetchedCourses::new(Vec::new(), SourceKind::OpenStreetMap)));

        assert_eq!(slot.source(), SourceKind::Places);
        assert_eq!(slot.visible().len(), 3);
    }

    #[test]
    fn test_late_response_is_discarded() {
        let slot = ResultSlot::new();
        let stale = slot.begin();
        let _fresh = slot.begin();

        assert!(!slot.apply(stale, fetched()));
        assert_eq!(slot.visible(), seed_courses().to_vec());
    }

    #[test]
    fn test_empty_fetch_falls_back_to_seed() {
        let slot = ResultSlot::new();
        let ticket = slot.begin();
        assert!(slot.apply(ticket, FetchedCourses::new(Vec::new(), SourceKind::OpenStreetMap)));
        assert_eq!(slot.visible().len(), seed_courses().len());
        assert_eq!(slot.source(), SourceKind::Curated);
    }

    #[test]
    fn test_clear_invalidates_in_flight() {
        let slot = ResultSlot::new();
        let ticket = slot.begin();
        assert!(slot.apply(ticket, fetched()));

        let in_flight = slot.begin();
        slot.clear();
        assert!(!slot.is_current(in_flight));
        assert!(!slot.apply(in_flight, fetched()));
        assert_eq!(slot.visible(), seed_courses().to_vec());
    }

    #[tokio::test]
    async fn test_superseded_load_error_is_swallowed() {
        let slot = ResultSlot::new();
        let slow_failure = async {
            tokio::task::yield_now().await;
            Err(FinderError::NotFound("old search".into()))
        };
        let fast_success = async { Ok(fetched()) };

        let (old, new) = tokio::join!(slot.load(slow_failure), slot.load(fast_success));

        assert!(matches!(old, Ok(false)), "stale search reported {old:?}");
        assert!(matches!(new, Ok(true)));
        assert_eq!(slot.source(), SourceKind::Places);
    }

    #[tokio::test]
    async fn test_current_load_error_is_reported() {
        let slot = ResultSlot::new();
        let result = slot
            .load(async { Err(FinderError::NotFound("Atlantis".into())) })
            .await;

        assert!(matches!(result, Err(FinderError::NotFound(_))));
        assert_eq!(slot.visible(), seed_courses().to_vec());
    }

    #[test]
    fn test_compose_over_visible() {
        let slot = ResultSlot::new();
        let names: Vec<String> = slot
            .compose(&ComposeParams::new().sort_by(SortKey::Name))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            [
                "Carrollton Park DGC",
                "Creve Coeur Lake Park DGC",
                "Jefferson Barracks DGC",
                "Logan University DGC",
                "Riverside DGC",
            ]
        );
    }
}
