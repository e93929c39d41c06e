use ahash::AHashSet as HashSet;
use tracing::debug;

use crate::course::CourseItem;

/// Drop every course whose `(name, city)` was already seen, keeping the first.
///
/// One physical course often shows up as a node, a way and a relation. Matching is
/// exact, so spelling variants of the same course survive.
#[must_use]
pub fn dedupe(items: Vec<CourseItem>) -> Vec<CourseItem> {
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<CourseItem> = items
        .into_iter()
        .filter(|item| seen.insert((item.name.clone(), item.city.clone())))
        .collect();
    if kept.len() != before {
        debug!(dropped = before - kept.len(), kept = kept.len(), "Removed duplicate courses");
    }
    kept
}
