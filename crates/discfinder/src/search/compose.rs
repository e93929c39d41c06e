use std::{cmp::Ordering, fmt, str::FromStr};

use itertools::Itertools;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
    course::{CourseItem, Difficulty},
    error::FinderError,
};

/// Difficulty selector. `All` disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    #[must_use]
    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => d == difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Difficulty>()
            .map(Self::Only)
            .map_err(|e| FinderError::InvalidParameter(e.to_string()))
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest rated first.
    #[default]
    Rating,
    /// Alphabetical, ignoring case and accents (`"Éagle"` sorts with `"eagle"`).
    /// Letters compare by code point after folding; there is no locale tailoring.
    Name,
}

impl FromStr for SortKey {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            other => Err(FinderError::InvalidParameter(format!(
                "unknown sort key '{other}'"
            ))),
        }
    }
}

/// Everything the user has chosen in the finder, owned by the caller and passed in
/// whole to [`compose`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposeParams {
    /// Case-insensitive substring matched against `"{name} {city}"`.
    pub query: String,
    pub difficulty: DifficultyFilter,
    pub only_top_picks: bool,
    pub sort_by: SortKey,
}

impl ComposeParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn difficulty(mut self, difficulty: DifficultyFilter) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn only_top_picks(mut self, only: bool) -> Self {
        self.only_top_picks = only;
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }
}

/// Filter `source` by `params`, then sort it.
///
/// Both sorts are stable: equal ratings keep their input order.
#[must_use]
pub fn compose(source: &[CourseItem], params: &ComposeParams) -> Vec<CourseItem> {
    let needle = params.query.trim().to_lowercase();
    source
        .iter()
        .filter(|c| needle.is_empty() || haystack(c).contains(&needle))
        .filter(|c| params.difficulty.matches(c.difficulty))
        .filter(|c| !params.only_top_picks || c.top_pick)
        .cloned()
        .sorted_by(|a, b| compare(a, b, params.sort_by))
        .collect()
}

fn haystack(course: &CourseItem) -> String {
    format!("{} {}", course.name, course.city).to_lowercase()
}

fn compare(a: &CourseItem, b: &CourseItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Name => name_key(&a.name)
            .cmp(&name_key(&b.name))
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Compatibility-decompose, drop combining marks, lowercase.
fn name_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
