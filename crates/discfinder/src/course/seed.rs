//! Built-in curated courses, shown whenever no fetched result set is available.

use discfinder_sources::Coordinates;
use once_cell::sync::Lazy;

use super::{CourseItem, Difficulty, map_url};

struct SeedCourse {
    id: &'static str,
    name: &'static str,
    city: &'static str,
    difficulty: Difficulty,
    rating: f64,
    holes: u32,
    description: &'static str,
    top_pick: bool,
    lat: f64,
    lon: f64,
}

const SEED_COURSES: [SeedCourse; 5] = [
    SeedCourse {
        id: "seed-riverside",
        name: "Riverside DGC",
        city: "Washington, MO",
        difficulty: Difficulty::Beginner,
        rating: 4.4,
        holes: 18,
        description: "Flat, open riverfront layout. A good first round.",
        top_pick: true,
        lat: 38.5573,
        lon: -90.9969,
    },
    SeedCourse {
        id: "seed-jefferson-barracks",
        name: "Jefferson Barracks DGC",
        city: "St. Louis, MO",
        difficulty: Difficulty::Advanced,
        rating: 4.7,
        holes: 27,
        description: "Long wooded holes with real elevation.",
        top_pick: false,
        lat: 38.5125,
        lon: -90.2790,
    },
    SeedCourse {
        id: "seed-creve-coeur",
        name: "Creve Coeur Lake Park DGC",
        city: "Maryland Heights, MO",
        difficulty: Difficulty::Intermediate,
        rating: 4.6,
        holes: 18,
        description: "Lakeside course mixing open fairways and tight woods.",
        top_pick: true,
        lat: 38.7163,
        lon: -90.4887,
    },
    SeedCourse {
        id: "seed-carrollton",
        name: "Carrollton Park DGC",
        city: "Bridgeton, MO",
        difficulty: Difficulty::Beginner,
        rating: 4.2,
        holes: 9,
        description: "Short neighbourhood nine.",
        top_pick: false,
        lat: 38.7428,
        lon: -90.3784,
    },
    SeedCourse {
        id: "seed-logan",
        name: "Logan University DGC",
        city: "Chesterfield, MO",
        difficulty: Difficulty::Intermediate,
        rating: 4.5,
        holes: 18,
        description: "Campus course with rolling hills.",
        top_pick: false,
        lat: 38.6459,
        lon: -90.5313,
    },
];

static SEED: Lazy<Vec<CourseItem>> = Lazy::new(|| {
    SEED_COURSES
        .iter()
        .map(|c| CourseItem {
            id: c.id.to_string(),
            name: c.name.to_string(),
            city: c.city.to_string(),
            difficulty: c.difficulty,
            rating: c.rating,
            holes: c.holes,
            description: c.description.to_string(),
            top_pick: c.top_pick,
            map_url: map_url(c.name, c.city, Some(Coordinates::new(c.lat, c.lon))),
            lat: Some(c.lat),
            lon: Some(c.lon),
        })
        .collect()
});

/// The curated list, built on first use.
#[must_use]
pub fn seed_courses() -> &'static [CourseItem] {
    &SEED
}
