//! Searching for courses over the network
//!
//! Reads endpoints and an optional Places API key from the environment (see
//! `FinderConfig::from_env`), then runs a point search with fallback, a place-name
//! search and a viewport search.
//!
//! ```text
//! cargo run --example nearby_search -- "Kansas City, MO"
//! ```

use discfinder::{
    ComposeParams, CourseFinder, FetchedCourses, FinderConfig, ResultSlot, SortKey,
    sources::{BoundingBox, Coordinates},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    discfinder::init_logging(tracing::Level::INFO)?;

    let mut config = FinderConfig::from_env();
    config.radius_km = 30.0;
    println!("Provider: {:?}", config.provider);
    let finder = CourseFinder::new(config)?;

    let downtown = Coordinates::new(38.627, -90.199);
    let fetched = finder.near_with_fallback(downtown).await?;
    report("Within 30 km of downtown St. Louis", &fetched);

    let fetched = finder.near_within(downtown, 10.0).await?;
    report("Within 10 km of downtown St. Louis", &fetched);

    let place = std::env::args().nth(1).unwrap_or_else(|| "Springfield, MO".to_string());
    match finder.place(&place).await {
        Ok(fetched) => report(&format!("Near {place}"), &fetched),
        Err(e) if e.is_not_found() => println!("No place called '{place}'\n"),
        Err(e) => return Err(e.into()),
    }

    // The slot keeps the latest result and falls back to the curated list when empty.
    let slot = ResultSlot::new();
    let viewport = BoundingBox::new(38.45, -90.75, 38.85, -90.15);
    slot.load(finder.viewport(&viewport)).await?;
    println!("Viewport ({}):", slot.source());
    for course in slot.compose(&ComposeParams::new().sort_by(SortKey::Name)) {
        println!("  {course}");
    }

    Ok(())
}

fn report(title: &str, fetched: &FetchedCourses) {
    println!(
        "{title}: {} courses from {} at {}",
        fetched.len(),
        fetched.source,
        fetched.fetched_at.format("%H:%M:%S")
    );
    for course in fetched.courses.iter().take(10) {
        println!("  {course}\n    {}", course.map_url);
    }
    println!();
}
