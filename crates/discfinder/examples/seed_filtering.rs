//! Filtering and sorting the curated course list
//!
//! No network access needed: an empty `ResultSlot` shows the built-in courses,
//! and `ComposeParams` is the whole of the search UI state.

use discfinder::{ComposeParams, Difficulty, DifficultyFilter, ResultSlot, SortKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    discfinder::init_logging(tracing::Level::WARN)?;
    let slot = ResultSlot::new();

    print_courses("All courses, best rated first", &slot, &ComposeParams::new());

    print_courses(
        "Beginner courses by name",
        &slot,
        &ComposeParams::new()
            .difficulty(DifficultyFilter::Only(Difficulty::Beginner))
            .sort_by(SortKey::Name),
    );

    print_courses(
        "Top picks",
        &slot,
        &ComposeParams::new().only_top_picks(true),
    );

    // Free text matches name or city, ignoring case.
    print_courses(
        "Matching 'park'",
        &slot,
        &ComposeParams::new().query("park"),
    );

    // Filters parse from the strings a form would hand over.
    let params = ComposeParams::new()
        .difficulty("Advanced".parse()?)
        .sort_by("name".parse()?);
    print_courses("Advanced, parsed from text", &slot, &params);

    Ok(())
}

fn print_courses(title: &str, slot: &ResultSlot, params: &ComposeParams) {
    let courses = slot.compose(params);
    println!("{title} ({}):", courses.len());
    for course in &courses {
        let pick = if course.top_pick { " *" } else { "" };
        println!(
            "  {:<28} {:<22} {:<12} {:.1} {:>2} holes{pick}",
            course.name, course.city, course.difficulty, course.rating, course.holes
        );
    }
    println!();
}
