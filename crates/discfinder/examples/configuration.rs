//! Finder configuration
//!
//! Shows the builder presets, overriding endpoints, and what validation rejects.

use discfinder::{
    FinderConfig, FinderConfigBuilder, Provider,
    sources::{Coordinates, Facet},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Presets:");
    describe("default", &FinderConfig::default());
    describe("overpass", &FinderConfigBuilder::overpass().build());
    describe("places", &FinderConfigBuilder::places("my-api-key").build());
    describe("local", &FinderConfigBuilder::local().build());
    describe("from_env", &FinderConfig::from_env());

    // Some mappers tag courses as leisure=disc_golf instead of sport=disc_golf.
    let custom = FinderConfig::builder()
        .facet(Facet::leisure())
        .radius_km(1_000.0)
        .fallback_center(Coordinates::new(39.0997, -94.5786))
        .overpass_url("https://overpass.kumi.systems/api/interpreter")
        .user_agent("my-course-app/0.1 (me@example.com)")
        .build();
    custom.validate()?;
    println!("\nCustom:");
    describe("custom", &custom);

    println!("\nRejected:");
    let bad = [
        FinderConfigBuilder::places("").build(),
        FinderConfigBuilder::new().nominatim_url("nominatim").build(),
    ];
    for config in &bad {
        if let Err(e) = config.validate() {
            println!("  {e}");
        }
    }

    Ok(())
}

fn describe(label: &str, config: &FinderConfig) {
    let provider = match &config.provider {
        Provider::Overpass => format!("Overpass {}", config.facet),
        Provider::Places { .. } => format!("Places '{}'", config.places_keyword),
    };
    println!(
        "  {label:<9} {provider:<36} radius {:>5} km, fallback {}",
        config.radius_km, config.fallback_center
    );
}
