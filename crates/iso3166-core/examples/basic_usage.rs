//! Basic usage example for iso3166-core
//!
//! This example demonstrates how to:
//! - Look up countries by alpha-2, alpha-3, numeric code and name
//! - Enumerate and iterate the default dataset
//! - Resolve informal names through the alias decorator

use iso3166_core::prelude::*;

fn main() -> Result<()> {
    println!("=== iso3166-core Basic Usage Example ===\n");

    let iso = Iso3166::new();

    // Example 1: All countries
    println!("--- Example 1: List countries ---");
    println!("Total countries: {}", iso.len());
    for (i, country) in iso.all().iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.alpha2());
    }
    println!("... and {} more\n", iso.len() - 5);

    // Example 2: Lookup by any key
    println!("--- Example 2: Lookups ---");
    let us = iso.alpha2("US")?;
    println!("alpha2 US      -> {}", us.name());
    let france = iso.alpha3("fra")?;
    println!("alpha3 fra     -> {}", france.name());
    let chad = iso.numeric("148")?;
    println!("numeric 148    -> {}", chad.name());
    let civ = iso.name("côte d'ivoire")?;
    println!("name (folded)  -> {} ({})", civ.name(), civ.alpha3());
    let either = iso.alpha("DEU")?;
    println!("alpha (2 or 3) -> {}", either.name());
    println!();

    // Example 3: Keyed iteration
    println!("--- Example 3: Iterate by alpha3 ---");
    for (code, country) in iso.iter(Field::Alpha3).take(3) {
        println!("{code} -> {}", country.name());
    }
    println!();

    // Example 4: Informal names via the alias decorator
    println!("--- Example 4: Alias resolution ---");
    let aliased = Aliased::new(Iso3166::new());
    for informal in ["USA", "Czech Republic", "Ivory Coast", "Turkey"] {
        let country = aliased.name(informal)?;
        println!("{informal:>15} -> {}", country.name());
    }

    Ok(())
}
