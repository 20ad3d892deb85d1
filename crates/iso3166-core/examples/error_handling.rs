//! Error handling example for iso3166-core
//!
//! This example demonstrates the error taxonomy and edge cases

use iso3166_core::prelude::*;

fn main() {
    println!("=== iso3166-core Error Handling Example ===\n");

    let iso = Iso3166::new();

    // Example 1: Malformed identifiers are rejected before any lookup
    println!("--- Example 1: Malformed keys ---");
    for code in ["", "A", "ABCD", "12"] {
        match iso.alpha2(code) {
            Ok(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            Err(e) => println!("  ✗ {code:?}: {e}"),
        }
    }
    println!();

    // Example 2: Well-formed identifiers that match nothing
    println!("--- Example 2: Not found ---");
    for code in ["ZZ", "XA", "QQ"] {
        match iso.alpha2(code) {
            Ok(country) => println!("  Found: {}", country.name()),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 3: Replacement datasets are validated as a batch
    println!("--- Example 3: Validation failures ---");
    let records = vec![
        RawCountry::new("Utopia", "UT", "UTA", "900"),
        RawCountry {
            name: Some("Nowhere".to_owned()),
            alpha3: Some("NWH".to_owned()),
            numeric: Some("901".to_owned()),
            ..RawCountry::default()
        },
    ];
    match Iso3166::from_records(records) {
        Ok(iso) => println!("  Accepted {} records", iso.len()),
        Err(e) => println!("  ✗ whole batch rejected: {e}"),
    }
    println!();

    // Example 4: Distinguishing error kinds
    println!("--- Example 4: Matching on error kinds ---");
    match iso.alpha("ZZZ") {
        Ok(country) => println!("  Found: {}", country.name()),
        Err(Iso3166Error::MalformedKey { kind, value }) => {
            println!("  {value:?} does not look like a {kind} key")
        }
        Err(Iso3166Error::NotFoundAlpha { value }) => {
            println!("  {value:?} is shaped like a code but matches nothing")
        }
        Err(e) => println!("  other error: {e}"),
    }
}
