//! Display-name localization over dataset records.

use iso3166_core::localize::{TableDisplayNames, PROTECTED_KEYS};
use iso3166_core::prelude::*;

fn german_tables() -> TableDisplayNames {
    TableDisplayNames::new().with_table(
        "de",
        &[
            ("DEU", "Deutschland"),
            ("FRA", "Frankreich"),
            ("CIV", "Elfenbeinküste"),
        ],
    )
}

#[test]
fn records_are_decorated_lazily_in_dataset_order() {
    let iso = Iso3166::new();
    let localizer = Localizer::new(german_tables()).with_locale("de");

    let localized: Vec<Country> = localizer
        .localize(iso.all().iter().filter(|c| c.alpha2() == "DE"))
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(localized.len(), 1);
    assert_eq!(localized[0].name(), "Deutschland");
    // Identity fields are untouched on the copy.
    assert_eq!(localized[0].alpha3(), "DEU");

    // The source records themselves are never mutated.
    assert_eq!(iso.alpha2("DE").unwrap().name(), "Germany");
}

#[test]
fn unresolvable_codes_fall_back_to_the_raw_alpha3() {
    let iso = Iso3166::new();
    let localizer = Localizer::new(german_tables()).with_locale("de");

    let japan = iso.alpha2("JP").unwrap();
    let localized = localizer.localize_record(japan).unwrap();
    assert_eq!(localized.name(), "JPN");
}

#[test]
fn custom_keys_leave_the_name_alone() {
    let iso = Iso3166::new();
    let localizer = Localizer::new(german_tables())
        .with_locale("de")
        .with_key("display_name")
        .unwrap();

    let france = iso.alpha2("FR").unwrap();
    let localized = localizer.localize_record(france).unwrap();
    assert_eq!(localized.name(), "France");
    assert_eq!(localized.get("display_name"), Some("Frankreich"));
}

#[test]
fn protected_keys_cannot_be_injection_targets() {
    for key in PROTECTED_KEYS {
        assert_eq!(
            Localizer::new(german_tables()).with_key(*key).unwrap_err(),
            Iso3166Error::ForbiddenKey((*key).to_owned())
        );
    }
}

#[test]
fn whole_dataset_localizes_without_buffering() {
    let iso = Iso3166::new();
    let localizer = Localizer::new(german_tables()).with_locale("de");

    // Early termination: only pull a few records.
    let first: Vec<Country> = localizer
        .localize(iso.all())
        .take(3)
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(first.len(), 3);
    // Untranslated entries degraded to their alpha-3 rather than failing.
    assert_eq!(first[0].name(), "AFG");

    // Full pass still covers every record.
    assert_eq!(localizer.localize(iso.all()).count(), iso.len());
}
