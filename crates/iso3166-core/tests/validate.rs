//! Gate-checking of caller-supplied replacement datasets.

use iso3166_core::prelude::*;
use iso3166_core::validate::{validate, validate_normalized};

#[test]
fn incomplete_records_name_the_missing_field() {
    let record = RawCountry {
        name: Some("Foo".to_owned()),
        alpha3: Some("FOO".to_owned()),
        numeric: Some("001".to_owned()),
        ..RawCountry::default()
    };
    assert_eq!(
        validate(vec![record]).unwrap_err(),
        Iso3166Error::MissingKey {
            index: 0,
            field: Field::Alpha2,
        }
    );
}

#[test]
fn fully_populated_records_pass_unchanged() {
    let records = vec![
        RawCountry::new("Utopia", "UT", "UTA", "900").with_currency(&["UTD"]),
        RawCountry::new("Erewhon", "EW", "EWH", "901"),
    ];
    let countries = validate(records.clone()).unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name(), "Utopia");
    assert_eq!(countries[0].currencies(), ["UTD"]);
    assert_eq!(countries[1].alpha3(), "EWH");
}

#[test]
fn guard_failures_propagate_from_the_validator() {
    let record = RawCountry::new("Foo", "F", "FOO", "001");
    assert!(matches!(
        validate(vec![record]).unwrap_err(),
        Iso3166Error::MalformedKey { .. }
    ));

    let record = RawCountry::new("   ", "FO", "FOO", "001");
    assert_eq!(
        validate(vec![record]).unwrap_err(),
        Iso3166Error::EmptyName
    );
}

#[test]
fn a_provider_can_be_built_from_validated_records() {
    let iso = Iso3166::from_records(vec![
        RawCountry::new("Utopia", "UT", "UTA", "900").with_currency(&["UTD"]),
        RawCountry::new("Erewhon", "EW", "EWH", "901"),
    ])
    .unwrap();
    assert_eq!(iso.len(), 2);
    assert_eq!(iso.alpha2("ut").unwrap().name(), "Utopia");
    assert_eq!(iso.numeric("901").unwrap().name(), "Erewhon");
    // Records outside the replacement set are gone.
    assert!(iso.alpha2("US").is_err());
}

#[test]
fn normalizing_constructor_canonicalizes_codes() {
    let iso = Iso3166::from_records_normalized(vec![
        RawCountry::new(" Utopia ", "ut", "uta", "9").with_currency(&["utd"]),
    ])
    .unwrap();
    let record = iso.alpha2("UT").unwrap();
    assert_eq!(record.name(), "Utopia");
    assert_eq!(record.alpha3(), "UTA");
    assert_eq!(record.numeric(), "009");
    assert_eq!(record.currencies(), ["UTD"]);
}

#[test]
fn normalized_variant_requires_currency_shape() {
    let record = RawCountry::new("Utopia", "UT", "UTA", "900").with_currency(&["DOLLARS"]);
    assert!(validate_normalized(vec![record.clone()]).is_err());
    assert!(validate(vec![record]).is_ok());
}

#[cfg(feature = "json")]
mod json {
    use super::*;

    const REPLACEMENT: &str = r#"[
        {"name": "Utopia", "alpha2": "UT", "alpha3": "UTA", "numeric": "900", "currency": ["UTD"]},
        {"name": "Erewhon", "alpha2": "EW", "alpha3": "EWH", "numeric": "901"}
    ]"#;

    #[test]
    fn providers_load_from_json_arrays() {
        let iso = Iso3166::from_json_str(REPLACEMENT).unwrap();
        assert_eq!(iso.len(), 2);
        assert_eq!(iso.alpha3("uta").unwrap().name(), "Utopia");
    }

    #[test]
    fn invalid_json_is_reported_as_such() {
        assert!(matches!(
            Iso3166::from_json_str("[{"),
            Err(Iso3166Error::Json(_))
        ));
    }

    #[test]
    fn json_records_still_go_through_the_validator() {
        let missing_alpha2 = r#"[{"name": "Foo", "alpha3": "FOO", "numeric": "001"}]"#;
        assert_eq!(
            Iso3166::from_json_str(missing_alpha2).unwrap_err(),
            Iso3166Error::MissingKey {
                index: 0,
                field: Field::Alpha2,
            }
        );
    }
}
