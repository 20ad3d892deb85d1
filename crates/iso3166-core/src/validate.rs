// crates/iso3166-core/src/validate.rs

//! Gate-checking for caller-supplied replacement datasets.
//!
//! Two historical behaviors exist and both are kept: [`validate`] checks
//! shapes and returns records unchanged, [`validate_normalized`] also
//! canonicalizes them (uppercased codes, zero-padded numeric, trimmed
//! name, validated currency codes). The facade's record-array constructor
//! uses the plain variant.
//!
//! Validation is all-or-nothing: the first invalid record aborts the whole
//! batch and no partial dataset is produced.

use crate::error::{Iso3166Error, Result};
use crate::keys::{
    guard_alpha2, guard_alpha3, guard_currency, guard_name, guard_numeric, Field, KeyKind,
};
use crate::model::Country;
use crate::raw::RawCountry;
use std::collections::BTreeMap;

fn require(index: usize, field: Field, value: Option<String>) -> Result<String> {
    value.ok_or(Iso3166Error::MissingKey { index, field })
}

/// Check one record: presence then shape, in the fixed order
/// name → alpha2 → alpha3 → numeric. Currency entries are tolerated opaque.
fn check_record(index: usize, raw: RawCountry) -> Result<Country> {
    let name = require(index, Field::Name, raw.name)?;
    guard_name(&name)?;
    let alpha2 = require(index, Field::Alpha2, raw.alpha2)?;
    guard_alpha2(&alpha2)?;
    let alpha3 = require(index, Field::Alpha3, raw.alpha3)?;
    guard_alpha3(&alpha3)?;
    let numeric = require(index, Field::Numeric, raw.numeric)?;
    guard_numeric(&numeric)?;

    Ok(Country {
        name,
        alpha2,
        alpha3,
        numeric,
        currency: raw.currency,
        continent: raw.continent,
        demonym: raw.demonym,
        extra: BTreeMap::new(),
    })
}

/// Numeric shape for the normalizing variant: 1 to 3 ASCII digits, padded
/// to three afterwards.
fn guard_numeric_lenient(value: &str) -> Result<()> {
    if !value.is_empty() && value.len() <= 3 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Iso3166Error::MalformedKey {
            kind: KeyKind::Numeric,
            value: value.to_owned(),
        })
    }
}

fn check_record_normalized(index: usize, raw: RawCountry) -> Result<Country> {
    let name = require(index, Field::Name, raw.name)?;
    guard_name(&name)?;
    let alpha2 = require(index, Field::Alpha2, raw.alpha2)?;
    guard_alpha2(&alpha2)?;
    let alpha3 = require(index, Field::Alpha3, raw.alpha3)?;
    guard_alpha3(&alpha3)?;
    let numeric = require(index, Field::Numeric, raw.numeric)?;
    guard_numeric_lenient(&numeric)?;

    let mut currency = Vec::with_capacity(raw.currency.len());
    for code in &raw.currency {
        guard_currency(code)?;
        currency.push(code.to_ascii_uppercase());
    }

    Ok(Country {
        name: name.trim().to_owned(),
        alpha2: alpha2.to_ascii_uppercase(),
        alpha3: alpha3.to_ascii_uppercase(),
        numeric: format!("{numeric:0>3}"),
        currency,
        continent: raw.continent,
        demonym: raw.demonym,
        extra: BTreeMap::new(),
    })
}

/// Validate a replacement dataset without altering it.
///
/// Every record must carry `name`, `alpha2`, `alpha3` and `numeric`
/// ([`Iso3166Error::MissingKey`] names the first absent field, checked in
/// that order), and each present value must pass its key guard.
///
/// # Examples
///
/// ```
/// use iso3166_core::raw::RawCountry;
/// use iso3166_core::validate::validate;
///
/// let records = vec![RawCountry::new("Utopia", "UT", "UTA", "900")];
/// let countries = validate(records).unwrap();
/// assert_eq!(countries[0].alpha3(), "UTA");
/// ```
pub fn validate(records: Vec<RawCountry>) -> Result<Vec<Country>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| check_record(index, raw))
        .collect()
}

/// The stricter historical variant: validate *and* canonicalize.
///
/// In addition to the checks of [`validate`], currency codes must be
/// three-letter shapes; output records have uppercased `alpha2`/`alpha3`/
/// currency codes, the numeric code zero-padded to three digits, and the
/// name trimmed.
pub fn validate_normalized(records: Vec<RawCountry>) -> Result<Vec<Country>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, raw)| check_record_normalized(index, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_first_absent_key() {
        let mut rec = RawCountry::new("Foo", "FO", "FOO", "001");
        rec.alpha2 = None;
        let err = validate(vec![rec]).unwrap_err();
        assert_eq!(
            err,
            Iso3166Error::MissingKey {
                index: 0,
                field: Field::Alpha2,
            }
        );
    }

    #[test]
    fn checking_order_is_name_first() {
        // Both name and numeric missing: name is reported.
        let rec = RawCountry {
            alpha2: Some("FO".to_owned()),
            alpha3: Some("FOO".to_owned()),
            ..RawCountry::default()
        };
        let err = validate(vec![rec]).unwrap_err();
        assert_eq!(
            err,
            Iso3166Error::MissingKey {
                index: 0,
                field: Field::Name,
            }
        );
    }

    #[test]
    fn first_bad_record_aborts_batch() {
        let good = RawCountry::new("Foo", "FO", "FOO", "001");
        let bad = RawCountry::new("Bar", "BARX", "BAR", "002");
        assert!(validate(vec![good.clone(), bad.clone()]).is_err());
        // Order matters: the same bad record later still kills the batch.
        assert!(validate(vec![bad, good]).is_err());
    }

    #[test]
    fn plain_validate_returns_records_unchanged() {
        let rec = RawCountry::new(" Foo ", "fo", "foo", "001").with_currency(&["eur"]);
        let out = validate(vec![rec]).unwrap();
        assert_eq!(out[0].name(), " Foo ");
        assert_eq!(out[0].alpha2(), "fo");
        assert_eq!(out[0].currencies(), ["eur"]);
    }

    #[test]
    fn normalized_variant_canonicalizes() {
        let rec = RawCountry::new(" Foo ", "fo", "foo", "1").with_currency(&["eur", "usd"]);
        let out = validate_normalized(vec![rec]).unwrap();
        assert_eq!(out[0].name(), "Foo");
        assert_eq!(out[0].alpha2(), "FO");
        assert_eq!(out[0].alpha3(), "FOO");
        assert_eq!(out[0].numeric(), "001");
        assert_eq!(out[0].currencies(), ["EUR", "USD"]);
    }

    #[test]
    fn normalized_variant_rejects_bad_currency() {
        let rec = RawCountry::new("Foo", "FO", "FOO", "001").with_currency(&["EURO"]);
        let err = validate_normalized(vec![rec]).unwrap_err();
        assert_eq!(
            err,
            Iso3166Error::MalformedKey {
                kind: KeyKind::Currency,
                value: "EURO".to_owned(),
            }
        );
        // The plain variant tolerates the same record.
        let rec = RawCountry::new("Foo", "FO", "FOO", "001").with_currency(&["EURO"]);
        assert!(validate(vec![rec]).is_ok());
    }
}
