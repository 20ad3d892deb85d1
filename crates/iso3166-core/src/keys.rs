// crates/iso3166-core/src/keys.rs

//! Country record fields and the key guards that reject malformed
//! identifiers before they reach the lookup scan.
//!
//! Guards are pure shape checks: no trimming, no case normalization.
//! Case-folding happens at lookup time, in one place.

use crate::error::{Iso3166Error, Result};
use std::fmt;
use std::str::FromStr;

/// The four lookup-relevant fields of a country record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Alpha2,
    Alpha3,
    Numeric,
}

impl Field {
    /// All fields, in the validator's fixed checking order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Alpha2, Field::Alpha3, Field::Numeric];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Alpha2 => "alpha2",
            Field::Alpha3 => "alpha3",
            Field::Numeric => "numeric",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Iso3166Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(Field::Name),
            "alpha2" => Ok(Field::Alpha2),
            "alpha3" => Ok(Field::Alpha3),
            "numeric" => Ok(Field::Numeric),
            other => Err(Iso3166Error::InvalidKey(other.to_owned())),
        }
    }
}

/// Identifier shape classes reported by [`Iso3166Error::MalformedKey`].
///
/// `Alpha` is the combined alpha-2-or-alpha-3 shape used by the
/// [`alpha`](crate::provider::CountryLookup::alpha) convenience lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Alpha2,
    Alpha3,
    Alpha,
    Numeric,
    Currency,
}

impl KeyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyKind::Alpha2 => "alpha2",
            KeyKind::Alpha3 => "alpha3",
            KeyKind::Alpha => "alpha2/alpha3",
            KeyKind::Numeric => "numeric",
            KeyKind::Currency => "currency",
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn malformed(kind: KeyKind, value: &str) -> Iso3166Error {
    Iso3166Error::MalformedKey {
        kind,
        value: value.to_owned(),
    }
}

/// Reject anything that is not exactly two ASCII letters (any case).
pub fn guard_alpha2(value: &str) -> Result<()> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(malformed(KeyKind::Alpha2, value))
    }
}

/// Reject anything that is not exactly three ASCII letters (any case).
pub fn guard_alpha3(value: &str) -> Result<()> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(malformed(KeyKind::Alpha3, value))
    }
}

/// Reject anything that is not exactly three ASCII digits.
///
/// Leading zeros are required and preserved: `"004"` is valid, `"4"` is not.
pub fn guard_numeric(value: &str) -> Result<()> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(malformed(KeyKind::Numeric, value))
    }
}

/// Reject empty or all-whitespace names. Names have no fixed shape beyond
/// that, by design.
pub fn guard_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Iso3166Error::EmptyName)
    } else {
        Ok(())
    }
}

/// Reject anything that is not a three-letter currency code shape.
///
/// Only exercised by the normalizing validator variant; plain validation
/// treats currency entries as opaque.
pub fn guard_currency(value: &str) -> Result<()> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(malformed(KeyKind::Currency, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha2_shape() {
        assert!(guard_alpha2("US").is_ok());
        assert!(guard_alpha2("us").is_ok());
        for bad in ["A", "ABC", "12", "U1", "", "ÅL"] {
            assert_eq!(
                guard_alpha2(bad),
                Err(Iso3166Error::MalformedKey {
                    kind: KeyKind::Alpha2,
                    value: bad.to_owned(),
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn alpha3_shape() {
        assert!(guard_alpha3("USA").is_ok());
        assert!(guard_alpha3("civ").is_ok());
        for bad in ["US", "USAA", "123", ""] {
            assert!(guard_alpha3(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn numeric_shape() {
        assert!(guard_numeric("004").is_ok());
        assert!(guard_numeric("840").is_ok());
        for bad in ["AB", "12", "1234", "84O", ""] {
            assert_eq!(
                guard_numeric(bad),
                Err(Iso3166Error::MalformedKey {
                    kind: KeyKind::Numeric,
                    value: bad.to_owned(),
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn name_guard_trims() {
        assert!(guard_name("Chad").is_ok());
        assert_eq!(guard_name(""), Err(Iso3166Error::EmptyName));
        assert_eq!(guard_name("   \t"), Err(Iso3166Error::EmptyName));
    }

    #[test]
    fn field_round_trips_through_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert_eq!(
            "capital".parse::<Field>(),
            Err(Iso3166Error::InvalidKey("capital".to_owned()))
        );
    }
}
