// crates/iso3166-core/src/provider.rs

//! The public lookup facade.
//!
//! [`Iso3166`] composes a [`CountryDataset`] with the key guards: every
//! identifier-accepting operation shape-checks its input first, then
//! delegates to the dataset's matching scan. The lookup operations live on
//! the [`CountryLookup`] trait so decorators (see
//! [`Aliased`](crate::alias::Aliased)) are drop-in substitutes for the
//! bare facade.

use crate::data::default_dataset;
use crate::dataset::{CountryDataset, Dataset};
use crate::error::{Iso3166Error, Result};
use crate::keys::{guard_alpha2, guard_alpha3, guard_name, guard_numeric, Field, KeyKind};
use crate::model::Country;
use crate::raw::RawCountry;

/// The lookup capability shared by the facade and its decorators.
pub trait CountryLookup {
    /// Look up by country name (case-insensitive, prefix-tolerant).
    ///
    /// Names have no fixed shape, so the only guard is against empty or
    /// all-whitespace input.
    fn name(&self, name: &str) -> Result<&Country>;

    /// Look up by alpha-2 code.
    fn alpha2(&self, code: &str) -> Result<&Country>;

    /// Look up by alpha-3 code.
    fn alpha3(&self, code: &str) -> Result<&Country>;

    /// Combined alpha lookup: accepts either code length.
    ///
    /// The value must have a valid alpha-2 *or* alpha-3 shape
    /// ([`Iso3166Error::MalformedKey`] otherwise); alpha-2 resolution is
    /// attempted first, then alpha-3. A double miss is
    /// [`Iso3166Error::NotFoundAlpha`], naming both attempts.
    fn alpha(&self, code: &str) -> Result<&Country>;

    /// Look up by three-digit numeric code (leading zeros required).
    fn numeric(&self, code: &str) -> Result<&Country>;

    /// Look up by name with case-insensitive equality only — no prefix
    /// tolerance. Use this when exact identification matters more than
    /// leniency.
    fn exact_name(&self, name: &str) -> Result<&Country>;
}

/// ISO 3166-1 lookup provider.
///
/// Built over any [`CountryDataset`]; defaults to the embedded table of
/// ~250 records. The provider is read-only after construction and can be
/// shared freely across threads.
///
/// # Examples
///
/// ```
/// use iso3166_core::prelude::*;
///
/// let iso = Iso3166::new();
/// let us = iso.alpha2("US")?;
/// assert_eq!(us.name(), "United States of America");
/// assert_eq!(us.numeric(), "840");
/// # Ok::<(), iso3166_core::Iso3166Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iso3166<D: CountryDataset = &'static Dataset> {
    dataset: D,
}

impl Iso3166<&'static Dataset> {
    /// A provider over the embedded default dataset.
    pub fn new() -> Self {
        Iso3166 {
            dataset: default_dataset(),
        }
    }
}

impl Default for Iso3166<&'static Dataset> {
    fn default() -> Self {
        Iso3166::new()
    }
}

impl Iso3166<Dataset> {
    /// Build a provider from caller-supplied raw records.
    ///
    /// The records are gate-checked by [`validate`](crate::validate::validate)
    /// and the first invalid record rejects the whole batch.
    pub fn from_records(records: Vec<RawCountry>) -> Result<Self> {
        Ok(Iso3166 {
            dataset: Dataset::from_raw(records)?,
        })
    }

    /// Like [`Iso3166::from_records`], but through the normalizing
    /// validator variant (uppercased codes, zero-padded numeric, trimmed
    /// name, validated currencies).
    pub fn from_records_normalized(records: Vec<RawCountry>) -> Result<Self> {
        Ok(Iso3166 {
            dataset: Dataset::new(crate::validate::validate_normalized(records)?),
        })
    }

    /// Build a provider from a JSON array of records.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Iso3166 {
            dataset: Dataset::from_json_str(json)?,
        })
    }
}

impl<D: CountryDataset> Iso3166<D> {
    /// Build a provider over any dataset implementation.
    pub fn with_dataset(dataset: D) -> Self {
        Iso3166 { dataset }
    }

    /// All records, in dataset order.
    pub fn all(&self) -> &[Country] {
        self.dataset.all()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// A fresh, lazy iterator of `(key value, record)` pairs keyed by
    /// `key`, in dataset order. Each call starts a new pass; nothing is
    /// materialized up front.
    ///
    /// For a string-keyed variant, parse the key first:
    /// `"alpha3".parse::<Field>()?` fails with
    /// [`Iso3166Error::InvalidKey`] for unrecognized names.
    pub fn iter(&self, key: Field) -> impl Iterator<Item = (&str, &Country)> + '_ {
        self.dataset.all().iter().map(move |r| (r.field(key), r))
    }
}

impl<D: CountryDataset> CountryLookup for Iso3166<D> {
    fn name(&self, name: &str) -> Result<&Country> {
        guard_name(name)?;
        self.dataset.lookup(Field::Name, name)
    }

    fn alpha2(&self, code: &str) -> Result<&Country> {
        guard_alpha2(code)?;
        self.dataset.lookup(Field::Alpha2, code)
    }

    fn alpha3(&self, code: &str) -> Result<&Country> {
        guard_alpha3(code)?;
        self.dataset.lookup(Field::Alpha3, code)
    }

    fn alpha(&self, code: &str) -> Result<&Country> {
        let is_alpha2 = guard_alpha2(code).is_ok();
        let is_alpha3 = guard_alpha3(code).is_ok();
        if !is_alpha2 && !is_alpha3 {
            return Err(Iso3166Error::MalformedKey {
                kind: KeyKind::Alpha,
                value: code.to_owned(),
            });
        }
        if is_alpha2 {
            if let Ok(hit) = self.dataset.lookup(Field::Alpha2, code) {
                return Ok(hit);
            }
        }
        if is_alpha3 {
            if let Ok(hit) = self.dataset.lookup(Field::Alpha3, code) {
                return Ok(hit);
            }
        }
        Err(Iso3166Error::NotFoundAlpha {
            value: code.to_owned(),
        })
    }

    fn numeric(&self, code: &str) -> Result<&Country> {
        guard_numeric(code)?;
        self.dataset.lookup(Field::Numeric, code)
    }

    fn exact_name(&self, name: &str) -> Result<&Country> {
        guard_name(name)?;
        self.dataset.lookup_exact_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_run_before_the_scan() {
        let iso = Iso3166::new();
        assert!(matches!(
            iso.alpha2("USA"),
            Err(Iso3166Error::MalformedKey {
                kind: KeyKind::Alpha2,
                ..
            })
        ));
        assert!(matches!(iso.name("   "), Err(Iso3166Error::EmptyName)));
        assert!(matches!(
            iso.numeric("84"),
            Err(Iso3166Error::MalformedKey {
                kind: KeyKind::Numeric,
                ..
            })
        ));
    }

    #[test]
    fn combined_alpha_shape_check() {
        let iso = Iso3166::new();
        assert_eq!(
            iso.alpha("U"),
            Err(Iso3166Error::MalformedKey {
                kind: KeyKind::Alpha,
                value: "U".to_owned(),
            })
        );
        assert_eq!(
            iso.alpha("ZZZ"),
            Err(Iso3166Error::NotFoundAlpha {
                value: "ZZZ".to_owned(),
            })
        );
    }

    #[test]
    fn iter_is_restartable() {
        let iso = Iso3166::new();
        let first: Vec<&str> = iso.iter(Field::Alpha2).map(|(k, _)| k).take(3).collect();
        let second: Vec<&str> = iso.iter(Field::Alpha2).map(|(k, _)| k).take(3).collect();
        assert_eq!(first, second);
    }
}
