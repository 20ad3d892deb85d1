// crates/iso3166-core/src/dataset.rs

//! The dataset container and the matching algorithm.
//!
//! Lookup is intentionally a linear scan: the dataset is small and fixed
//! (~250 records), so no index structure is justified. Records are scanned
//! in stored order and the first match wins, which keeps iteration and
//! lookup deterministic.

use crate::error::{Iso3166Error, Result};
use crate::keys::Field;
use crate::model::Country;
use crate::text::{equals_folded, fold_key, matches_folded_prefix};
use serde::{Deserialize, Serialize};
use std::slice;

/// Capability contract for anything that can back the lookup facade.
///
/// The facade depends only on this trait, so callers can substitute their
/// own storage/query strategy (a different container, a filtered view, a
/// proxy) without touching the facade. [`Dataset`] is the stock
/// implementation; the embedded default table is exposed as a
/// `&'static Dataset`.
pub trait CountryDataset {
    /// Number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, in insertion order.
    fn all(&self) -> &[Country];

    /// Find the first record whose `key` field matches `value`.
    ///
    /// Matching lower-cases both sides with full Unicode case folding, then
    /// accepts equality or a prefix match: the folded `value` compared
    /// against the folded stored value truncated to the needle's own
    /// length. The prefix tolerance exists to absorb trailing punctuation
    /// and partial queries, not to provide free-text search.
    ///
    /// A miss is [`Iso3166Error::NotFound`] carrying `key` and the original
    /// (un-folded) `value`.
    fn lookup(&self, key: Field, value: &str) -> Result<&Country>;

    /// Find a record by name using Unicode case-insensitive equality only,
    /// with no prefix tolerance.
    fn lookup_exact_name(&self, value: &str) -> Result<&Country>;
}

/// An ordered, immutable collection of country records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Country>,
}

impl Dataset {
    /// Wrap already-validated records. Insertion order is preserved and
    /// determines both iteration order and first-match resolution.
    pub fn new(records: Vec<Country>) -> Self {
        Dataset { records }
    }

    /// Validate raw records (presence + key shapes), then build a dataset.
    /// The first invalid record rejects the whole batch.
    pub fn from_raw(records: Vec<crate::raw::RawCountry>) -> Result<Self> {
        Ok(Dataset::new(crate::validate::validate(records)?))
    }

    /// Parse a JSON array of records and validate it into a dataset.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<crate::raw::RawCountry> =
            serde_json::from_str(json).map_err(|e| Iso3166Error::Json(e.to_string()))?;
        Dataset::from_raw(raw)
    }

    /// Like [`Dataset::from_json_str`], reading from any `io::Read`.
    #[cfg(feature = "json")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let raw: Vec<crate::raw::RawCountry> =
            serde_json::from_reader(reader).map_err(|e| Iso3166Error::Json(e.to_string()))?;
        Dataset::from_raw(raw)
    }

    pub fn iter(&self) -> slice::Iter<'_, Country> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Country;
    type IntoIter = slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl CountryDataset for Dataset {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn all(&self) -> &[Country] {
        &self.records
    }

    fn lookup(&self, key: Field, value: &str) -> Result<&Country> {
        let needle = fold_key(value);
        self.records
            .iter()
            .find(|r| matches_folded_prefix(r.field(key), &needle))
            .ok_or_else(|| Iso3166Error::NotFound {
                key,
                value: value.to_owned(),
            })
    }

    fn lookup_exact_name(&self, value: &str) -> Result<&Country> {
        self.records
            .iter()
            .find(|r| equals_folded(r.name(), value))
            .ok_or_else(|| Iso3166Error::NotFound {
                key: Field::Name,
                value: value.to_owned(),
            })
    }
}

// Shared references satisfy the same contract, so a `&'static Dataset`
// (the embedded default) plugs straight into the facade.
impl<D: CountryDataset + ?Sized> CountryDataset for &D {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn all(&self) -> &[Country] {
        (**self).all()
    }

    fn lookup(&self, key: Field, value: &str) -> Result<&Country> {
        (**self).lookup(key, value)
    }

    fn lookup_exact_name(&self, value: &str) -> Result<&Country> {
        (**self).lookup_exact_name(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawCountry;

    fn small() -> Dataset {
        Dataset::from_raw(vec![
            RawCountry::new("France", "FR", "FRA", "250").with_currency(&["EUR"]),
            RawCountry::new("Gabon", "GA", "GAB", "266").with_currency(&["XAF"]),
            RawCountry::new("Côte d'Ivoire", "CI", "CIV", "384").with_currency(&["XOF"]),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let ds = small();
        assert_eq!(ds.lookup(Field::Alpha2, "fr").unwrap().name(), "France");
        assert_eq!(ds.lookup(Field::Alpha2, "FR").unwrap().name(), "France");
        assert_eq!(ds.lookup(Field::Alpha3, "gab").unwrap().name(), "Gabon");
    }

    #[test]
    fn lookup_folds_unicode() {
        let ds = small();
        let hit = ds.lookup(Field::Name, "CÔTE D'IVOIRE").unwrap();
        assert_eq!(hit.alpha3(), "CIV");
    }

    #[test]
    fn lookup_tolerates_prefix_queries() {
        let ds = small();
        // Needle truncates the stored value to its own length.
        assert_eq!(ds.lookup(Field::Name, "Franc").unwrap().alpha2(), "FR");
        // But folding never strips accents, so this stays a miss.
        assert!(ds.lookup(Field::Name, "Cote d'Ivoire").is_err());
    }

    #[test]
    fn exact_name_has_no_prefix_tolerance() {
        let ds = small();
        assert!(ds.lookup_exact_name("france").is_ok());
        assert_eq!(
            ds.lookup_exact_name("Franc"),
            Err(Iso3166Error::NotFound {
                key: Field::Name,
                value: "Franc".to_owned(),
            })
        );
    }

    #[test]
    fn miss_reports_key_and_original_value() {
        let ds = small();
        assert_eq!(
            ds.lookup(Field::Alpha2, "ZZ"),
            Err(Iso3166Error::NotFound {
                key: Field::Alpha2,
                value: "ZZ".to_owned(),
            })
        );
    }

    #[test]
    fn first_match_wins_in_stored_order() {
        // Two records sharing a name prefix: stored order decides.
        let ds = Dataset::from_raw(vec![
            RawCountry::new("Testland", "T1", "TS1", "001"),
            RawCountry::new("Testlandia", "T2", "TS2", "002"),
        ]);
        // Raw alpha codes with digits are malformed; build directly instead.
        assert!(ds.is_err());

        let ds = Dataset::from_raw(vec![
            RawCountry::new("Testland", "TA", "TSA", "001"),
            RawCountry::new("Testlandia", "TB", "TSB", "002"),
        ])
        .unwrap();
        assert_eq!(ds.lookup(Field::Name, "Testlan").unwrap().alpha2(), "TA");
    }
}
