// crates/iso3166-core/src/localize.rs

//! Locale-appropriate display names for country records.
//!
//! The crate does not ship a translation engine; it calls out through the
//! narrow [`DisplayNames`] capability (region subtag + locale → display
//! string). [`TableDisplayNames`] is a map-backed implementation for
//! callers that carry their own tables. Missing translations degrade
//! per-record to the raw alpha-3 code instead of failing the sequence.

use crate::error::{Iso3166Error, Result};
use crate::keys::guard_alpha3;
use crate::model::Country;
use std::collections::HashMap;

/// Fields the localizer refuses to overwrite: injecting into any of these
/// would corrupt the record's identity.
pub const PROTECTED_KEYS: &[&str] = &["alpha2", "alpha3", "numeric", "currency"];

/// External locale-display capability.
///
/// Implementations are expected to be infallible and side-effect-free:
/// return `Some(display)` when a translation exists, `None` when it does
/// not. The localizer handles the fallback.
pub trait DisplayNames {
    /// Human-readable name for the region identified by an ISO 3166-1
    /// alpha-3 code, in the given locale. An empty locale means the
    /// process's default locale.
    fn display_name(&self, alpha3: &str, locale: &str) -> Option<String>;
}

impl<T: DisplayNames + ?Sized> DisplayNames for &T {
    fn display_name(&self, alpha3: &str, locale: &str) -> Option<String> {
        (**self).display_name(alpha3, locale)
    }
}

/// [`DisplayNames`] backed by in-memory per-locale tables.
///
/// Alpha-3 keys are stored and queried uppercase, so lookups are
/// case-insensitive on the code.
#[derive(Debug, Clone, Default)]
pub struct TableDisplayNames {
    tables: HashMap<String, HashMap<String, String>>,
}

impl TableDisplayNames {
    pub fn new() -> Self {
        TableDisplayNames::default()
    }

    /// Register one translation.
    pub fn insert(&mut self, locale: &str, alpha3: &str, display: &str) {
        self.tables
            .entry(locale.to_owned())
            .or_default()
            .insert(alpha3.to_ascii_uppercase(), display.to_owned());
    }

    /// Builder-style bulk registration for one locale.
    pub fn with_table(mut self, locale: &str, entries: &[(&str, &str)]) -> Self {
        for (alpha3, display) in entries {
            self.insert(locale, alpha3, display);
        }
        self
    }
}

impl DisplayNames for TableDisplayNames {
    fn display_name(&self, alpha3: &str, locale: &str) -> Option<String> {
        self.tables
            .get(locale)?
            .get(&alpha3.to_ascii_uppercase())
            .cloned()
    }
}

/// Lazily decorates country records with a localized display name.
///
/// Each record pulled from [`Localizer::localize`] is cloned and gets the
/// display name injected under the configured key (default `"name"`,
/// which replaces the English short name on the copy; any other
/// non-protected key lands in the record's `extra` map).
///
/// # Examples
///
/// ```
/// use iso3166_core::prelude::*;
/// use iso3166_core::localize::TableDisplayNames;
///
/// let tables = TableDisplayNames::new().with_table("de", &[("DEU", "Deutschland")]);
/// let localizer = Localizer::new(tables).with_locale("de");
///
/// let iso = Iso3166::new();
/// let germany = iso.alpha2("DE")?;
/// let localized = localizer.localize_record(germany)?;
/// assert_eq!(localized.name(), "Deutschland");
/// # Ok::<(), iso3166_core::Iso3166Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Localizer<S: DisplayNames> {
    provider: S,
    key: String,
    locale: String,
}

impl<S: DisplayNames> Localizer<S> {
    /// A localizer injecting into `"name"`, using the process's default
    /// locale (empty locale string).
    pub fn new(provider: S) -> Self {
        Localizer {
            provider,
            key: "name".to_owned(),
            locale: String::new(),
        }
    }

    /// Set the locale passed to the display-name provider. Empty means the
    /// process default.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the injection key. The identifier fields in [`PROTECTED_KEYS`]
    /// are rejected with [`Iso3166Error::ForbiddenKey`].
    pub fn with_key(mut self, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if PROTECTED_KEYS.contains(&key.as_str()) {
            return Err(Iso3166Error::ForbiddenKey(key));
        }
        self.key = key;
        Ok(self)
    }

    /// Localize one record onto a copy.
    ///
    /// The record must carry a well-formed alpha-3 code
    /// ([`Iso3166Error::MalformedKey`] otherwise). When the provider has no
    /// translation for it, the raw alpha-3 string is injected instead —
    /// localization degrades gracefully per record.
    pub fn localize_record(&self, record: &Country) -> Result<Country> {
        guard_alpha3(record.alpha3())?;
        let display = self
            .provider
            .display_name(record.alpha3(), &self.locale)
            .unwrap_or_else(|| record.alpha3.clone());

        let mut out = record.clone();
        match self.key.as_str() {
            "name" => out.name = display,
            "continent" => out.continent = Some(display),
            "demonym" => out.demonym = Some(display),
            _ => {
                out.extra.insert(self.key.clone(), display);
            }
        }
        Ok(out)
    }

    /// Lazily localize any iterable of records.
    ///
    /// No record is transformed until it is pulled from the returned
    /// iterator; the sequence is bounded by the input and can be restarted
    /// by calling `localize` again.
    pub fn localize<'a, I>(&'a self, records: I) -> impl Iterator<Item = Result<Country>> + 'a
    where
        I: IntoIterator<Item = &'a Country>,
        I::IntoIter: 'a,
    {
        records
            .into_iter()
            .map(move |record| self.localize_record(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(alpha3: &str) -> Country {
        Country {
            name: "Testland".to_owned(),
            alpha2: "TL".to_owned(),
            alpha3: alpha3.to_owned(),
            numeric: "001".to_owned(),
            currency: Vec::new(),
            continent: None,
            demonym: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn protected_keys_are_rejected() {
        for key in PROTECTED_KEYS {
            let err = Localizer::new(TableDisplayNames::new())
                .with_key(*key)
                .unwrap_err();
            assert_eq!(err, Iso3166Error::ForbiddenKey((*key).to_owned()));
        }
        // "name" is the default and explicitly allowed.
        assert!(Localizer::new(TableDisplayNames::new())
            .with_key("name")
            .is_ok());
    }

    #[test]
    fn custom_key_lands_in_extra() {
        let tables = TableDisplayNames::new().with_table("fr", &[("TLD", "Paysdetest")]);
        let localizer = Localizer::new(tables)
            .with_locale("fr")
            .with_key("name_fr")
            .unwrap();
        let out = localizer.localize_record(&record("TLD")).unwrap();
        assert_eq!(out.name(), "Testland");
        assert_eq!(out.get("name_fr"), Some("Paysdetest"));
    }

    #[test]
    fn missing_translation_falls_back_to_alpha3() {
        let localizer = Localizer::new(TableDisplayNames::new());
        let out = localizer.localize_record(&record("TLD")).unwrap();
        assert_eq!(out.name(), "TLD");
    }

    #[test]
    fn malformed_alpha3_fails_the_record_only() {
        let localizer = Localizer::new(TableDisplayNames::new());
        let records = [record("TLD"), record(""), record("TLE")];
        let out: Vec<_> = localizer.localize(records.iter()).collect();
        assert!(out[0].is_ok());
        assert!(out[1].is_err());
        assert!(out[2].is_ok());
    }
}
