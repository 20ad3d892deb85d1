// crates/iso3166-core/src/alias.rs

//! Alias resolution for commonly-used informal country names.
//!
//! [`Aliased`] decorates any [`CountryLookup`]: `name()` inputs that
//! case-insensitively equal a known alias are rewritten to the dataset's
//! canonical name before delegation, and the wrapped provider still applies
//! its normal matching to the rewritten value. Every other operation passes
//! through unchanged, so an `Aliased<Iso3166>` is interchangeable with a
//! bare `Iso3166` from the caller's perspective.

use crate::error::Result;
use crate::model::Country;
use crate::provider::CountryLookup;
use crate::text::equals_folded;

/// Informal name → canonical ISO short name, for the common cases where
/// everyday usage and the ISO register disagree.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Bolivia", "Bolivia, Plurinational State of"),
    ("Britain", "United Kingdom of Great Britain and Northern Ireland"),
    ("Burma", "Myanmar"),
    ("Cape Verde", "Cabo Verde"),
    ("Czech Republic", "Czechia"),
    ("Great Britain", "United Kingdom of Great Britain and Northern Ireland"),
    ("Holland", "Netherlands"),
    ("Iran", "Iran, Islamic Republic of"),
    ("Ivory Coast", "Côte d'Ivoire"),
    ("Laos", "Lao People's Democratic Republic"),
    ("Macedonia", "North Macedonia"),
    ("Moldova", "Moldova, Republic of"),
    ("North Korea", "Korea, Democratic People's Republic of"),
    ("Russia", "Russian Federation"),
    ("South Korea", "Korea, Republic of"),
    ("Swaziland", "Eswatini"),
    ("Syria", "Syrian Arab Republic"),
    ("Taiwan", "Taiwan, Province of China"),
    ("Tanzania", "Tanzania, United Republic of"),
    ("Turkey", "Türkiye"),
    ("UK", "United Kingdom of Great Britain and Northern Ireland"),
    ("USA", "United States of America"),
    ("United States", "United States of America"),
    ("Vatican City", "Holy See"),
    ("Venezuela", "Venezuela, Bolivarian Republic of"),
    ("Vietnam", "Viet Nam"),
];

/// Decorator that rewrites informal names before `name()` lookups.
///
/// # Examples
///
/// ```
/// use iso3166_core::prelude::*;
///
/// let iso = Aliased::new(Iso3166::new());
/// let us = iso.name("USA")?;
/// assert_eq!(us.name(), "United States of America");
/// // Pass-through for everything else:
/// assert_eq!(iso.alpha3("USA")?.alpha2(), "US");
/// # Ok::<(), iso3166_core::Iso3166Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Aliased<P: CountryLookup> {
    inner: P,
    aliases: &'static [(&'static str, &'static str)],
}

impl<P: CountryLookup> Aliased<P> {
    /// Wrap a provider with the [`DEFAULT_ALIASES`] table.
    pub fn new(inner: P) -> Self {
        Aliased {
            inner,
            aliases: DEFAULT_ALIASES,
        }
    }

    /// Wrap a provider with a custom alias table.
    pub fn with_aliases(inner: P, aliases: &'static [(&'static str, &'static str)]) -> Self {
        Aliased { inner, aliases }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    /// The canonical name for `name` if it is a known alias, otherwise
    /// `name` unchanged. Comparison is case-insensitive on the alias key
    /// only.
    fn resolve<'a>(&self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(alias, _)| equals_folded(alias, name))
            .map(|(_, canonical)| *canonical)
            .unwrap_or(name)
    }
}

impl<P: CountryLookup> CountryLookup for Aliased<P> {
    fn name(&self, name: &str) -> Result<&Country> {
        self.inner.name(self.resolve(name))
    }

    fn alpha2(&self, code: &str) -> Result<&Country> {
        self.inner.alpha2(code)
    }

    fn alpha3(&self, code: &str) -> Result<&Country> {
        self.inner.alpha3(code)
    }

    fn alpha(&self, code: &str) -> Result<&Country> {
        self.inner.alpha(code)
    }

    fn numeric(&self, code: &str) -> Result<&Country> {
        self.inner.numeric(code)
    }

    fn exact_name(&self, name: &str) -> Result<&Country> {
        self.inner.exact_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Iso3166;

    #[test]
    fn alias_comparison_is_case_insensitive() {
        let iso = Aliased::new(Iso3166::new());
        assert_eq!(iso.name("usa").unwrap().alpha2(), "US");
        assert_eq!(iso.name("RUSSIA").unwrap().alpha3(), "RUS");
        assert_eq!(iso.name("ivory coast").unwrap().alpha3(), "CIV");
    }

    #[test]
    fn canonical_names_forward_unchanged() {
        let iso = Aliased::new(Iso3166::new());
        let direct = Iso3166::new();
        assert_eq!(
            iso.name("Czechia").unwrap(),
            direct.name("Czechia").unwrap()
        );
    }

    #[test]
    fn unknown_names_forward_unchanged() {
        let iso = Aliased::new(Iso3166::new());
        assert!(iso.name("Atlantis").is_err());
    }
}
