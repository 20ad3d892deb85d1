// crates/iso3166-core/src/raw.rs

//! Untyped input records for caller-supplied datasets.
//!
//! Replacement datasets arrive as loosely-shaped mappings (typically JSON),
//! so every required field is an `Option` here. A `RawCountry` only becomes
//! a [`Country`](crate::model::Country) by passing through the validator.

use serde::{Deserialize, Serialize};

/// One record of a caller-supplied replacement dataset, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCountry {
    pub name: Option<String>,
    pub alpha2: Option<String>,
    pub alpha3: Option<String>,
    pub numeric: Option<String>,
    #[serde(default)]
    pub currency: Vec<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub demonym: Option<String>,
}

impl RawCountry {
    /// Convenience constructor for fully-populated records.
    pub fn new(name: &str, alpha2: &str, alpha3: &str, numeric: &str) -> Self {
        RawCountry {
            name: Some(name.to_owned()),
            alpha2: Some(alpha2.to_owned()),
            alpha3: Some(alpha3.to_owned()),
            numeric: Some(numeric.to_owned()),
            currency: Vec::new(),
            continent: None,
            demonym: None,
        }
    }

    pub fn with_currency(mut self, codes: &[&str]) -> Self {
        self.currency = codes.iter().map(|c| (*c).to_owned()).collect();
        self
    }
}
