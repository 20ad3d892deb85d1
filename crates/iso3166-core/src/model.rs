// crates/iso3166-core/src/model.rs

use crate::keys::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ISO 3166-1 country record.
///
/// Records are immutable once a dataset is built; nothing in the crate
/// mutates them after construction, so datasets can be shared freely across
/// threads.
///
/// `alpha2`, `alpha3`, `numeric` and `name` are each unique within a
/// dataset (case-insensitively). The lookup scan assumes first-match
/// correctness and does not detect duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// English short name, e.g. "Côte d'Ivoire". Never empty.
    pub name: String,
    /// ISO 3166-1 alpha-2 code, e.g. "CI".
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code, e.g. "CIV".
    pub alpha3: String,
    /// ISO 3166-1 numeric code as a string, leading zeros preserved
    /// (e.g. "004").
    pub numeric: String,
    /// ISO 4217 currency codes in use. May be empty; shared-currency
    /// territories can list several.
    #[serde(default)]
    pub currency: Vec<String>,
    /// Informational only, never matched on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// Adjectival/demonym form, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demonym: Option<String>,
    /// Caller-attached or localizer-injected side data. Never matched on.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Country {
    /// English short name. Always non-empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alpha-2 code (e.g. "US", "DE").
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    /// Alpha-3 code (e.g. "USA", "DEU").
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// Numeric code as stored, e.g. "840" or "004".
    pub fn numeric(&self) -> &str {
        &self.numeric
    }

    /// Currency codes in dataset order.
    pub fn currencies(&self) -> &[String] {
        &self.currency
    }

    /// The value of one of the four lookup fields.
    pub fn field(&self, key: Field) -> &str {
        match key {
            Field::Name => &self.name,
            Field::Alpha2 => &self.alpha2,
            Field::Alpha3 => &self.alpha3,
            Field::Numeric => &self.numeric,
        }
    }

    /// String-keyed access covering the lookup fields, the informational
    /// fields and any [`extra`](Country::extra) entries.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "alpha2" => Some(&self.alpha2),
            "alpha3" => Some(&self.alpha3),
            "numeric" => Some(&self.numeric),
            "continent" => self.continent.as_deref(),
            "demonym" => self.demonym.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chad() -> Country {
        Country {
            name: "Chad".to_owned(),
            alpha2: "TD".to_owned(),
            alpha3: "TCD".to_owned(),
            numeric: "148".to_owned(),
            currency: vec!["XAF".to_owned()],
            continent: Some("Africa".to_owned()),
            demonym: None,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn field_access_matches_struct_fields() {
        let c = chad();
        assert_eq!(c.field(Field::Name), "Chad");
        assert_eq!(c.field(Field::Alpha2), "TD");
        assert_eq!(c.field(Field::Alpha3), "TCD");
        assert_eq!(c.field(Field::Numeric), "148");
    }

    #[test]
    fn string_keyed_access_covers_extras() {
        let mut c = chad();
        c.extra.insert("name_fr".to_owned(), "Tchad".to_owned());
        assert_eq!(c.get("continent"), Some("Africa"));
        assert_eq!(c.get("demonym"), None);
        assert_eq!(c.get("name_fr"), Some("Tchad"));
        assert_eq!(c.get("capital"), None);
    }
}
