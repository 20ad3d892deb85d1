// crates/iso3166-core/src/lib.rs

//! ISO 3166-1 country reference data.
//!
//! Lookups by alpha-2, alpha-3, numeric code and English short name over an
//! embedded dataset of ~250 records, plus alias resolution for informal
//! country names and locale-based display-name decoration. The dataset is
//! immutable after construction, so providers can be shared freely across
//! threads.
//!
//! ```
//! use iso3166_core::prelude::*;
//!
//! let iso = Iso3166::new();
//! assert_eq!(iso.alpha("USA")?.alpha2(), "US");
//! assert_eq!(iso.name("Côte d'Ivoire")?.alpha3(), "CIV");
//! # Ok::<(), iso3166_core::Iso3166Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod alias;
pub mod data;
pub mod dataset;
pub mod error;
pub mod keys;
pub mod localize;
pub mod model;
pub mod provider;
pub mod raw;
pub mod text;
pub mod validate;

// Re-exports
pub use crate::error::{Iso3166Error, Result};

pub use crate::alias::Aliased;
pub use crate::data::default_dataset;
pub use crate::dataset::{CountryDataset, Dataset};
pub use crate::keys::{Field, KeyKind};
pub use crate::localize::{DisplayNames, Localizer};
pub use crate::model::Country;
pub use crate::provider::{CountryLookup, Iso3166};
pub use crate::raw::RawCountry;

/// One-stop imports for the common use cases.
pub mod prelude {
    pub use crate::alias::Aliased;
    pub use crate::dataset::{CountryDataset, Dataset};
    pub use crate::error::{Iso3166Error, Result};
    pub use crate::keys::Field;
    pub use crate::localize::{DisplayNames, Localizer};
    pub use crate::model::Country;
    pub use crate::provider::{CountryLookup, Iso3166};
    pub use crate::raw::RawCountry;
}
