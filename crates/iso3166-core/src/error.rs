// crates/iso3166-core/src/error.rs

use crate::keys::{Field, KeyKind};
use thiserror::Error;

/// Convenient result alias used across the crate.
pub type Result<T> = std::result::Result<T, Iso3166Error>;

/// All failure modes of the lookup and validation surface.
///
/// Every variant carries the offending field and/or value so callers can
/// report *what* was wrong, not just that something was. Lookups never fail
/// with a generic unlabeled error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Iso3166Error {
    /// A string was supplied but does not match the required key shape
    /// (2 letters for alpha-2, 3 letters for alpha-3, 3 digits for numeric).
    #[error("{value:?} is not a valid {kind} key")]
    MalformedKey { kind: KeyKind, value: String },

    /// A country name was empty or all-whitespace after trimming.
    #[error("country name must not be empty")]
    EmptyName,

    /// A caller-supplied record lacks a required field.
    ///
    /// `index` is the position of the offending record in the supplied
    /// collection; the whole batch is rejected.
    #[error("record {index} is missing required field `{field}`")]
    MissingKey { index: usize, field: Field },

    /// A well-formed identifier matched no record in the dataset.
    #[error("no country has {key} {value:?}")]
    NotFound { key: Field, value: String },

    /// Combined alpha lookup miss: the value matched no record by alpha-2
    /// and no record by alpha-3.
    #[error("{value:?} matches no country by alpha2 or alpha3")]
    NotFoundAlpha { value: String },

    /// `iter()` (string form) was asked for an unrecognized field name.
    #[error("{0:?} is not a recognized country field")]
    InvalidKey(String),

    /// The localizer was configured to inject into a protected field.
    #[error("{0:?} is a protected country field and cannot be used as a localization target")]
    ForbiddenKey(String),

    /// A caller-supplied JSON record array could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid country record JSON: {0}")]
    Json(String),
}
