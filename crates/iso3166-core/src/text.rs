// crates/iso3166-core/src/text.rs

//! Unicode-aware case folding used by all matching.
//!
//! Country names are not ASCII-only ("Åland Islands", "Côte d'Ivoire",
//! "Türkiye"), so matching lowercases through [`str::to_lowercase`] rather
//! than byte-wise ASCII folding. Folding is *case only*: no accent
//! stripping, no transliteration. "Cote d'Ivoire" is a different name from
//! "Côte d'Ivoire".

/// Convert a string into a folded key suitable for comparison.
///
/// # Examples
///
/// ```
/// use iso3166_core::text::fold_key;
///
/// assert_eq!(fold_key("CÔTE D'IVOIRE"), "côte d'ivoire");
/// assert_eq!(fold_key("Åland Islands"), "åland islands");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality on folded form.
///
/// ```
/// use iso3166_core::text::equals_folded;
///
/// assert!(equals_folded("ÅLAND ISLANDS", "åland islands"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Prefix-tolerant match: true when the folded needle equals the folded
/// stored value truncated to the needle's own length.
///
/// Equality is a special case of this test, so lookup call sites only need
/// the one predicate. An empty needle would match everything; callers guard
/// inputs before getting here.
pub fn matches_folded_prefix(stored: &str, needle_folded: &str) -> bool {
    fold_key(stored).starts_with(needle_folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_is_case_only() {
        assert_eq!(fold_key("ÅLAND"), "åland");
        // No accent stripping: the folded forms stay distinct.
        assert_ne!(fold_key("Côte"), fold_key("Cote"));
    }

    #[test]
    fn prefix_is_needle_length_truncation() {
        let needle = fold_key("United");
        assert!(matches_folded_prefix("United Arab Emirates", &needle));
        assert!(matches_folded_prefix("United States of America", &needle));
        assert!(!matches_folded_prefix("Uruguay", &needle));
        // Needle longer than the stored value never matches.
        assert!(!matches_folded_prefix("Chad", &fold_key("Chadia")));
    }
}
