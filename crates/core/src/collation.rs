//! Locale-aware string ordering for display names
//!
//! Names are compared the way a human-facing sorted list expects: accents
//! and case only break ties between otherwise equal letters, so `"Éclair"`
//! sorts next to `"eclair"` instead of after `"zubat"`.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Base letters only: decomposed, combining marks removed, lowercased
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Letters with their accents, case folded
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Lowercase sorts before uppercase at the same position
fn tertiary_cmp(a: &str, b: &str) -> Ordering {
    let case_rank = |c: char| if c.is_uppercase() { 1u8 } else { 0u8 };
    a.nfd()
        .map(case_rank)
        .cmp(b.nfd().map(case_rank))
}

/// Compare two strings with accent- and case-insensitive primary ordering
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_cmp(a, b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_by(|a, b| locale_compare(a, b));
        words
    }

    #[test]
    fn test_plain_ascii_order() {
        assert_eq!(
            sorted(vec!["pikachu", "bulbasaur", "charmander"]),
            vec!["bulbasaur", "charmander", "pikachu"]
        );
    }

    #[test]
    fn test_case_does_not_dominate() {
        assert_eq!(sorted(vec!["beta", "Alpha", "alpha"]), vec!["alpha", "Alpha", "beta"]);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(
            sorted(vec!["zubat", "éclair", "eevee", "abra"]),
            vec!["abra", "éclair", "eevee", "zubat"]
        );
    }

    #[test]
    fn test_accent_breaks_tie_after_base() {
        assert_eq!(locale_compare("flabebe", "flabébé"), Ordering::Less);
        assert_eq!(locale_compare("flabébé", "flabebe"), Ordering::Greater);
    }

    #[test]
    fn test_precomposed_and_decomposed_are_equivalent_at_primary_level() {
        let precomposed = "fla\u{00E9}b\u{00E9}b\u{00E9}";
        let decomposed = "flae\u{0301}be\u{0301}be\u{0301}";
        assert_eq!(primary_key(precomposed), primary_key(decomposed));
        assert_eq!(secondary_key(precomposed), secondary_key(decomposed));
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_compare("mew", "mew"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("mew", "mewtwo"), Ordering::Less);
    }
}
