//! Geohash token stream normalization.
//!
//! Users paste noisy, mixed-case, inconsistently delimited geohash lists.
//! This module filters such input down to an ordered, deduplicated set of
//! valid geohashes. Invalid tokens are dropped silently; the input is
//! best-effort text, not a strict format.

use std::collections::HashSet;

use crate::geohash::{alphabet_index, MAX_PRECISION};

/// Normalizes raw text into an ordered, deduplicated list of geohashes.
///
/// Lowercases the input, splits on commas, semicolons and any whitespace,
/// keeps tokens that consist only of alphabet characters with length 1-12,
/// and deduplicates while preserving first-seen order.
///
/// Idempotent: normalizing the joined output yields the same list.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for token in raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
        let token = token.trim().to_lowercase();
        if token.is_empty() || token.len() > MAX_PRECISION as usize {
            continue;
        }
        if !token.chars().all(|c| alphabet_index(c).is_some()) {
            continue;
        }
        if seen.insert(token.clone()) {
            out.push(token);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_dedupes() {
        // Uppercase variant and lowercase duplicate collapse to one entry;
        // 'a1b2' contains 'a' which is outside the alphabet.
        let result = normalize("QQGUYU7, qqguyur ;; a1b2");
        assert_eq!(result, vec!["qqguyu7", "qqguyur"]);
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let result = normalize("zzz, qqq, zzz, mmm, qqq");
        assert_eq!(result, vec!["zzz", "qqq", "mmm"]);
    }

    #[test]
    fn test_splits_on_newlines_and_semicolons() {
        let result = normalize("u4pru\nu4prv;u4prw\tu4prx");
        assert_eq!(result, vec!["u4pru", "u4prv", "u4prw", "u4prx"]);
    }

    #[test]
    fn test_drops_overlong_tokens() {
        let result = normalize("0123456789bc, 0123456789bcd");
        assert_eq!(result, vec!["0123456789bc"]);
    }

    #[test]
    fn test_drops_invalid_characters() {
        let result = normalize("qqg!uy, qq-uy, qquy");
        assert_eq!(result, vec!["qquy"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize(" ,;, \n ").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let raw = "QQGUYU7, qqguyur ;; a1b2 u4pru\nqqguyu7";
        let once = normalize(raw);
        let twice = normalize(&once.join(","));
        assert_eq!(once, twice);
    }
}
