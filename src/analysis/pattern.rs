//! Pattern analysis - repeated runs, sequences, and substring uniqueness.

use std::collections::HashSet;

use super::SectionResult;

/// Longest substring considered by [`pattern_uniqueness`].
const MAX_SUBSTRING: usize = 4;

/// Flags runs of three identical characters and ascending or descending
/// sequences of four or more code points (e.g. `1234`, `dcba`).
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    let chars: Vec<char> = password.chars().collect();

    if chars.chunk_by(|a, b| a == b).any(|run| run.len() >= 3) {
        return Some("Password contains repetitive patterns".to_string());
    }

    let sequential = chars.windows(4).any(|window| {
        let step = |w: &[char]| w[1] as i64 - w[0] as i64;
        let first = step(&window[..2]);
        first.abs() == 1 && window.windows(2).all(|pair| step(pair) == first)
    });
    if sequential {
        return Some("Password contains sequential patterns".to_string());
    }

    None
}

/// Share of distinct substrings among all substrings of length 2 to 4.
/// A password with no repeated fragments scores 1.0.
pub fn pattern_uniqueness(password: &str) -> f64 {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < 2 {
        return 0.0;
    }

    let mut total = 0usize;
    let mut unique = 0usize;
    for size in 2..=MAX_SUBSTRING.min(chars.len()) {
        let mut seen: HashSet<&[char]> = HashSet::new();
        for window in chars.windows(size) {
            total += 1;
            if seen.insert(window) {
                unique += 1;
            }
        }
    }
    unique as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let reason = pattern_analysis_section("aaaaBBBB1111").unwrap();
        assert!(reason.contains("repetitive"));
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        let reason = pattern_analysis_section("test1234xq").unwrap();
        assert!(reason.contains("sequential"));
    }

    #[test]
    fn test_pattern_section_descending_letters() {
        let reason = pattern_analysis_section("Zq!dcba7").unwrap();
        assert!(reason.contains("sequential"));
    }

    #[test]
    fn test_pattern_section_zigzag_is_not_sequential() {
        assert_eq!(pattern_analysis_section("x1212y"), None);
    }

    #[test]
    fn test_pattern_section_clean_password() {
        assert_eq!(pattern_analysis_section("R4nd#mPa55!Word"), None);
        assert_eq!(pattern_analysis_section("ab"), None);
    }

    #[test]
    fn test_pattern_uniqueness() {
        assert_eq!(pattern_uniqueness(""), 0.0);
        assert_eq!(pattern_uniqueness("a"), 0.0);
        assert_eq!(pattern_uniqueness("abcdef"), 1.0);
        // "aaaa": 3 pairs, 2 triples, 1 quad -> unique 1 + 1 + 1 of 6
        assert!((pattern_uniqueness("aaaa") - 0.5).abs() < 1e-9);
    }
}
