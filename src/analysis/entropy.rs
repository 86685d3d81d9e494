//! Entropy metrics.

use std::collections::HashMap;

use crate::policy::CharacterPolicy;

use super::variety::class_coverage;

/// Brute-force entropy estimate in bits: `length * log2(alphabet)`, where the
/// alphabet is every policy class that actually occurs in the password.
pub fn estimated_entropy(policy: &CharacterPolicy, password: &str) -> f64 {
    let coverage = class_coverage(policy, password);
    let alphabet: usize = policy
        .classes()
        .iter()
        .filter(|class| coverage.has(class.kind()))
        .map(|class| class.alphabet().len())
        .sum();
    if alphabet < 2 {
        return 0.0;
    }
    password.chars().count() as f64 * (alphabet as f64).log2()
}

/// Shannon entropy of the observed character distribution, in bits per character.
pub fn shannon_entropy(password: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }
    if len == 0 {
        return 0.0;
    }
    let len = len as f64;
    counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Run-length compression ratio in `[0, 1)`. Each run of one character costs
/// one unit, longer runs cost two; higher means more compressible.
pub fn compression_ratio(password: &str) -> f64 {
    let chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return 0.0;
    }
    let compressed: usize = chars
        .chunk_by(|a, b| a == b)
        .map(|run| if run.len() > 1 { 2 } else { 1 })
        .sum();
    (1.0 - compressed as f64 / chars.len() as f64).max(0.0)
}
