//! Character variety - class coverage against the policy and category diversity.

use std::collections::HashSet;

use crate::policy::{CharClass, CharacterPolicy, ClassKind};

use super::SectionResult;

/// Which policy classes occur at least once in a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage(Vec<(ClassKind, bool)>);

impl Coverage {
    pub fn iter(&self) -> impl Iterator<Item = (ClassKind, bool)> + '_ {
        self.0.iter().copied()
    }

    pub fn has(&self, kind: ClassKind) -> bool {
        self.0.iter().any(|&(k, present)| k == kind && present)
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&(_, present)| present)
    }
}

pub fn class_coverage(policy: &CharacterPolicy, password: &str) -> Coverage {
    let present: HashSet<ClassKind> = password
        .chars()
        .filter_map(|c| policy.class_of(c))
        .map(CharClass::kind)
        .collect();
    Coverage(
        policy
            .classes()
            .iter()
            .map(|class| (class.kind(), present.contains(&class.kind())))
            .collect(),
    )
}

/// Fraction of the four categories present: lowercase, uppercase, digits, other.
pub fn character_diversity(password: &str) -> f64 {
    let (lower, upper, digit, other) = categories(password);
    [lower, upper, digit, other].iter().filter(|&&b| b).count() as f64 / 4.0
}

/// Returns a reason listing every missing category.
pub fn character_variety_section(password: &str) -> SectionResult {
    let (lower, upper, digit, other) = categories(password);
    let missing: Vec<&str> = [
        (upper, "uppercase"),
        (lower, "lowercase"),
        (digit, "numbers"),
        (other, "special characters"),
    ]
    .into_iter()
    .filter_map(|(present, name)| (!present).then_some(name))
    .collect();

    (!missing.is_empty()).then(|| format!("Missing: {}", missing.join(", ")))
}

fn categories(password: &str) -> (bool, bool, bool, bool) {
    let lower = password.chars().any(|c| c.is_lowercase());
    let upper = password.chars().any(|c| c.is_uppercase());
    let digit = password.chars().any(|c| c.is_ascii_digit());
    let other = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());
    (lower, upper, digit, other)
}
