//! Strength evaluation - runs every check and folds the results into a 0-100 score.

use std::collections::HashSet;

use pwd_types::{PasswordEvaluation, PasswordScore};
use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;

use super::{
    SectionResult, blacklist_section, character_variety_section, length_section,
    pattern_analysis_section,
};

const REASON_PENALTY: i64 = 10;

/// Evaluates a password and returns its score with the reason for every failed check.
///
/// The blacklist check only runs when a list is given.
pub fn evaluate_password_strength(
    password: &SecretString,
    blacklist: Option<&Blacklist>,
) -> PasswordEvaluation {
    let pwd = password.expose_secret();

    let sections: [(&str, &dyn Fn(&str) -> SectionResult); 4] = [
        ("blacklist", &|p: &str| blacklist_section(p, blacklist)),
        ("length", &length_section),
        ("variety", &character_variety_section),
        ("pattern", &pattern_analysis_section),
    ];

    let reasons: Vec<String> = sections
        .iter()
        .filter_map(|(_name, section)| {
            let reason = section(pwd);
            #[cfg(feature = "tracing")]
            {
                if reason.is_some() {
                    tracing::debug!("strength check '{}' flagged a candidate", _name);
                }
            }
            reason
        })
        .collect();

    let score = (base_score(pwd) - reasons.len() as i64 * REASON_PENALTY).clamp(0, 100);

    PasswordEvaluation {
        score: Some(PasswordScore::new(score)),
        reasons,
    }
}

fn base_score(pwd: &str) -> i64 {
    let len = pwd.chars().count();
    let mut score = 0i64;

    // Length: 0.5 per character, capped at 20
    score += (len as f64 * 0.5).min(20.0) as i64;

    // Variety: 15 per category
    let categories = [
        pwd.chars().any(|c| c.is_uppercase()),
        pwd.chars().any(|c| c.is_lowercase()),
        pwd.chars().any(|c| c.is_ascii_digit()),
        pwd.chars().any(|c| !c.is_alphanumeric()),
    ];
    score += categories.iter().filter(|&&b| b).count() as i64 * 15;

    score += match len {
        17.. => 10,
        13..=16 => 5,
        _ => 0,
    };

    if pwd.chars().filter(|c| !c.is_alphanumeric()).count() >= 2 {
        score += 5;
    }

    let unique = pwd.chars().collect::<HashSet<char>>().len();
    score += match unique {
        16.. => 10,
        12..=15 => 5,
        _ => 0,
    };

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwd_types::PasswordStrength;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_base_score_components() {
        // 8 chars: 4 length, 2 categories, no bonuses
        assert_eq!(base_score("abcdefg1"), 4 + 30);
        // 20 chars, 4 categories, 2 specials, 20 unique
        assert_eq!(base_score("aB3!cD4@eF5#gH6$iJ7%"), 10 + 60 + 10 + 5 + 10);
    }

    #[test]
    fn test_evaluate_weak_short_password() {
        let evaluation = evaluate_password_strength(&secret("abc"), None);

        assert_eq!(evaluation.strength(), PasswordStrength::WEAK);
        assert!(evaluation.score.unwrap().value() < 50);
        assert_eq!(evaluation.reasons.len(), 2);
    }

    #[test]
    fn test_evaluate_generated_style_password_is_strong() {
        let evaluation = evaluate_password_strength(&secret("q7R#w2!Lm9Zx4Pv"), None);

        assert!(evaluation.reasons.is_empty(), "{:?}", evaluation.reasons);
        assert!(matches!(
            evaluation.strength(),
            PasswordStrength::STRONG | PasswordStrength::EPIC | PasswordStrength::GOD
        ));
        assert!(evaluation.score.unwrap().value() >= 70);
    }

    #[test]
    fn test_evaluate_blacklisted_password_loses_points() {
        let blacklist: Blacklist = ["q7r#w2!lm9zx4pv"].into_iter().collect();

        let listed = evaluate_password_strength(&secret("q7R#w2!Lm9Zx4Pv"), Some(&blacklist));
        assert_eq!(listed.reasons, vec!["Password is in the common password list".to_string()]);

        let clean = evaluate_password_strength(&secret("q7R#w2!Lm9Zx4Pv"), None);
        assert_eq!(
            listed.score.unwrap().value() as i64 + REASON_PENALTY,
            clean.score.unwrap().value() as i64
        );
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        for pwd in ["", "a", "aaaa", "MyPass123!", "aB3!cD4@eF5#gH6$iJ7%kL8^"] {
            let score = evaluate_password_strength(&secret(pwd), None).score.unwrap().value();
            assert!((0..=100).contains(&score), "score {} out of bounds for '{}'", score, pwd);
        }
    }
}
