//! Candidate scorer - attaches derived attributes to each generated password.

use secrecy::ExposeSecret;

use crate::analysis::{
    Coverage, character_diversity, class_coverage, compression_ratio, estimated_entropy,
    evaluate_password_strength, pattern_uniqueness, shannon_entropy,
};
use crate::blacklist::Blacklist;
use crate::generator::Candidate;
use crate::policy::CharacterPolicy;

/// Upper bound of the composite meow score.
pub const MEOW_SCORE_MAX: f64 = 10.0;

/// Derived, display-ready facts about one password.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub length: usize,
    pub coverage: Coverage,
    /// `length * log2(alphabet)` in bits.
    pub entropy_bits: f64,
    /// Shannon entropy in bits per character.
    pub shannon: f64,
    pub compression: f64,
    pub uniqueness: f64,
    pub diversity: f64,
    pub strength: String,
    pub strength_score: Option<i64>,
    pub reasons: Vec<String>,
    pub meow_score: f64,
}

impl Attributes {
    /// Label/value pairs in render order.
    pub fn labeled(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Length", self.length.to_string())];
        lines.extend(
            self.coverage
                .iter()
                .map(|(kind, present)| (kind.label(), yes_no(present).to_string())),
        );
        lines.push(("Entropy", format!("{:.2} bits", self.entropy_bits)));
        lines.push(("Ball of Yarn Entropy", format!("{:.3} bits/char", self.shannon)));
        lines.push(("Mashing Resistance", percent(self.compression)));
        lines.push(("Shiny Foil Ball Uniqueness", percent(self.uniqueness)));
        lines.push(("Organic Catnip", percent(self.diversity)));
        let strength = match self.strength_score {
            Some(score) => format!("{} ({}/100)", self.strength, score),
            None => self.strength.clone(),
        };
        lines.push(("Strength", strength));
        lines.push(("Meow Score", format!("{:.2}/{:.1}", self.meow_score, MEOW_SCORE_MAX)));
        lines
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// A candidate after scoring. Immutable from here on.
#[derive(Debug)]
pub struct ScoredCandidate {
    candidate: Candidate,
    attributes: Attributes,
}

impl ScoredCandidate {
    pub fn index(&self) -> usize {
        self.candidate.index()
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Pure scoring against a policy and an optional common-password list; no randomness.
pub struct CandidateScorer<'p> {
    policy: &'p CharacterPolicy,
    blacklist: Option<&'p Blacklist>,
}

impl<'p> CandidateScorer<'p> {
    pub fn new(policy: &'p CharacterPolicy) -> Self {
        Self {
            policy,
            blacklist: None,
        }
    }

    pub fn with_blacklist(mut self, blacklist: &'p Blacklist) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    pub fn score_all(&self, candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
        candidates.into_iter().map(|c| self.score(c)).collect()
    }

    pub fn score(&self, candidate: Candidate) -> ScoredCandidate {
        let attributes = self.attributes(&candidate);
        ScoredCandidate {
            candidate,
            attributes,
        }
    }

    fn attributes(&self, candidate: &Candidate) -> Attributes {
        let pwd = candidate.password().expose_secret();
        let length = pwd.chars().count();
        let shannon = shannon_entropy(pwd);
        let compression = compression_ratio(pwd);
        let uniqueness = pattern_uniqueness(pwd);
        let diversity = character_diversity(pwd);

        let evaluation = evaluate_password_strength(candidate.password(), self.blacklist);
        let strength = format!("{:?}", evaluation.strength());
        let strength_score = evaluation.score.map(|s| s.value() as i64);

        Attributes {
            length,
            coverage: class_coverage(self.policy, pwd),
            entropy_bits: estimated_entropy(self.policy, pwd),
            shannon,
            compression,
            uniqueness,
            diversity,
            strength,
            strength_score,
            reasons: evaluation.reasons,
            meow_score: meow_score(shannon, compression, uniqueness, diversity, length),
        }
    }
}

/// Weighted blend of the individual metrics, capped at [`MEOW_SCORE_MAX`].
pub fn meow_score(
    shannon: f64,
    compression: f64,
    uniqueness: f64,
    diversity: f64,
    length: usize,
) -> f64 {
    let score = shannon * 0.3
        + compression * 0.25
        + uniqueness * 0.2
        + diversity * 0.15
        + (length as f64 / 25.0).min(1.0) * 0.1;
    score.min(MEOW_SCORE_MAX)
}
