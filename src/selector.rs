//! Selector - reduces the scored set to a single password under a length cap.

use crate::error::{MeowError, Result};
use crate::scorer::ScoredCandidate;

/// Ranking used among the candidates that fit the length cap.
pub trait SelectionStrategy {
    /// Ranking key; higher wins.
    fn key(&self, candidate: &ScoredCandidate) -> f64;
}

/// Highest `length * log2(alphabet)` estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighestEntropy;

impl SelectionStrategy for HighestEntropy {
    fn key(&self, candidate: &ScoredCandidate) -> f64 {
        candidate.attributes().entropy_bits
    }
}

/// Highest composite meow score.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighestMeowScore;

impl SelectionStrategy for HighestMeowScore {
    fn key(&self, candidate: &ScoredCandidate) -> f64 {
        candidate.attributes().meow_score
    }
}

/// The chosen candidate and the cap that constrained it.
#[derive(Debug, Clone, Copy)]
pub struct SelectionResult<'a> {
    candidate: &'a ScoredCandidate,
    max_length: usize,
}

impl<'a> SelectionResult<'a> {
    pub fn candidate(&self) -> &'a ScoredCandidate {
        self.candidate
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

pub struct Selector<S = HighestEntropy> {
    strategy: S,
    max_length: usize,
}

impl Selector<HighestEntropy> {
    pub fn new(max_length: usize) -> Self {
        Self::with_strategy(HighestEntropy, max_length)
    }
}

impl<S: SelectionStrategy> Selector<S> {
    pub fn with_strategy(strategy: S, max_length: usize) -> Self {
        Self {
            strategy,
            max_length,
        }
    }

    /// Picks the best candidate no longer than the cap. Ties go to the
    /// earliest-generated candidate.
    ///
    /// # Errors
    /// `NoEligibleCandidate` when every candidate exceeds the cap. The cap is
    /// never relaxed.
    pub fn select<'a>(&self, candidates: &'a [ScoredCandidate]) -> Result<SelectionResult<'a>> {
        let mut best: Option<(&'a ScoredCandidate, f64)> = None;
        for candidate in candidates
            .iter()
            .filter(|c| c.attributes().length <= self.max_length)
        {
            let key = self.strategy.key(candidate);
            match best {
                Some((_, best_key)) if key.total_cmp(&best_key).is_le() => {}
                _ => best = Some((candidate, key)),
            }
        }

        match best {
            Some((candidate, _)) => Ok(SelectionResult {
                candidate,
                max_length: self.max_length,
            }),
            None => {
                let shortest = candidates
                    .iter()
                    .map(|c| c.attributes().length)
                    .min()
                    .unwrap_or(0);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    "no candidate fits max length {} (shortest {})",
                    self.max_length,
                    shortest
                );
                Err(MeowError::NoEligibleCandidate {
                    max_length: self.max_length,
                    shortest,
                })
            }
        }
    }
}
