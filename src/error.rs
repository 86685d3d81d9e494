//! Error taxonomy for the generation pipeline.
//!
//! Every variant is fatal for the run: nothing is retried and nothing falls
//! back to weaker randomness or a relaxed bound.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeowError {
    /// Character classes or length range are inconsistent.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
    /// The OS randomness source could not be read.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),
    /// A password could not satisfy the policy minimums.
    #[error("policy violation: {0}")]
    PolicyViolation(String),
    #[error("no eligible candidate: every candidate is longer than {max_length} characters (shortest is {shortest})")]
    NoEligibleCandidate { max_length: usize, shortest: usize },
}

pub type Result<T> = std::result::Result<T, MeowError>;

/// Everything a full invocation can fail with.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Engine(#[from] MeowError),
    #[error(transparent)]
    Blacklist(#[from] crate::blacklist::BlacklistError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
