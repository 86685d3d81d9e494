//! Meow Password - secure password candidate generation and selection
//!
//! One run generates a small set of independent passwords from a
//! [`CharacterPolicy`], scores each of them, selects one under a length cap and
//! renders the whole set as labeled text.
//!
//! ```text
//! policy + random source -> generator -> scorer -> selector -> presenter
//! ```
//!
//! # Features
//!
//! - `tracing` (default): logging via the tracing crate; the binary filters it
//!   with `MEOWPASS_LOG` (default `warn`) and writes to stderr
//!
//! # Environment Variables
//!
//! Every flag has a `MEOWPASS_*` fallback, e.g. `MEOWPASS_MAX_LENGTH` or
//! `MEOWPASS_BLACKLIST_PATH`. See [`Config`].
//!
//! # Example
//!
//! ```rust,no_run
//! use meowpass::{CandidateGenerator, CandidateScorer, CharacterPolicy, OsRandom, Selector};
//! use secrecy::ExposeSecret;
//!
//! let policy = CharacterPolicy::default();
//! let candidates = CandidateGenerator::new(&policy, OsRandom).generate()?;
//! let scored = CandidateScorer::new(&policy).score_all(candidates);
//! let selection = Selector::new(20).select(&scored)?;
//!
//! println!("{}", selection.candidate().candidate().password().expose_secret());
//! # Ok::<(), meowpass::MeowError>(())
//! ```

use std::io::Write;

use zeroize::Zeroize;

pub mod analysis;
mod blacklist;
mod config;
mod error;
mod generator;
mod policy;
mod presenter;
mod random;
mod scorer;
mod selector;

pub use blacklist::{Blacklist, BlacklistError};
pub use config::{Config, Strategy};
pub use error::{MeowError, Result, RunError};
pub use generator::{Candidate, CandidateGenerator};
pub use policy::{CharClass, CharacterPolicy, ClassKind, PolicyBuilder};
pub use presenter::Presenter;
pub use random::{OsRandom, RandomSource};
pub use scorer::{Attributes, CandidateScorer, ScoredCandidate};
pub use selector::{HighestEntropy, HighestMeowScore, SelectionResult, SelectionStrategy, Selector};

/// Runs one full invocation and writes the report to `out`.
///
/// The report is rendered in memory and handed to `out` in a single write, so
/// nothing is written unless generation, scoring and selection all succeed.
pub fn run<R: RandomSource, W: Write>(
    config: &Config,
    rng: R,
    out: &mut W,
) -> std::result::Result<(), RunError> {
    let policy = config.policy()?;
    let blacklist = config
        .blacklist
        .as_deref()
        .map(Blacklist::from_path)
        .transpose()?;

    let candidates = CandidateGenerator::new(&policy, rng).generate()?;
    let mut scorer = CandidateScorer::new(&policy);
    if let Some(list) = &blacklist {
        scorer = scorer.with_blacklist(list);
    }
    let scored = scorer.score_all(candidates);

    let bound = config.selection_bound();
    let selection = match config.strategy {
        Strategy::Entropy => Selector::new(bound).select(&scored)?,
        Strategy::Meow => Selector::with_strategy(HighestMeowScore, bound).select(&scored)?,
    };

    let mut presenter = Presenter::new(&policy);
    if config.no_banner {
        presenter = presenter.without_banner();
    }
    let mut report = Vec::new();
    presenter.render(&mut report, &scored, &selection)?;
    let written = out.write_all(&report).and_then(|()| out.flush());
    report.zeroize();
    written?;
    Ok(())
}
