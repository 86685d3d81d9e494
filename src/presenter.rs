//! Presenter - the only component that writes the report.
//!
//! Layout: an optional banner, one block per candidate in generation order
//! (`Candidate <n>: <password>` followed by `Label: value` lines), then a single
//! `Password: <selected>` line after every block.

use std::io::{self, Write};

use secrecy::ExposeSecret;

use crate::policy::{CharacterPolicy, ClassKind};
use crate::scorer::{MEOW_SCORE_MAX, ScoredCandidate};
use crate::selector::SelectionResult;

const TITLE: &str = "Meow Password - Cat Name Based Secure Password Generator";

pub struct Presenter<'p> {
    policy: &'p CharacterPolicy,
    banner: bool,
}

impl<'p> Presenter<'p> {
    pub fn new(policy: &'p CharacterPolicy) -> Self {
        Self {
            policy,
            banner: true,
        }
    }

    pub fn without_banner(mut self) -> Self {
        self.banner = false;
        self
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        candidates: &[ScoredCandidate],
        selection: &SelectionResult<'_>,
    ) -> io::Result<()> {
        if self.banner {
            self.render_banner(out, candidates.len(), selection.max_length())?;
        }
        for candidate in candidates {
            render_candidate(out, candidate)?;
        }
        self.render_selection(out, selection)
    }

    fn render_banner<W: Write>(&self, out: &mut W, count: usize, cap: usize) -> io::Result<()> {
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "{}", "=".repeat(TITLE.len()))?;
        writeln!(out, "Generating {} secure password meow candidates...", count)?;
        writeln!(
            out,
            "Config: {} numbers, {} symbols, length {}-{}, max meow length {}",
            self.policy.min_count(ClassKind::Digits),
            self.policy.min_count(ClassKind::Symbols),
            self.policy.min_length(),
            self.policy.max_length(),
            cap
        )?;
        writeln!(out)
    }

    fn render_selection<W: Write>(
        &self,
        out: &mut W,
        selection: &SelectionResult<'_>,
    ) -> io::Result<()> {
        let chosen = selection.candidate();
        writeln!(out, "MOST SECURE PASSWORD MEOW SELECTED:")?;
        writeln!(
            out,
            "Password: {}",
            chosen.candidate().password().expose_secret()
        )?;
        writeln!(out, "Max Length: {}", selection.max_length())?;
        writeln!(
            out,
            "Final Meow Score: {:.2}/{:.1}",
            chosen.attributes().meow_score,
            MEOW_SCORE_MAX
        )
    }
}

fn render_candidate<W: Write>(out: &mut W, scored: &ScoredCandidate) -> io::Result<()> {
    writeln!(
        out,
        "Candidate {}: {}",
        scored.index(),
        scored.candidate().password().expose_secret()
    )?;
    let attributes = scored.attributes();
    for (label, value) in attributes.labeled() {
        writeln!(out, "{}: {}", label, value)?;
    }
    if !attributes.reasons.is_empty() {
        writeln!(out, "Warnings: {}", attributes.reasons.join("; "))?;
    }
    writeln!(out)
}
