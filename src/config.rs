//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::policy::{
    CharacterPolicy, DEFAULT_CANDIDATES, DEFAULT_MAX_LENGTH, DEFAULT_MIN_DIGITS,
    DEFAULT_MIN_LENGTH, DEFAULT_MIN_LETTERS, DEFAULT_MIN_SYMBOLS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Highest entropy estimate
    #[default]
    Entropy,
    /// Highest composite meow score
    Meow,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "meowpass",
    version,
    about = "Meow Password - generates several secure candidates and picks the best one"
)]
pub struct Config {
    #[arg(
        long,
        env = "MEOWPASS_NUMBERS",
        default_value_t = DEFAULT_MIN_DIGITS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=10),
        help = "Minimum digits per password (1-10)"
    )]
    pub numbers: usize,

    #[arg(
        long,
        env = "MEOWPASS_SYMBOLS",
        default_value_t = DEFAULT_MIN_SYMBOLS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=10),
        help = "Minimum symbols per password (1-10)"
    )]
    pub symbols: usize,

    #[arg(
        long,
        env = "MEOWPASS_LETTERS",
        default_value_t = DEFAULT_MIN_LETTERS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=50),
        help = "Minimum letters per password (1-50)"
    )]
    pub letters: usize,

    #[arg(long, env = "MEOWPASS_MIN_LENGTH", default_value_t = DEFAULT_MIN_LENGTH, help = "Shortest generated password")]
    pub min_length: usize,

    #[arg(
        long,
        env = "MEOWPASS_MAX_LENGTH",
        default_value_t = DEFAULT_MAX_LENGTH,
        help = "Longest generated password; also the default cap on the selected one"
    )]
    pub max_length: usize,

    #[arg(long, env = "MEOWPASS_SELECT_MAX", help = "Stricter cap on the selected password length")]
    pub select_max: Option<usize>,

    #[arg(
        long,
        env = "MEOWPASS_COUNT",
        default_value_t = DEFAULT_CANDIDATES,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=64),
        help = "Number of candidates (1-64)"
    )]
    pub count: usize,

    #[arg(long, env = "MEOWPASS_SYMBOL_SET", help = "Custom symbol alphabet")]
    pub symbol_set: Option<String>,

    #[arg(long, env = "MEOWPASS_BLACKLIST_PATH", help = "File of common passwords, one per line")]
    pub blacklist: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Strategy::Entropy, help = "How the final password is chosen")]
    pub strategy: Strategy,

    #[arg(long, default_value_t = false, help = "Skip the title and config lines")]
    pub no_banner: bool,
}

impl Config {
    /// Builds and validates the generation policy.
    pub fn policy(&self) -> Result<CharacterPolicy> {
        let mut builder = CharacterPolicy::builder()
            .min_letters(self.letters)
            .min_digits(self.numbers)
            .min_symbols(self.symbols)
            .length_range(self.min_length, self.max_length)
            .candidates(self.count);
        if let Some(symbols) = &self.symbol_set {
            builder = builder.symbols(symbols.clone());
        }
        builder.build()
    }

    /// Cap applied by the selector.
    pub fn selection_bound(&self) -> usize {
        self.select_max.unwrap_or(self.max_length)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_MIN_DIGITS,
            symbols: DEFAULT_MIN_SYMBOLS,
            letters: DEFAULT_MIN_LETTERS,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            select_max: None,
            count: DEFAULT_CANDIDATES,
            symbol_set: None,
            blacklist: None,
            strategy: Strategy::Entropy,
            no_banner: false,
        }
    }
}
