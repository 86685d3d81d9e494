//! Character policy - the classes a password draws from and the minimums it must meet.

use std::collections::HashSet;

use crate::error::{MeowError, Result};

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_=+[]{;:.<>?";

pub const DEFAULT_MIN_LETTERS: usize = 1;
pub const DEFAULT_MIN_DIGITS: usize = 3;
pub const DEFAULT_MIN_SYMBOLS: usize = 2;
pub const DEFAULT_MIN_LENGTH: usize = 15;
pub const DEFAULT_MAX_LENGTH: usize = 25;
pub const DEFAULT_CANDIDATES: usize = 5;

/// Hard ceiling on any generated password.
pub const LENGTH_CEILING: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Letters,
    Digits,
    Symbols,
}

impl ClassKind {
    pub fn label(self) -> &'static str {
        match self {
            ClassKind::Letters => "Letters",
            ClassKind::Digits => "Digits",
            ClassKind::Symbols => "Symbols",
        }
    }
}

/// One character class with its alphabet and required occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    kind: ClassKind,
    alphabet: Vec<char>,
    min_count: usize,
}

impl CharClass {
    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn min_count(&self) -> usize {
        self.min_count
    }

    pub fn contains(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }
}

/// Immutable generation policy. Only constructed through [`PolicyBuilder::build`],
/// so every instance has already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPolicy {
    classes: Vec<CharClass>,
    union: Vec<char>,
    min_length: usize,
    max_length: usize,
    candidates: usize,
}

impl CharacterPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// All class alphabets concatenated in class order.
    pub fn union(&self) -> &[char] {
        &self.union
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn fixed_length(&self) -> Option<usize> {
        (self.min_length == self.max_length).then_some(self.min_length)
    }

    pub fn required_total(&self) -> usize {
        self.classes.iter().map(|c| c.min_count).sum()
    }

    pub fn min_count(&self, kind: ClassKind) -> usize {
        self.classes
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.min_count)
            .unwrap_or(0)
    }

    pub fn class_of(&self, c: char) -> Option<&CharClass> {
        self.classes.iter().find(|class| class.contains(c))
    }

    /// Checks a finished password against every class minimum and the length range.
    pub fn check(&self, password: &str) -> Result<()> {
        let len = password.chars().count();
        if len < self.min_length || len > self.max_length {
            return Err(MeowError::PolicyViolation(format!(
                "password length {} outside {}..={}",
                len, self.min_length, self.max_length
            )));
        }
        for class in &self.classes {
            let found = password.chars().filter(|&c| class.contains(c)).count();
            if found < class.min_count {
                return Err(MeowError::PolicyViolation(format!(
                    "{} requires at least {} characters, found {}",
                    class.kind.label().to_lowercase(),
                    class.min_count,
                    found
                )));
            }
        }
        Ok(())
    }
}

impl Default for CharacterPolicy {
    fn default() -> Self {
        let classes = vec![
            CharClass {
                kind: ClassKind::Letters,
                alphabet: LETTERS.chars().collect(),
                min_count: DEFAULT_MIN_LETTERS,
            },
            CharClass {
                kind: ClassKind::Digits,
                alphabet: DIGITS.chars().collect(),
                min_count: DEFAULT_MIN_DIGITS,
            },
            CharClass {
                kind: ClassKind::Symbols,
                alphabet: DEFAULT_SYMBOLS.chars().collect(),
                min_count: DEFAULT_MIN_SYMBOLS,
            },
        ];
        let union = classes.iter().flat_map(|c| c.alphabet.iter().copied()).collect();
        Self {
            classes,
            union,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            candidates: DEFAULT_CANDIDATES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    symbols: String,
    min_letters: usize,
    min_digits: usize,
    min_symbols: usize,
    min_length: usize,
    max_length: usize,
    candidates: usize,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_string(),
            min_letters: DEFAULT_MIN_LETTERS,
            min_digits: DEFAULT_MIN_DIGITS,
            min_symbols: DEFAULT_MIN_SYMBOLS,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            candidates: DEFAULT_CANDIDATES,
        }
    }
}

impl PolicyBuilder {
    pub fn symbols(mut self, alphabet: impl Into<String>) -> Self {
        self.symbols = alphabet.into();
        self
    }

    pub fn min_letters(mut self, count: usize) -> Self {
        self.min_letters = count;
        self
    }

    pub fn min_digits(mut self, count: usize) -> Self {
        self.min_digits = count;
        self
    }

    pub fn min_symbols(mut self, count: usize) -> Self {
        self.min_symbols = count;
        self
    }

    pub fn length_range(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn candidates(mut self, count: usize) -> Self {
        self.candidates = count;
        self
    }

    /// Validates the configuration and freezes it into a [`CharacterPolicy`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if:
    /// - a class alphabet is empty or repeats a character
    /// - two class alphabets overlap
    /// - the length range is empty, zero, or above [`LENGTH_CEILING`]
    /// - the class minimums cannot fit into the maximum length
    /// - zero candidates are requested
    pub fn build(self) -> Result<CharacterPolicy> {
        let definitions = [
            (ClassKind::Letters, LETTERS.to_string(), self.min_letters),
            (ClassKind::Digits, DIGITS.to_string(), self.min_digits),
            (ClassKind::Symbols, self.symbols, self.min_symbols),
        ];

        let mut seen: HashSet<char> = HashSet::new();
        let mut classes = Vec::with_capacity(definitions.len());
        for (kind, alphabet, min_count) in definitions {
            let label = kind.label().to_lowercase();
            if alphabet.is_empty() {
                return Err(MeowError::InvalidPolicy(format!("{} alphabet is empty", label)));
            }
            let chars: Vec<char> = alphabet.chars().collect();
            for &c in &chars {
                if c.is_whitespace() || c.is_control() {
                    return Err(MeowError::InvalidPolicy(format!(
                        "{} alphabet contains an unprintable character",
                        label
                    )));
                }
                if !seen.insert(c) {
                    return Err(MeowError::InvalidPolicy(format!(
                        "character {:?} appears more than once across the {} alphabet",
                        c, label
                    )));
                }
            }
            classes.push(CharClass {
                kind,
                alphabet: chars,
                min_count,
            });
        }

        if self.min_length == 0 {
            return Err(MeowError::InvalidPolicy(
                "minimum length must be at least 1".to_string(),
            ));
        }
        if self.min_length > self.max_length {
            return Err(MeowError::InvalidPolicy(format!(
                "minimum length {} exceeds maximum length {}",
                self.min_length, self.max_length
            )));
        }
        if self.max_length > LENGTH_CEILING {
            return Err(MeowError::InvalidPolicy(format!(
                "maximum length {} exceeds the ceiling of {}",
                self.max_length, LENGTH_CEILING
            )));
        }
        let required: usize = classes.iter().map(|c| c.min_count).sum();
        if required > self.max_length {
            return Err(MeowError::InvalidPolicy(format!(
                "class minimums need {} characters but maximum length is {}",
                required, self.max_length
            )));
        }
        if self.candidates == 0 {
            return Err(MeowError::InvalidPolicy(
                "at least one candidate is required".to_string(),
            ));
        }

        let union = classes.iter().flat_map(|c| c.alphabet.iter().copied()).collect();
        Ok(CharacterPolicy {
            classes,
            union,
            min_length: self.min_length,
            max_length: self.max_length,
            candidates: self.candidates,
        })
    }
}
