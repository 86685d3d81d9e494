//! Candidate generator - builds independent passwords that satisfy the policy.

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroize;

use crate::error::{MeowError, Result};
use crate::policy::CharacterPolicy;
use crate::random::RandomSource;

/// A freshly generated password and its 1-based position in the set.
#[derive(Debug)]
pub struct Candidate {
    index: usize,
    password: SecretString,
}

impl Candidate {
    pub fn new(index: usize, password: SecretString) -> Self {
        Self { index, password }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

pub struct CandidateGenerator<'p, R> {
    policy: &'p CharacterPolicy,
    rng: R,
}

impl<'p, R: RandomSource> CandidateGenerator<'p, R> {
    pub fn new(policy: &'p CharacterPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    /// Generates the full candidate set.
    ///
    /// Either every candidate is produced or an error is returned; there is no
    /// partial set and no retry.
    pub fn generate(&mut self) -> Result<Vec<Candidate>> {
        (1..=self.policy.candidates())
            .map(|index| self.generate_one(index))
            .collect()
    }

    pub fn generate_one(&mut self, index: usize) -> Result<Candidate> {
        let length = self.target_length()?;
        self.generate_with_length(index, length)
    }

    /// Generates one password of exactly `length` characters.
    ///
    /// # Errors
    /// - `PolicyViolation` if `length` is outside the policy range or cannot
    ///   hold the class minimums
    /// - `EntropyUnavailable` if the random source fails
    pub fn generate_with_length(&mut self, index: usize, length: usize) -> Result<Candidate> {
        let required = self.policy.required_total();
        if required > length {
            return Err(MeowError::PolicyViolation(format!(
                "class minimums need {} characters but target length is {}",
                required, length
            )));
        }
        if length < self.policy.min_length() || length > self.policy.max_length() {
            return Err(MeowError::PolicyViolation(format!(
                "target length {} outside {}..={}",
                length,
                self.policy.min_length(),
                self.policy.max_length()
            )));
        }

        let mut chars: Vec<char> = Vec::with_capacity(length);
        for class in self.policy.classes() {
            for _ in 0..class.min_count() {
                chars.push(self.pick(class.alphabet())?);
            }
        }
        let union = self.policy.union();
        while chars.len() < length {
            chars.push(self.pick(union)?);
        }
        self.rng.shuffle(&mut chars)?;

        let mut password: String = chars.iter().collect();
        chars.zeroize();

        if let Err(e) = self.policy.check(&password) {
            password.zeroize();
            return Err(e);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("generated candidate {} with {} characters", index, length);

        Ok(Candidate::new(index, SecretString::new(password.into())))
    }

    fn pick(&mut self, alphabet: &[char]) -> Result<char> {
        let i = self.rng.index(alphabet.len())?;
        Ok(alphabet[i])
    }

    fn target_length(&mut self) -> Result<usize> {
        let lower = self.policy.min_length().max(self.policy.required_total());
        let upper = self.policy.max_length();
        if lower > upper {
            return Err(MeowError::PolicyViolation(format!(
                "no length in {}..={} fits the class minimums",
                self.policy.min_length(),
                upper
            )));
        }
        if let Some(fixed) = self.policy.fixed_length() {
            return Ok(fixed);
        }
        Ok(lower + self.rng.index(upper - lower + 1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::ClassKind;
    use crate::random::testing::{FailingRandom, SeededRandom, ZeroRandom};
    use crate::random::OsRandom;

    fn count_in(policy: &CharacterPolicy, kind: ClassKind, pwd: &str) -> usize {
        let class = policy.classes().iter().find(|c| c.kind() == kind).unwrap();
        pwd.chars().filter(|&c| class.contains(c)).count()
    }

    #[test]
    fn test_generate_produces_configured_count_with_contiguous_indices() {
        let policy = CharacterPolicy::default();
        let set = CandidateGenerator::new(&policy, OsRandom).generate().unwrap();
        assert_eq!(set.len(), 5);
        let indices: Vec<usize> = set.iter().map(Candidate::index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_candidate_meets_minimums() {
        let policy = CharacterPolicy::builder()
            .min_digits(4)
            .min_symbols(3)
            .candidates(50)
            .build()
            .unwrap();
        let mut generator = CandidateGenerator::new(&policy, SeededRandom::new(7));
        for candidate in generator.generate().unwrap() {
            let pwd = candidate.password().expose_secret();
            assert!(count_in(&policy, ClassKind::Letters, pwd) >= 1, "{}", pwd);
            assert!(count_in(&policy, ClassKind::Digits, pwd) >= 4, "{}", pwd);
            assert!(count_in(&policy, ClassKind::Symbols, pwd) >= 3, "{}", pwd);
            assert!((15..=25).contains(&candidate.len()));
        }
    }

    #[test]
    fn test_lengths_span_the_range() {
        let policy = CharacterPolicy::builder()
            .length_range(15, 17)
            .candidates(64)
            .build()
            .unwrap();
        let mut generator = CandidateGenerator::new(&policy, SeededRandom::new(99));
        let lengths: std::collections::HashSet<usize> =
            generator.generate().unwrap().iter().map(Candidate::len).collect();
        assert_eq!(lengths, [15, 16, 17].into_iter().collect());
    }

    #[test]
    fn test_fixed_length_policy_pins_every_candidate() {
        let policy = CharacterPolicy::builder().length_range(18, 18).build().unwrap();
        let set = CandidateGenerator::new(&policy, OsRandom).generate().unwrap();
        assert!(set.iter().all(|c| c.len() == 18));
    }

    #[test]
    fn test_minimums_raise_the_lower_length_bound() {
        let policy = CharacterPolicy::builder()
            .min_digits(8)
            .min_symbols(8)
            .length_range(4, 20)
            .candidates(30)
            .build()
            .unwrap();
        let set = CandidateGenerator::new(&policy, SeededRandom::new(3))
            .generate()
            .unwrap();
        assert!(set.iter().all(|c| c.len() >= 17));
    }

    #[test]
    fn test_zero_source_output_is_deterministic() {
        let policy = CharacterPolicy::default();
        let candidate = CandidateGenerator::new(&policy, ZeroRandom)
            .generate_one(1)
            .unwrap();
        // minimums first, then filler, then a left rotation from the zero shuffle
        assert_eq!(candidate.password().expose_secret(), "000!!aaaaaaaaaa");
    }

    #[test]
    fn test_generate_with_length_rejects_too_short_target() {
        let policy = CharacterPolicy::builder().length_range(4, 10).build().unwrap();
        let result = CandidateGenerator::new(&policy, OsRandom).generate_with_length(1, 5);
        assert!(matches!(result, Err(MeowError::PolicyViolation(ref m)) if m.contains("minimums")));
    }

    #[test]
    fn test_generate_with_length_rejects_out_of_range_target() {
        let policy = CharacterPolicy::default();
        let result = CandidateGenerator::new(&policy, OsRandom).generate_with_length(1, 40);
        assert!(matches!(result, Err(MeowError::PolicyViolation(_))));
    }

    #[test]
    fn test_entropy_failure_aborts_whole_set() {
        let policy = CharacterPolicy::default();
        let result = CandidateGenerator::new(&policy, FailingRandom).generate();
        assert!(matches!(result, Err(MeowError::EntropyUnavailable(_))));
    }
}
