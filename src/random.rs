//! Secure random source - uniform index draws and shuffling.

use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{MeowError, Result};

/// Capability for drawing randomness. Production code uses [`OsRandom`];
/// tests substitute deterministic sources.
pub trait RandomSource {
    /// Uniformly distributed index in `[0, n)`.
    fn index(&mut self, n: usize) -> Result<usize>;

    /// Fisher-Yates shuffle driven by [`RandomSource::index`].
    fn shuffle<T>(&mut self, items: &mut [T]) -> Result<()> {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1)?;
            items.swap(i, j);
        }
        Ok(())
    }
}

/// Draws from the operating system CSPRNG. Stateless, so every call is isolated.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    fn next_u64(&self) -> Result<u64> {
        let mut buf = [0u8; 8];
        OsRng.try_fill_bytes(&mut buf).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("OS entropy source failed: {}", e);
            MeowError::EntropyUnavailable(e.to_string())
        })?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl RandomSource for OsRandom {
    fn index(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(MeowError::PolicyViolation(
                "cannot draw from an empty range".to_string(),
            ));
        }
        let n = n as u64;
        // 2^64 mod n; values below it would bias the low residues
        let threshold = n.wrapping_neg() % n;
        loop {
            let v = self.next_u64()?;
            if v >= threshold {
                return Ok((v % n) as usize);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_os_index_stays_in_range() {
        let mut rng = OsRandom;
        for n in [1usize, 2, 3, 10, 62, 85, 1000] {
            for _ in 0..200 {
                let i = rng.index(n).unwrap();
                assert!(i < n, "index {} out of range for n={}", i, n);
            }
        }
    }

    #[test]
    fn test_os_index_covers_small_range() {
        let mut rng = OsRandom;
        let mut seen = [false; 10];
        for _ in 0..2000 {
            seen[rng.index(10).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "some digits never drawn: {:?}", seen);
    }

    #[test]
    fn test_os_index_rejects_empty_range() {
        let mut rng = OsRandom;
        assert!(matches!(rng.index(0), Err(MeowError::PolicyViolation(_))));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = OsRandom;
        let mut items: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_handles_trivial_slices() {
        let mut rng = FailingRandom;
        let mut empty: [u8; 0] = [];
        let mut single = [7u8];
        // no draws needed, so even a broken source succeeds
        assert!(rng.shuffle(&mut empty).is_ok());
        assert!(rng.shuffle(&mut single).is_ok());
    }

    #[test]
    fn test_shuffle_propagates_entropy_failure() {
        let mut rng = FailingRandom;
        let mut items = [1, 2, 3];
        assert!(matches!(
            rng.shuffle(&mut items),
            Err(MeowError::EntropyUnavailable(_))
        ));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let draws = |seed| {
            let mut rng = SeededRandom::new(seed);
            (0..20).map(|_| rng.index(97).unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }
}
