//! Deterministic random number generation for gem draws.
//!
//! The same seed produces an identical board and identical cascades,
//! which keeps tests and replays reproducible. State capture is O(1)
//! regardless of how many values have been drawn, so a session snapshot
//! can include the RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG for the board simulation.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct BoardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BoardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BoardRngState {
        BoardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BoardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for session snapshots.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = BoardRng::new(42);
        let mut rng2 = BoardRng::new(42);
        let items = [1, 2, 3, 4, 5, 6, 7, 8];

        for _ in 0..100 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BoardRng::new(1);
        let mut rng2 = BoardRng::new(2);
        let items: Vec<u32> = (0..1000).collect();

        let seq1: Vec<_> = (0..10).map(|_| *rng1.choose(&items).unwrap()).collect();
        let seq2: Vec<_> = (0..10).map(|_| *rng2.choose(&items).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = BoardRng::new(42);
        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = BoardRng::new(42);
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(0.0));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = BoardRng::new(42);
        let items: Vec<u32> = (0..1000).collect();

        // Advance the RNG
        for _ in 0..100 {
            rng.choose(&items);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| *rng.choose(&items).unwrap()).collect();

        let mut restored = BoardRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| *restored.choose(&items).unwrap()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = BoardRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BoardRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
