//! Seedable random number generation for shuffles and computer choices.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Fair shuffles**: Fisher–Yates via `SliceRandom`, every permutation
//!   equally likely
//! - **Forkable**: Independent streams for the deck and the computer player,
//!   so the opponent's choices never perturb future deals
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut deck_rng = GameRng::new(42);
//! let mut computer_rng = deck_rng.fork();
//! let _ = computer_rng.gen_bool(0.5);
//!
//! // The computer's draws leave the next deal unchanged.
//! let mut again = GameRng::new(42);
//! let _ = again.fork();
//!
//! let mut deal: Vec<u8> = (0..20).collect();
//! let mut replay = deal.clone();
//! deck_rng.shuffle(&mut deal);
//! again.shuffle(&mut replay);
//! assert_eq!(deal, replay);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seeded when a seed is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream for a computer seat, seeded from this one.
    ///
    /// The n-th fork of a given seed is always the same stream, and forking
    /// draws nothing from `self`, so later deals are unaffected.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        Self::new(fork_seed(self.seed, self.fork_counter))
    }

    /// Roll a retention check. Probabilities outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Deal order for a deck; every permutation is equally likely.
    pub fn shuffle<T>(&mut self, deck: &mut [T]) {
        deck.shuffle(&mut self.inner);
    }

    /// One candidate card, uniformly, or `None` when there are none.
    #[must_use]
    pub fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        candidates.choose(&mut self.inner)
    }
}

/// Golden-ratio stride keeps successive fork seeds far apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

fn fork_seed(seed: u64, fork: u64) -> u64 {
    seed.wrapping_add(fork.wrapping_mul(FORK_STRIDE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(rng: &mut GameRng) -> Vec<u32> {
        let mut deck: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut deck);
        deck
    }

    #[test]
    fn test_same_seed_same_deals() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(deal(&mut rng1), deal(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(deal(&mut GameRng::new(1)), deal(&mut GameRng::new(2)));
    }

    #[test]
    fn test_fork_leaves_deals_alone() {
        let mut forked = GameRng::new(9);
        let mut computer = forked.fork();
        for _ in 0..50 {
            computer.gen_bool(0.5);
        }
        let mut plain = GameRng::new(9);
        assert_eq!(deal(&mut forked), deal(&mut plain));
    }

    #[test]
    fn test_fork_is_deterministic_and_independent() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), rng1.seed());

        // Second fork differs from the first
        assert_ne!(rng1.fork().seed(), forked1.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
        // Out-of-range probabilities are clamped instead of panicking
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }
}
