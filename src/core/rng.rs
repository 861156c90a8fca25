//! Randomness for dealing roles.
//!
//! The role assigner only needs one primitive: a uniformly random
//! permutation of `n` items. It is abstracted behind [`Shuffler`] so
//! callers can inject a seeded RNG or a fixed permutation.
//!
//! ```
//! use werwolf::core::{GameRng, Shuffler};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same permutation.
//! assert_eq!(a.permutation(8), b.permutation(8));
//! ```

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of random permutations.
pub trait Shuffler {
    /// Return a permutation of `0..len`.
    ///
    /// Element `i` of the result is the index of the item moved to
    /// position `i`. Implementations must make every permutation equally
    /// likely unless they are deliberately deterministic.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

/// Seeded RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Shuffler for GameRng {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        self.shuffle(&mut order);
        order
    }
}

/// Always returns the same permutation.
///
/// The assigner rejects the result if its length does not match the role
/// pool, so tests must size it to the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedPermutation(pub Vec<usize>);

impl FixedPermutation {
    /// The identity permutation: the pool is dealt in table order.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }
}

impl Shuffler for FixedPermutation {
    fn permutation(&mut self, _len: usize) -> Vec<usize> {
        self.0.clone()
    }
}

impl<T: Shuffler + ?Sized> Shuffler for Box<T> {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }
}

/// Check that `order` is a permutation of `0..len`.
#[must_use]
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &i in order {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
