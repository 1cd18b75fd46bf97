//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Every randomized operation in this crate takes its RNG as a parameter,
/// so a run is reproducible whenever the RNG comes from here.
///
/// ```
/// use genetix::random::create_rng;
/// use rand::Rng;
///
/// let a: u32 = create_rng(7).random();
/// let b: u32 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
