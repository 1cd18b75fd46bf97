//! In-place genetic operators for slice genomes.
//!
//! [`Entity::crossover`](super::Entity::crossover) modifies both operands,
//! so the crossover operators here exchange genes between two mutable
//! slices instead of building new children. They fit any fixed-length
//! genome: byte strings, bit vectors, real-valued vectors.
//!
//! # Crossover Operators
//!
//! - [`prefix_swap_crossover`]: swap a random-length prefix — O(n)
//! - [`two_point_swap_crossover`]: swap a random segment — O(n)
//! - [`uniform_swap_crossover`]: swap each position with probability 0.5 — O(n)
//!
//! # Mutation Operators
//!
//! - [`point_mutation`]: overwrite one random position — O(1)
//! - [`swap_mutation`]: exchange two random positions — O(1)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover by prefix exchange.
///
/// Picks `cut` uniformly in `[0, n)` and swaps `a[0..=cut]` with
/// `b[0..=cut]`. At least one gene always moves.
///
/// # Panics
/// Panics if the genomes have different lengths.
pub fn prefix_swap_crossover<T, R: Rng>(a: &mut [T], b: &mut [T], rng: &mut R) {
    let n = a.len();
    assert_eq!(n, b.len(), "genomes must have equal length");
    if n == 0 {
        return;
    }

    let cut = rng.random_range(0..n);
    a[..=cut].swap_with_slice(&mut b[..=cut]);
}

/// Two-point crossover by segment exchange.
///
/// Picks a random inclusive segment `[start, end]` and swaps it between the
/// two genomes.
///
/// # Panics
/// Panics if the genomes have different lengths.
pub fn two_point_swap_crossover<T, R: Rng>(a: &mut [T], b: &mut [T], rng: &mut R) {
    let n = a.len();
    assert_eq!(n, b.len(), "genomes must have equal length");
    if n == 0 {
        return;
    }

    let (start, end) = random_segment(n, rng);
    a[start..=end].swap_with_slice(&mut b[start..=end]);
}

/// Uniform crossover: each position is exchanged with probability 0.5.
///
/// # Panics
/// Panics if the genomes have different lengths.
pub fn uniform_swap_crossover<T, R: Rng>(a: &mut [T], b: &mut [T], rng: &mut R) {
    assert_eq!(a.len(), b.len(), "genomes must have equal length");

    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        if rng.random_bool(0.5) {
            std::mem::swap(x, y);
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Overwrites one random position with a value drawn by `sample`.
///
/// ```
/// use genetix::evolve::operators::point_mutation;
/// use genetix::random::create_rng;
/// use rand::Rng;
///
/// let mut rng = create_rng(1);
/// let mut word = *b"aaaa";
/// point_mutation(&mut word, &mut rng, |r| r.random_range(b'a'..=b'z'));
/// assert!(word.iter().all(u8::is_ascii_lowercase));
/// ```
pub fn point_mutation<T, R, F>(genes: &mut [T], rng: &mut R, mut sample: F)
where
    R: Rng,
    F: FnMut(&mut R) -> T,
{
    if genes.is_empty() {
        return;
    }

    let i = rng.random_range(0..genes.len());
    genes[i] = sample(rng);
}

/// Exchanges two random positions. The positions may coincide.
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }

    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    genes.swap(i, j);
}

/// Random inclusive segment `(start, end)` with `start <= end < n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
