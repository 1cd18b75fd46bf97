//! The entity contract.
//!
//! [`Entity`] is the capability set the evolution step needs from a
//! candidate solution. Everything about the representation, the score, and
//! the genetic operators is supplied by the implementor.

use rand::Rng;

/// A candidate solution to be evolved.
///
/// Scores follow the minimization convention: lower is fitter.
///
/// # Implementing
///
/// ```
/// use genetix::evolve::Entity;
/// use rand::Rng;
///
/// #[derive(Clone)]
/// struct Guess(Vec<u8>);
///
/// impl Entity for Guess {
///     fn score(&self) -> f64 {
///         self.0.iter().zip(b"hello").filter(|(a, b)| a != b).count() as f64
///     }
///     fn mutate<R: Rng>(&mut self, rng: &mut R) {
///         let i = rng.random_range(0..self.0.len());
///         self.0[i] = rng.random_range(b'a'..=b'z');
///     }
///     fn crossover<R: Rng>(&mut self, other: &mut Self, rng: &mut R) {
///         let cut = rng.random_range(0..self.0.len());
///         self.0[..=cut].swap_with_slice(&mut other.0[..=cut]);
///     }
///     fn reset(&mut self) {
///         self.0.iter_mut().for_each(|b| *b = 0);
///     }
///     fn identity(&self) -> String {
///         String::from_utf8_lossy(&self.0).into_owned()
///     }
/// }
/// ```
///
/// # Cloning
///
/// [`Clone`] must produce a genuinely independent copy: mutating the clone
/// must never be observable through the original.
pub trait Entity: Clone {
    /// Returns the score of the current state. Lower is better.
    ///
    /// Must be deterministic and free of side effects.
    fn score(&self) -> f64;

    /// Randomly perturbs the entity in place.
    ///
    /// Must accept any reachable state, including the reset state.
    fn mutate<R: Rng>(&mut self, rng: &mut R);

    /// Recombines with `other`. Both entities may be modified.
    fn crossover<R: Rng>(&mut self, other: &mut Self, rng: &mut R);

    /// Restores the canonical zero state.
    ///
    /// Used to neutralize duplicates. Calling it twice must leave the same
    /// state as calling it once.
    fn reset(&mut self);

    /// Canonical identity string.
    ///
    /// Two entities with equal identities are duplicates, whatever else
    /// differs between them.
    fn identity(&self) -> String;
}
