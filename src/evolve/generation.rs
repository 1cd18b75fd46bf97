//! A single evolution step.
//!
//! [`evolve`] advances a [`Population`] by one generation:
//! rank → stage elites → mutate → crossover → restore elites → dedup.

use super::population::Population;
use rand::Rng;

/// Counters describing one call to [`evolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of mutation trials issued.
    pub mutations: usize,

    /// Number of crossover trials issued.
    pub crossovers: usize,

    /// Number of entities reset as duplicates.
    pub resets: usize,
}

/// Number of mutation trials for a population of `n`.
///
/// `floor(n * rate) + 1`: the budget always includes one extra trial.
/// Saturates at `usize::MAX`.
pub fn mutation_trials(n: usize, rate: f64) -> usize {
    ((n as f64 * rate) as usize).saturating_add(1)
}

/// Number of crossover trials for a population of `n`.
///
/// `floor(n(n-1)/2 * rate) + 1`: the rate is applied to the number of
/// unordered pairs, plus one extra trial. Saturates at `usize::MAX`.
pub fn crossover_trials(n: usize, rate: f64) -> usize {
    let pairs = n as f64 * n.saturating_sub(1) as f64 / 2.0;
    ((pairs * rate) as usize).saturating_add(1)
}

/// Evolves the population by one generation.
///
/// 1. Sort ascending by score.
/// 2. Copy the front elites into the tail slots that mutation never touches.
/// 3. Mutate random entities in the working region `[0, n - elites)`.
/// 4. Cross random pairs in the working region.
/// 5. Swap the staged elites back to the front.
/// 6. Reset duplicates.
///
/// Afterwards `[0, elites)` holds this call's starting elites in ascending
/// order, untouched by steps 3 and 4. Sampling is with replacement, and a
/// crossover pair may pick the same index twice.
///
/// # Panics
/// Panics if `elites >= population.len()` or if either rate is negative or
/// not finite.
///
/// # Examples
///
/// ```ignore
/// let mut rng = create_rng(42);
/// for _ in 0..1000 {
///     evolve(&mut population, 10, 0.2, 0.1, &mut rng);
///     if population[0].score() == 0.0 {
///         break;
///     }
/// }
/// ```
pub fn evolve<P, R>(
    population: &mut P,
    elites: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut R,
) -> GenerationStats
where
    P: Population + ?Sized,
    R: Rng,
{
    let n = population.len();
    assert!(
        elites < n,
        "elites ({elites}) must be less than the population size ({n})"
    );
    assert!(
        mutation_rate.is_finite() && mutation_rate >= 0.0,
        "mutation_rate must be finite and non-negative, got {mutation_rate}"
    );
    assert!(
        crossover_rate.is_finite() && crossover_rate >= 0.0,
        "crossover_rate must be finite and non-negative, got {crossover_rate}"
    );

    // Rank
    population.rank();

    // Stage elites. Only elites inside the working region need a copy; the
    // rest already sit beyond it.
    let reduced = n - elites;
    let staged = elites.min(reduced);
    for i in 0..staged {
        population.copy(n - 1 - i, i);
    }

    // Mutate
    let mutations = mutation_trials(n, mutation_rate);
    for _ in 0..mutations {
        let i = rng.random_range(0..reduced);
        population.mutate(i, rng);
    }

    // Crossover
    let crossovers = crossover_trials(n, crossover_rate);
    for _ in 0..crossovers {
        let i = rng.random_range(0..reduced);
        let j = rng.random_range(0..reduced);
        population.crossover(i, j, rng);
    }

    // Restore elites
    for i in 0..staged {
        population.swap(i, n - 1 - i);
    }

    let resets = population.dedup();

    tracing::trace!(
        population = n,
        elites,
        mutations,
        crossovers,
        resets,
        "generation complete"
    );

    GenerationStats {
        mutations,
        crossovers,
        resets,
    }
}

// ============================================================================
// Tests
// ============================================================================
