//! Repeated evolution.
//!
//! [`EvolveRunner`] calls [`evolve`] once per generation until the
//! caller's target score, the generation cap, or a cancellation flag stops
//! it. It adds no convergence heuristics of its own.

use super::config::EvolveConfig;
use super::generation::evolve;
use super::population::Population;
use super::types::Entity;
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a driven evolution run.
#[derive(Debug, Clone)]
pub struct EvolveResult<E: Entity> {
    /// Copy of the best entity (index 0) when the run stopped.
    pub best: E,

    /// Score of `best`.
    pub best_score: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the target score was reached.
    pub reached_target: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best score after the initial ranking, then after each generation.
    pub score_history: Vec<f64>,
}

/// Drives [`evolve`] over a caller-owned population.
///
/// # Usage
///
/// ```ignore
/// let mut population: Vec<MyEntity> = (0..100).map(|_| MyEntity::zero()).collect();
/// let config = EvolveConfig::default().with_seed(42);
/// let result = EvolveRunner::run(&mut population, &config);
/// println!("best {} after {} generations", result.best_score, result.generations);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Evolves `population` in place.
    ///
    /// # Panics
    /// Panics if the configuration is invalid for this population (call
    /// [`EvolveConfig::validate`] first to get a descriptive error).
    pub fn run<E: Entity>(population: &mut [E], config: &EvolveConfig) -> EvolveResult<E> {
        Self::run_with_cancel(population, config, None)
    }

    /// Evolves `population` in place with an optional cancellation token.
    ///
    /// The flag is checked before each generation; a generation in progress
    /// always completes.
    pub fn run_with_cancel<E: Entity>(
        population: &mut [E],
        config: &EvolveConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> EvolveResult<E> {
        config
            .validate(population.len())
            .expect("invalid EvolveConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let initial = population
            .iter()
            .map(Entity::score)
            .fold(f64::INFINITY, f64::min);
        let mut score_history = Vec::with_capacity(config.max_generations.min(4096) + 1);
        score_history.push(initial);

        let reached = |score: f64| matches!(config.target_score, Some(t) if score <= t);

        let mut generations = 0;
        let mut cancelled = false;
        let mut reached_target = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let stats = evolve(
                population,
                config.elites,
                config.mutation_rate,
                config.crossover_rate,
                &mut rng,
            );
            generations = gen + 1;

            let best_score = population[0].score();
            score_history.push(best_score);

            tracing::debug!(
                generation = generations,
                best_score,
                resets = stats.resets,
                "generation evolved"
            );

            if reached(best_score) {
                reached_target = true;
                break;
            }
        }

        // With zero generations run, index 0 is not yet the best.
        if generations == 0 {
            Population::rank(population);
        }
        let best = population[0].clone();
        let best_score = best.score();

        tracing::info!(
            generations,
            best_score,
            reached_target,
            cancelled,
            "evolution finished"
        );

        EvolveResult {
            best,
            best_score,
            generations,
            reached_target,
            cancelled,
            score_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
