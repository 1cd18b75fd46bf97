//! Population evolution.
//!
//! A generic, domain-agnostic evolution step built on two traits. Users
//! describe a candidate solution by implementing [`Entity`]; any slice or
//! vector of entities is then a [`Population`] that [`evolve`] can advance
//! one generation at a time.
//!
//! # Core Traits
//!
//! - [`Entity`]: score, mutate, crossover, reset, identity
//! - [`Population`]: index-based view the evolution step operates on
//!
//! # Key Items
//!
//! - [`evolve`]: one generation (rank, elites, mutation, crossover, dedup)
//! - [`EvolveConfig`]: parameters and stopping criteria for repeated runs
//! - [`EvolveRunner`]: calls [`evolve`] until a stopping criterion fires
//! - [`EvolveResult`]: best entity and score history of a run
//!
//! # Submodules
//!
//! - [`operators`]: in-place crossover and mutation helpers for slice genomes
//!
//! # Example
//!
//! ```
//! use genetix::evolve::{evolve, Entity};
//! use genetix::evolve::operators::{point_mutation, prefix_swap_crossover};
//! use genetix::random::create_rng;
//! use rand::Rng;
//!
//! #[derive(Clone)]
//! struct Word([u8; 4]);
//!
//! impl Entity for Word {
//!     fn score(&self) -> f64 {
//!         self.0.iter().zip(b"rust").filter(|(a, b)| a != b).count() as f64
//!     }
//!     fn mutate<R: Rng>(&mut self, rng: &mut R) {
//!         point_mutation(&mut self.0, rng, |r| r.random_range(b'a'..=b'z'));
//!     }
//!     fn crossover<R: Rng>(&mut self, other: &mut Self, rng: &mut R) {
//!         prefix_swap_crossover(&mut self.0, &mut other.0, rng);
//!     }
//!     fn reset(&mut self) {
//!         self.0 = [0; 4];
//!     }
//!     fn identity(&self) -> String {
//!         String::from_utf8_lossy(&self.0).into_owned()
//!     }
//! }
//!
//! let mut population = vec![Word([0; 4]); 50];
//! let mut rng = create_rng(42);
//! for _ in 0..10 {
//!     evolve(&mut population, 5, 0.2, 0.1, &mut rng);
//! }
//! assert_eq!(population.len(), 50);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (elitist strategy)

mod config;
mod generation;
pub mod operators;
mod population;
mod runner;
mod types;

pub use config::EvolveConfig;
pub use generation::{crossover_trials, evolve, mutation_trials, GenerationStats};
pub use population::Population;
pub use runner::{EvolveResult, EvolveRunner};
pub use types::Entity;
