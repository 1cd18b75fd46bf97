//! Generic evolutionary optimization.
//!
//! Evolves a population of user-defined candidate solutions toward lower
//! scores. Each generation ranks the population, shelters the best
//! entities, applies a budget of random mutations and crossovers to the
//! rest, and resets duplicates to restore diversity.
//!
//! - [`evolve`]: the [`Entity`](evolve::Entity) and
//!   [`Population`](evolve::Population) contracts, the single-generation
//!   [`evolve`](evolve::evolve) step, and a generation driver.
//! - [`random`]: seeded RNG construction for reproducible runs.
//!
//! # Architecture
//!
//! The crate defines no fitness functions and evaluates nothing in
//! parallel. Scoring, representation, and the genetic operators are all
//! supplied by the caller's [`Entity`](evolve::Entity) implementation; the
//! caller also decides when to stop.

pub mod evolve;
pub mod random;
