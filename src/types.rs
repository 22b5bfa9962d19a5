//! Core trait definitions: the contracts between the engine and
//! domain-specific code.
//!
//! The engine consumes two collaborator traits. A [`CostFunction`] maps a
//! chromosome to one or more [`Cost`] objectives; a [`PopulationFactory`]
//! builds an initial population. Everything else — breeding, dominance,
//! archive maintenance — is generic.

use crate::chromosome::Chromosome;
use crate::cost::Cost;

/// Maps a chromosome to its cost objectives.
///
/// # Contract
///
/// - The returned vector's length must be stable across calls for
///   chromosomes of the same configuration — the dominance comparison
///   treats differing lengths as a configuration fault.
/// - Evaluation must be side-effect-free with respect to the chromosome.
///
/// # Implementing
///
/// ```
/// use pareto_ga::{Chromosome, Cost, CostFunction};
///
/// /// Cost is the number of set bits (minimised drives toward all-zero).
/// struct OnesCost;
///
/// impl CostFunction for OnesCost {
///     fn cost(&self, chromosome: &Chromosome) -> Vec<Cost> {
///         let ones: usize = chromosome
///             .genes()
///             .iter()
///             .filter_map(|g| g.bits().ok())
///             .map(|b| b.count_ones())
///             .sum();
///         vec![Cost::scalar(ones as f64)]
///     }
/// }
/// ```
pub trait CostFunction {
    /// Compute the cost objectives of `chromosome`.
    fn cost(&self, chromosome: &Chromosome) -> Vec<Cost>;
}

/// Builds an initial population of candidate solutions.
///
/// # Contract
///
/// Returns exactly `size` chromosomes of consistent configuration —
/// cross-over-compatible and comparable with one another. The factory
/// owns its randomness (take `&mut self` and hold a seeded rng for
/// reproducible runs).
pub trait PopulationFactory {
    /// Build a population of `size` chromosomes.
    fn build_population(&mut self, size: usize) -> Vec<Chromosome>;
}
