//! Multi-criteria genetic algorithm engine.
//!
//! A generic GA core supporting single-objective and multi-objective
//! (Pareto) optimization over populations of bit-string chromosomes:
//!
//! - **Genes**: bit-string and Gray-coded bit-string variants, plus a
//!   wildcard placeholder for pattern matching — a tagged sum type, not
//!   an open class hierarchy.
//! - **Costs**: scalar or vector objectives with Pareto comparability —
//!   two cost vectors are ordered only when every component agrees in
//!   direction.
//! - **Chromosomes**: ordered gene sequences with non-destructive
//!   crossover, mutation, and perturbation operators and a lazily
//!   computed cost cache.
//! - **Breeding**: rank-lottery selection with elitism
//!   ([`KeepBestRankLotteryBreeder`]) behind a pluggable [`Breeder`]
//!   trait.
//! - **Control**: the [`Mcga`] controller steps generations, maintains
//!   the historical non-dominated archive, and reports diversity
//!   statistics.
//!
//! Domain-specific concerns enter through two traits: a [`CostFunction`]
//! maps a chromosome to its objectives and a [`PopulationFactory`]
//! builds the initial population.
//!
//! # Example
//!
//! ```
//! use pareto_ga::{
//!     Chromosome, Cost, CostFunction, KeepBestRankLotteryBreeder, Mcga,
//! };
//!
//! /// Minimise the number of set bits.
//! struct OnesCost;
//! impl CostFunction for OnesCost {
//!     fn cost(&self, chromosome: &Chromosome) -> Vec<Cost> {
//!         let ones: usize = chromosome
//!             .genes()
//!             .iter()
//!             .filter_map(|g| g.bits().ok())
//!             .map(|b| b.count_ones())
//!             .sum();
//!         vec![Cost::scalar(ones as f64)]
//!     }
//! }
//!
//! let population = vec![Chromosome::uniform(2, 8); 12];
//! let breeder = KeepBestRankLotteryBreeder::new(0.2, 0.05, 1);
//! let mut ga = Mcga::new(breeder, OnesCost, population).with_seed(42);
//!
//! let result = ga.run(5, false).unwrap();
//! assert_eq!(result.generations, 5);
//! assert!(!ga.best_solution().is_empty());
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

pub mod breeder;
pub mod chromosome;
pub mod cost;
pub mod error;
pub mod gene;
pub mod mcga;
pub mod perturb;
pub mod types;

pub use breeder::{Breeder, KeepBestRankLotteryBreeder, Perturbation};
pub use chromosome::{cost_string, Chromosome, WildcardChromosome};
pub use cost::{pareto_cmp, Cost, Dominance};
pub use error::GaError;
pub use gene::{BitVector, Gene};
pub use mcga::{GenerationStats, Mcga, McgaResult};
pub use types::{CostFunction, PopulationFactory};
