//! The multi-criteria GA controller.
//!
//! [`Mcga`] orchestrates generations: it evaluates costs, maintains the
//! historical non-dominated archive, and delegates breeding. After
//! construction, call [`step`](Mcga::step) to run a single generation,
//! or [`run`](Mcga::run) for a fixed number of generations with
//! per-generation statistics.
//!
//! # Front maintenance
//!
//! Both the per-generation front and the archive are maintained with a
//! first-match rule: a candidate is compared against members until the
//! first comparable one, which it either replaces (when strictly better
//! in the requested direction) or loses to. A candidate comparable with
//! no member joins the front as a new incomparable member. Under rare
//! tie configurations the first-match rule can briefly retain a
//! dominated member; an exhaustive scan would change observable archive
//! contents, so the rule is kept as is.
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
//! let population = vec![Chromosome::uniform(1, 8); 10];
//! let breeder = KeepBestRankLotteryBreeder::new(0.2, 0.05, 1);
//! let mut ga = Mcga::new(breeder, OnesCost, population).with_seed(42);
//!
//! let front = ga.step(false).unwrap();
//! assert!(!front.is_empty());
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::breeder::Breeder;
use crate::chromosome::Chromosome;
use crate::cost::Dominance;
use crate::error::GaError;
use crate::types::{CostFunction, PopulationFactory};

/// Per-generation statistics reported by [`Mcga::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Size of that generation's non-dominated front.
    pub front_size: usize,
    /// Population diversity after breeding ([`Mcga::difference0`]).
    pub diversity: f64,
}

/// Result of a fixed-length [`Mcga::run`].
#[derive(Debug, Clone)]
pub struct McgaResult {
    /// The final generation's non-dominated front.
    pub front: Vec<Chromosome>,
    /// Number of generations executed.
    pub generations: usize,
    /// Statistics for each generation in order.
    pub history: Vec<GenerationStats>,
}

/// Multi-criteria genetic algorithm controller.
///
/// Owns the current population, the historical non-dominated archive,
/// and a seed-configurable random stream that is threaded through the
/// breeder and every genetic operator. Strictly single-threaded and
/// synchronous: generations are sequential, and a run terminates only
/// after a caller-chosen number of them.
pub struct Mcga<B: Breeder, F: CostFunction> {
    breeder: B,
    cost_function: F,
    population: Vec<Chromosome>,
    best: Vec<Chromosome>,
    rng: StdRng,
}

impl<B: Breeder, F: CostFunction> Mcga<B, F> {
    /// Construct from an existing initial population.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn new(breeder: B, cost_function: F, population: Vec<Chromosome>) -> Self {
        assert!(
            !population.is_empty(),
            "initial population must not be empty"
        );
        Self {
            breeder,
            cost_function,
            population,
            best: Vec::new(),
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Construct by building the initial population from a factory.
    ///
    /// # Panics
    /// Panics if the factory does not deliver exactly `pop_size`
    /// chromosomes, or if that size is zero.
    pub fn from_factory(
        breeder: B,
        cost_function: F,
        pop_size: usize,
        factory: &mut impl PopulationFactory,
    ) -> Self {
        let population = factory.build_population(pop_size);
        assert_eq!(
            population.len(),
            pop_size,
            "factory must build exactly the requested population size"
        );
        Self::new(breeder, cost_function, population)
    }

    /// Seed the random stream for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The current population (after the most recent breeding).
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// The historical non-dominated archive across all generations seen.
    ///
    /// The best solutions found so far — not necessarily members of the
    /// current population, since the breeder need not preserve them.
    pub fn best_solution(&self) -> &[Chromosome] {
        &self.best
    }

    /// Run a single generation.
    ///
    /// Computes the cost of every individual, extracts the current
    /// population's non-dominated front, breeds the next population, and
    /// merges the front into the archive. Returns this generation's
    /// front (as it was before breeding).
    ///
    /// `maximise` is true when higher cost is better.
    pub fn step(&mut self, maximise: bool) -> Result<Vec<Chromosome>, GaError> {
        for chromosome in &mut self.population {
            chromosome.calc_cost(&self.cost_function);
        }

        let mut front: Vec<Chromosome> = vec![self.population[0].clone()];
        for candidate in &self.population[1..] {
            let mut incomparable = true;
            for i in 0..front.len() {
                let dominance = candidate.dominance(&front[i])?;
                if dominance != Dominance::Incomparable {
                    incomparable = false;
                    if better(dominance, maximise) {
                        front.remove(i);
                        front.push(candidate.clone());
                    }
                    break;
                }
            }
            if incomparable {
                front.push(candidate.clone());
            }
        }

        self.population = self
            .breeder
            .breed(&self.population, maximise, &mut self.rng)?;

        for candidate in &front {
            let mut incomparable = true;
            for i in 0..self.best.len() {
                let dominance = candidate.dominance(&self.best[i])?;
                if dominance != Dominance::Incomparable {
                    incomparable = false;
                    if better(dominance, maximise) {
                        self.best.remove(i);
                        self.best.push(candidate.clone());
                    }
                    break;
                }
            }
            if incomparable {
                self.best.push(candidate.clone());
            }
        }

        Ok(front)
    }

    /// Run `n_steps` generations, collecting per-generation statistics.
    ///
    /// Returns the final generation's front; with `n_steps == 0` the
    /// front is empty and no statistics are collected.
    pub fn run(&mut self, n_steps: usize, maximise: bool) -> Result<McgaResult, GaError> {
        let mut history = Vec::with_capacity(n_steps);
        let mut front = Vec::new();
        for generation in 1..=n_steps {
            front = self.step(maximise)?;
            history.push(GenerationStats {
                generation,
                front_size: front.len(),
                diversity: self.difference0(),
            });
        }
        Ok(McgaResult {
            front,
            generations: n_steps,
            history,
        })
    }

    /// Mean genetic difference between the first population member and
    /// every other member.
    pub fn difference0(&self) -> f64 {
        let mut diff = 0.0;
        for other in &self.population[1..] {
            diff += self.population[0].difference(other);
        }
        diff / self.population.len() as f64
    }

    /// Mean genetic difference over all population pairs.
    ///
    /// O(n²) pairwise comparisons — expensive for large populations;
    /// prefer [`difference0`](Mcga::difference0) for per-generation
    /// reporting.
    pub fn difference(&self) -> f64 {
        let mut diff = 0.0;
        let mut n = 0.0;
        for i in 0..self.population.len().saturating_sub(1) {
            for j in (i + 1)..self.population.len() {
                diff += self.population[i].difference(&self.population[j]);
                n += 1.0;
            }
        }
        diff / n
    }
}

/// Is `dominance` strictly better in the requested direction?
fn better(dominance: Dominance, maximise: bool) -> bool {
    if maximise {
        dominance == Dominance::Greater
    } else {
        dominance == Dominance::Less
    }
}

// ============================================================================
// Tests
// ============================================================================
