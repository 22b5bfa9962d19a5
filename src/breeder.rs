//! Breeding: selection plus variation operators producing the next
//! generation.
//!
//! A [`Breeder`] turns the current population into a same-size successor.
//! The provided implementation, [`KeepBestRankLotteryBreeder`], combines
//! elitism with a rank lottery: tickets are issued in rank order of cost,
//! better individuals holding proportionally more, so selection pressure
//! depends only on rank — robust to non-linear or incomparable cost
//! scales.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chromosome::Chromosome;
use crate::error::GaError;

/// Produces the next generation from the current one.
///
/// A genetic algorithm can be sensitive to the algorithm used to select
/// the next population, so the controller takes the breeder as a
/// pluggable collaborator.
pub trait Breeder {
    /// Breed the next generation.
    ///
    /// Every member of `population` must carry a computed cost.
    /// `maximise` is true when higher cost is better.
    fn breed<R: Rng>(
        &self,
        population: &[Chromosome],
        maximise: bool,
        rng: &mut R,
    ) -> Result<Vec<Chromosome>, GaError>;
}

/// Perturbation settings for a breeder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Per-gene probability of attempting perturbation.
    pub p_perturb: f64,
    /// Variance of the perturbation distribution.
    pub perturb_var: f64,
}

/// Rank-lottery breeder with elitism.
///
/// Each generation:
///
/// 1. The population is sorted by the dominance-derived ordering
///    (incomparable pairs tie), reversed when minimising so the best end
///    up at the tail.
/// 2. The top `n_best_kept` individuals are copied unchanged into the
///    next generation.
/// 3. The individual at sorted rank `i` (worst = 0) receives `i + 1`
///    lottery tickets; the ticket multiset is shuffled uniformly.
/// 4. Each remaining slot draws two tickets without replacement as
///    mother and father. The child starts as a copy of the mother, is
///    crossed with the father at a uniformly random point with
///    probability `p_crossover`, is mutated per-bit with probability
///    `p_mutate` when that is non-zero, and — when perturbation is
///    configured and the child is perturbable — is perturbed.
///
/// # Examples
///
/// ```
/// use pareto_ga::KeepBestRankLotteryBreeder;
///
/// let breeder = KeepBestRankLotteryBreeder::new(0.2, 0.05, 1)
///     .with_perturbation(0.1, 0.5);
/// assert_eq!(breeder.n_best_kept(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KeepBestRankLotteryBreeder {
    p_crossover: f64,
    p_mutate: f64,
    n_best_kept: usize,
    perturbation: Option<Perturbation>,
}

impl KeepBestRankLotteryBreeder {
    /// Create a breeder with the given crossover and per-bit mutation
    /// probabilities (clamped to [0, 1]) and elite count.
    pub fn new(p_crossover: f64, p_mutate: f64, n_best_kept: usize) -> Self {
        Self {
            p_crossover: p_crossover.clamp(0.0, 1.0),
            p_mutate: p_mutate.clamp(0.0, 1.0),
            n_best_kept,
            perturbation: None,
        }
    }

    /// Enable perturbation of perturbable offspring.
    pub fn with_perturbation(mut self, p_perturb: f64, perturb_var: f64) -> Self {
        self.perturbation = Some(Perturbation {
            p_perturb: p_perturb.clamp(0.0, 1.0),
            perturb_var,
        });
        self
    }

    /// The crossover probability.
    pub fn p_crossover(&self) -> f64 {
        self.p_crossover
    }

    /// The per-bit mutation probability.
    pub fn p_mutate(&self) -> f64 {
        self.p_mutate
    }

    /// Number of elites copied unchanged each generation.
    pub fn n_best_kept(&self) -> usize {
        self.n_best_kept
    }
}

impl Breeder for KeepBestRankLotteryBreeder {
    fn breed<R: Rng>(
        &self,
        population: &[Chromosome],
        maximise: bool,
        rng: &mut R,
    ) -> Result<Vec<Chromosome>, GaError> {
        let n = population.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        if self.n_best_kept > n {
            return Err(GaError::InvalidParameter(format!(
                "n_best_kept {} exceeds population size {n}",
                self.n_best_kept
            )));
        }

        // Every member needs a computed cost of consistent length before
        // sorting; a missing or mismatched cost is a configuration fault.
        let expected = population[0].cost()?.len();
        for chromosome in population {
            let cost = chromosome.cost()?;
            if cost.len() != expected {
                return Err(GaError::CostLengthMismatch {
                    left: expected,
                    right: cost.len(),
                });
            }
        }

        // Ascending by badness: rank 0 is the worst, the tail the best.
        let mut sorted: Vec<&Chromosome> = population.iter().collect();
        sorted.sort_by(|a, b| {
            // costs validated above; incomparable pairs tie
            let ord = a.compare_to(b).unwrap_or(Ordering::Equal);
            if maximise {
                ord
            } else {
                ord.reverse()
            }
        });

        let mut next = Vec::with_capacity(n);
        for i in 0..self.n_best_kept {
            next.push(sorted[n - 1 - i].clone());
        }

        // Rank lottery: rank i holds i + 1 tickets.
        let mut tickets: Vec<usize> = Vec::with_capacity(n * (n + 1) / 2);
        for i in 0..n {
            for _ in 0..=i {
                tickets.push(i);
            }
        }
        tickets.shuffle(rng);
        let mut draw = tickets.into_iter();

        for _ in self.n_best_kept..n {
            let mother = sorted[next_ticket(&mut draw)?];
            let father = sorted[next_ticket(&mut draw)?];

            let mut baby = mother.clone();
            if rng.random_range(0.0..1.0) < self.p_crossover {
                let point = if father.size() == 0 {
                    0
                } else {
                    rng.random_range(0..father.size())
                };
                baby = baby.crossover(father, point)?;
            }
            if self.p_mutate > 0.0 {
                baby = baby.mutate(self.p_mutate, rng)?;
            }
            if let Some(perturbation) = self.perturbation {
                if baby.perturbable() {
                    baby = baby.perturb(perturbation.p_perturb, perturbation.perturb_var, rng)?;
                }
            }
            next.push(baby);
        }

        Ok(next)
    }
}

fn next_ticket(draw: &mut impl Iterator<Item = usize>) -> Result<usize, GaError> {
    draw.next().ok_or_else(|| {
        GaError::InvalidParameter("population too small for the rank lottery".into())
    })
}

// ============================================================================
// Tests
// ============================================================================
