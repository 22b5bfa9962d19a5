//! Chromosomes: ordered sequences of genes representing candidate
//! solutions.
//!
//! A [`Chromosome`] owns its gene slots and a lazily computed cost cache.
//! Genetic operators are non-destructive — they build a new chromosome
//! with an empty cost cache and leave the operands untouched. Two
//! chromosomes can be crossed over or compared only when they share a
//! gene-slot configuration (same slot count, same per-slot sizes).
//!
//! Dominance comparison delegates to [`pareto_cmp`] over the two cached
//! cost slices; reading or comparing a cost that was never computed is a
//! loud [`GaError::CostNotComputed`].

mod wildcard;

pub use wildcard::WildcardChromosome;

use std::cmp::Ordering;

use rand::Rng;

use crate::cost::{pareto_cmp, Cost, Dominance};
use crate::error::GaError;
use crate::gene::{BitVector, Gene};
use crate::types::CostFunction;

/// A candidate solution: an ordered sequence of concrete genes plus an
/// optional cached cost.
///
/// Wildcard genes cannot appear in a `Chromosome`; patterns containing
/// them are expressed by [`WildcardChromosome`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
    size: u64,
    cost: Option<Vec<Cost>>,
}

impl Chromosome {
    /// A chromosome of `n_genes` zero-initialised plain bit-string genes,
    /// each `gene_length` bits long.
    pub fn uniform(n_genes: usize, gene_length: usize) -> Self {
        Self::with_lengths(&vec![gene_length; n_genes])
    }

    /// A chromosome of zero-initialised plain bit-string genes with the
    /// given per-slot lengths.
    pub fn with_lengths(lengths: &[usize]) -> Self {
        let genes: Vec<Gene> = lengths
            .iter()
            .map(|&len| Gene::BitString(BitVector::zeros(len)))
            .collect();
        let size = lengths.iter().map(|&len| len as u64).sum();
        Self {
            genes,
            size,
            cost: None,
        }
    }

    /// A chromosome from pre-built genes.
    ///
    /// # Errors
    ///
    /// [`GaError::WildcardUnsupported`] if any gene is a wildcard — a
    /// candidate solution has none.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self, GaError> {
        let mut size = 0u64;
        for gene in &genes {
            size += gene.size().map_err(|_| GaError::WildcardUnsupported {
                op: "chromosome construction",
            })?;
        }
        Ok(Self {
            genes,
            size,
            cost: None,
        })
    }

    /// Number of gene slots.
    pub fn n_genes(&self) -> usize {
        self.genes.len()
    }

    /// The gene at slot `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn gene_at(&self, i: usize) -> &Gene {
        &self.genes[i]
    }

    /// All gene slots in order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Total size: the sum of the gene sizes (not the slot count).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether `other` shares this chromosome's gene-slot configuration:
    /// the same slot count with the same per-slot sizes.
    pub fn same_configuration(&self, other: &Chromosome) -> bool {
        self.genes.len() == other.genes.len()
            && self
                .genes
                .iter()
                .zip(&other.genes)
                .all(|(a, b)| a.size().ok() == b.size().ok())
    }

    /// Randomise every gene in place and discard any cached cost.
    pub fn randomise<R: Rng>(&mut self, rng: &mut R) -> Result<(), GaError> {
        for gene in &mut self.genes {
            *gene = gene.randomise(rng)?;
        }
        self.cost = None;
        Ok(())
    }

    /// Cross this chromosome with `other` at a bit position in
    /// `[0, size]`.
    ///
    /// `point == 0` yields a copy of `other` and `point >= size` a copy
    /// of self. Otherwise slots strictly before the slot containing
    /// `point` are taken from self, later slots from `other`, and the
    /// boundary slot is the gene-level crossover of `other`'s gene with
    /// self's gene at the in-gene offset.
    ///
    /// The result carries no cached cost.
    ///
    /// # Errors
    ///
    /// [`GaError::ConfigurationMismatch`] when the two chromosomes do not
    /// share a gene-slot configuration.
    pub fn crossover(&self, other: &Chromosome, point: u64) -> Result<Chromosome, GaError> {
        if !self.same_configuration(other) {
            return Err(GaError::ConfigurationMismatch(
                "cannot cross over chromosomes with different gene-slot configurations".into(),
            ));
        }

        if point == 0 {
            return Ok(other.cleared());
        }
        if point >= self.size {
            return Ok(self.cleared());
        }

        let mut genes = other.genes.clone();
        let mut point_find = 0u64;
        let mut boundary = 0usize;
        for (i, gene) in self.genes.iter().enumerate() {
            point_find += gene.size()?;
            if point <= point_find {
                boundary = i;
                break;
            }
            genes[i] = gene.clone();
        }

        let offset = point - (point_find - self.genes[boundary].size()?);
        genes[boundary] = genes[boundary].crossover(&self.genes[boundary], offset as usize)?;

        Ok(Chromosome {
            genes,
            size: self.size,
            cost: None,
        })
    }

    /// Mutate every gene with per-bit probability `p_mutate`.
    ///
    /// The result carries no cached cost.
    pub fn mutate<R: Rng>(&self, p_mutate: f64, rng: &mut R) -> Result<Chromosome, GaError> {
        let mut genes = Vec::with_capacity(self.genes.len());
        for gene in &self.genes {
            genes.push(gene.mutate(p_mutate, rng)?);
        }
        Ok(Chromosome {
            genes,
            size: self.size,
            cost: None,
        })
    }

    /// Whether any gene supports perturbation.
    pub fn perturbable(&self) -> bool {
        self.genes.iter().any(Gene::is_perturbable)
    }

    /// Perturb every perturbable gene with probability `p_perturb` from a
    /// normal distribution of variance `perturb_var`; other genes are
    /// copied unchanged.
    ///
    /// # Errors
    ///
    /// [`GaError::NotPerturbable`] when no gene supports perturbation.
    pub fn perturb<R: Rng>(
        &self,
        p_perturb: f64,
        perturb_var: f64,
        rng: &mut R,
    ) -> Result<Chromosome, GaError> {
        if !self.perturbable() {
            return Err(GaError::NotPerturbable);
        }
        let genes = self
            .genes
            .iter()
            .map(|gene| {
                if gene.is_perturbable() {
                    gene.perturb(p_perturb, perturb_var, rng)
                } else {
                    gene.clone()
                }
            })
            .collect();
        Ok(Chromosome {
            genes,
            size: self.size,
            cost: None,
        })
    }

    /// Compute and store the cost via `func`, returning the stored slice.
    pub fn calc_cost<F: CostFunction + ?Sized>(&mut self, func: &F) -> &[Cost] {
        let cost = func.cost(self);
        self.cost.insert(cost).as_slice()
    }

    /// The stored cost from the last [`calc_cost`](Chromosome::calc_cost).
    ///
    /// # Errors
    /// [`GaError::CostNotComputed`] when no cost has been computed.
    pub fn cost(&self) -> Result<&[Cost], GaError> {
        self.cost.as_deref().ok_or(GaError::CostNotComputed)
    }

    /// Evaluate `func` on this chromosome without touching the stored cost.
    pub fn cost_with<F: CostFunction + ?Sized>(&self, func: &F) -> Vec<Cost> {
        func.cost(self)
    }

    /// Pareto-dominance comparison with `other` over the two stored costs.
    ///
    /// # Errors
    ///
    /// [`GaError::CostNotComputed`] if either side has never been
    /// evaluated; [`GaError::CostLengthMismatch`] when the stored cost
    /// vectors differ in length.
    pub fn dominance(&self, other: &Chromosome) -> Result<Dominance, GaError> {
        pareto_cmp(self.cost()?, other.cost()?)
    }

    /// Whether this chromosome is comparable with `other`.
    pub fn comparable_with(&self, other: &Chromosome) -> Result<bool, GaError> {
        Ok(self.dominance(other)? != Dominance::Incomparable)
    }

    /// Compare with `other` with respect to cost.
    ///
    /// Check [`comparable_with`](Chromosome::comparable_with) first: on
    /// incomparable input the result degrades to `Equal`.
    pub fn compare_to(&self, other: &Chromosome) -> Result<Ordering, GaError> {
        Ok(self.dominance(other)?.as_ordering())
    }

    /// Mean genetic difference from `other` in [0.0, 1.0], weighted by
    /// gene size. 1.0 when the slot counts differ.
    pub fn difference(&self, other: &Chromosome) -> f64 {
        if self.n_genes() != other.n_genes() {
            return 1.0;
        }
        if self.size == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(a, b)| a.difference(b) * a.size().unwrap_or(0) as f64)
            .sum();
        weighted / self.size as f64
    }

    /// A copy with the cost cache dropped.
    fn cleared(&self) -> Chromosome {
        Chromosome {
            genes: self.genes.clone(),
            size: self.size,
            cost: None,
        }
    }
}

/// Render the costs of a population for progress reporting, e.g.
/// `"[ 3 ], [ 1 2 ]"`. Uncomputed costs render as `"[ - ]"`.
pub fn cost_string(population: &[Chromosome]) -> String {
    let mut out = String::new();
    for chromosome in population {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push('[');
        match chromosome.cost.as_deref() {
            Some(costs) => {
                for cost in costs {
                    out.push(' ');
                    out.push_str(&cost.to_string());
                }
            }
            None => out.push_str(" -"),
        }
        out.push_str(" ]");
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Cost: the numeric value of each gene, one objective per slot.
    struct ValueCost;

    impl CostFunction for ValueCost {
        fn cost(&self, chromosome: &Chromosome) -> Vec<Cost> {
            chromosome
                .genes()
                .iter()
                .map(|g| {
                    let value = g.bits().ok().and_then(|b| b.to_u64()).unwrap_or(0);
                    Cost::scalar(value as f64)
                })
                .collect()
        }
    }

    fn chromosome_of(values: &[(u64, usize)]) -> Chromosome {
        let genes = values
            .iter()
            .map(|&(v, len)| Gene::BitString(BitVector::from_u64(v, len)))
            .collect();
        Chromosome::from_genes(genes).unwrap()
    }

    #[test]
    fn test_construction() {
        let c = Chromosome::uniform(4, 8);
        assert_eq!(c.n_genes(), 4);
        assert_eq!(c.size(), 32);
        assert!(c.cost().is_err());

        let c = Chromosome::with_lengths(&[3, 5]);
        assert_eq!(c.size(), 8);
        assert_eq!(c.gene_at(0).size().unwrap(), 3);
    }

    #[test]
    fn test_from_genes_rejects_wildcards() {
        let genes = vec![Gene::BitString(BitVector::zeros(4)), Gene::Wildcard];
        assert!(matches!(
            Chromosome::from_genes(genes),
            Err(GaError::WildcardUnsupported { .. })
        ));
    }

    #[test]
    fn test_same_configuration() {
        let a = Chromosome::with_lengths(&[4, 8]);
        let b = Chromosome::with_lengths(&[4, 8]);
        let c = Chromosome::with_lengths(&[8, 4]);
        let d = Chromosome::with_lengths(&[4, 8, 1]);
        assert!(a.same_configuration(&b));
        assert!(!a.same_configuration(&c));
        assert!(!a.same_configuration(&d));
    }

    #[test]
    fn test_crossover_endpoints() {
        let a = chromosome_of(&[(0, 4), (0, 4)]);
        let b = chromosome_of(&[(0xF, 4), (0xF, 4)]);
        let at_zero = a.crossover(&b, 0).unwrap();
        assert_eq!(at_zero.genes(), b.genes());
        assert!(at_zero.cost().is_err());
        let at_size = a.crossover(&b, 8).unwrap();
        assert_eq!(at_size.genes(), a.genes());
        let past_size = a.crossover(&b, 99).unwrap();
        assert_eq!(past_size.genes(), a.genes());
    }

    #[test]
    fn test_crossover_mid_gene() {
        let a = chromosome_of(&[(0, 4), (0, 4)]);
        let b = chromosome_of(&[(0xF, 4), (0xF, 4)]);
        // Point 6 lands two bits into slot 1: slot 0 is taken from self,
        // and the boundary slot keeps the other's two low bits with
        // self's two high bits.
        let child = a.crossover(&b, 6).unwrap();
        assert_eq!(child.gene_at(0).to_string(), "0000");
        assert_eq!(child.gene_at(1).to_string(), "0011");
        // The mirror image swaps the roles.
        let child = b.crossover(&a, 6).unwrap();
        assert_eq!(child.gene_at(0).to_string(), "1111");
        assert_eq!(child.gene_at(1).to_string(), "1100");
    }

    #[test]
    fn test_crossover_slot_boundary() {
        let a = chromosome_of(&[(0, 4), (0, 4)]);
        let b = chromosome_of(&[(0xF, 4), (0xF, 4)]);
        // Point 4 is the end of slot 0, which becomes the boundary slot:
        // the whole slot comes from the other chromosome.
        let child = a.crossover(&b, 4).unwrap();
        assert_eq!(child.gene_at(0).to_string(), "1111");
        assert_eq!(child.gene_at(1).to_string(), "1111");
    }

    #[test]
    fn test_crossover_configuration_mismatch() {
        let a = Chromosome::with_lengths(&[4, 4]);
        let b = Chromosome::with_lengths(&[8]);
        assert!(matches!(
            a.crossover(&b, 2),
            Err(GaError::ConfigurationMismatch(_))
        ));
    }

    #[test]
    fn test_mutate_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = chromosome_of(&[(0b1010, 4), (0b0101, 4)]);
        let same = a.mutate(0.0, &mut rng).unwrap();
        assert_eq!(same.genes(), a.genes());
        assert!(same.cost().is_err());
    }

    #[test]
    fn test_mutate_full_probability_changes_bits() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = chromosome_of(&[(0, 64)]);
        let mutated = a.mutate(1.0, &mut rng).unwrap();
        assert_ne!(mutated.genes(), a.genes());
        assert!(a.same_configuration(&mutated));
    }

    #[test]
    fn test_randomise_preserves_configuration() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = Chromosome::uniform(2, 32);
        let before = a.clone();
        a.randomise(&mut rng).unwrap();
        assert!(a.same_configuration(&before));
        assert_ne!(a.genes(), before.genes());
    }

    #[test]
    fn test_cost_lifecycle() {
        let mut a = chromosome_of(&[(5, 8)]);
        assert_eq!(a.cost(), Err(GaError::CostNotComputed));
        let stored = a.calc_cost(&ValueCost).to_vec();
        assert_eq!(stored, vec![Cost::scalar(5.0)]);
        assert_eq!(a.cost().unwrap(), &stored[..]);
        // cost_with does not touch the store
        let fresh = a.cost_with(&ValueCost);
        assert_eq!(fresh, stored);
    }

    #[test]
    fn test_clone_preserves_cost_operators_clear_it() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut a = chromosome_of(&[(5, 8)]);
        a.calc_cost(&ValueCost);
        assert!(a.clone().cost().is_ok());
        assert!(a.mutate(0.1, &mut rng).unwrap().cost().is_err());
    }

    #[test]
    fn test_dominance_requires_computed_costs() {
        let a = chromosome_of(&[(1, 8)]);
        let b = chromosome_of(&[(2, 8)]);
        assert_eq!(a.dominance(&b), Err(GaError::CostNotComputed));
    }

    #[test]
    fn test_dominance_scalar() {
        let mut a = chromosome_of(&[(1, 8)]);
        let mut b = chromosome_of(&[(2, 8)]);
        a.calc_cost(&ValueCost);
        b.calc_cost(&ValueCost);
        assert!(a.comparable_with(&b).unwrap());
        assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
        assert_eq!(a.dominance(&b).unwrap(), Dominance::Less);
    }

    #[test]
    fn test_dominance_conflicting_objectives() {
        let mut a = chromosome_of(&[(1, 8), (2, 8)]);
        let mut b = chromosome_of(&[(2, 8), (1, 8)]);
        a.calc_cost(&ValueCost);
        b.calc_cost(&ValueCost);
        assert!(!a.comparable_with(&b).unwrap());
        assert_eq!(a.dominance(&b).unwrap(), Dominance::Incomparable);
        assert_eq!(a.compare_to(&b).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_dominance_length_mismatch_errors() {
        struct OneCost;
        impl CostFunction for OneCost {
            fn cost(&self, _c: &Chromosome) -> Vec<Cost> {
                vec![Cost::scalar(1.0)]
            }
        }
        let mut a = chromosome_of(&[(1, 8), (2, 8)]);
        let mut b = chromosome_of(&[(2, 8), (1, 8)]);
        a.calc_cost(&ValueCost);
        b.calc_cost(&OneCost);
        assert!(matches!(
            a.dominance(&b),
            Err(GaError::CostLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_difference_self_is_zero() {
        let a = chromosome_of(&[(0b1010, 4), (0b0101, 4)]);
        assert_eq!(a.difference(&a.clone()), 0.0);
    }

    #[test]
    fn test_difference_weighted_by_gene_size() {
        let a = chromosome_of(&[(0b0000, 4), (0b0000, 4)]);
        let b = chromosome_of(&[(0b0011, 4), (0b0000, 4)]);
        // one slot differs in 2 of 4 bits, the other is identical
        assert_eq!(a.difference(&b), 0.25);
    }

    #[test]
    fn test_difference_slot_count_mismatch_is_one() {
        let a = Chromosome::with_lengths(&[4, 4]);
        let b = Chromosome::with_lengths(&[8]);
        assert_eq!(a.difference(&b), 1.0);
    }

    #[test]
    fn test_not_perturbable() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = chromosome_of(&[(1, 8)]);
        assert!(!a.perturbable());
        assert_eq!(
            a.perturb(0.5, 1.0, &mut rng),
            Err(GaError::NotPerturbable)
        );
    }

    #[test]
    fn test_cost_string() {
        let mut a = chromosome_of(&[(3, 8)]);
        let b = chromosome_of(&[(4, 8)]);
        a.calc_cost(&ValueCost);
        assert_eq!(cost_string(&[a, b]), "[ 3 ], [ - ]");
    }
}
