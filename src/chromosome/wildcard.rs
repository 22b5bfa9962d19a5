//! Wildcard patterns over pairs of chromosomes.
//!
//! A [`WildcardChromosome`] is not a candidate solution: it expresses the
//! commonality between two chromosomes. Slots where the sources agree
//! keep the shared gene; slots where they disagree become
//! [`Gene::Wildcard`], which matches anything. Genetic operators, cost
//! computation, and dominance comparison are structurally absent — the
//! type only supports pattern matching and inspection.

use crate::chromosome::Chromosome;
use crate::error::GaError;
use crate::gene::Gene;

/// A matching pattern derived from one or two chromosomes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardChromosome {
    genes: Vec<Gene>,
    n_wildcards: usize,
    size: u64,
}

impl WildcardChromosome {
    /// Build the pattern common to `a` and `b`: equal slots keep the
    /// gene, unequal slots become wildcards.
    ///
    /// # Errors
    ///
    /// [`GaError::ConfigurationMismatch`] when the two chromosomes have
    /// different slot counts.
    pub fn from_pair(a: &Chromosome, b: &Chromosome) -> Result<Self, GaError> {
        if a.n_genes() != b.n_genes() {
            return Err(GaError::ConfigurationMismatch(format!(
                "unequal number of genes: {} and {}",
                a.n_genes(),
                b.n_genes()
            )));
        }

        let mut genes = Vec::with_capacity(a.n_genes());
        let mut n_wildcards = 0;
        let mut size = 0u64;
        for (ga, gb) in a.genes().iter().zip(b.genes()) {
            if ga == gb {
                size += ga.size()?;
                genes.push(ga.clone());
            } else {
                genes.push(Gene::Wildcard);
                n_wildcards += 1;
            }
        }

        Ok(Self {
            genes,
            n_wildcards,
            size,
        })
    }

    /// The pattern of a single chromosome: every slot concrete, no
    /// wildcards.
    pub fn from_single(a: &Chromosome) -> Self {
        Self {
            genes: a.genes().to_vec(),
            n_wildcards: 0,
            size: a.size(),
        }
    }

    /// Number of wildcard slots.
    pub fn n_wildcards(&self) -> usize {
        self.n_wildcards
    }

    /// Number of gene slots.
    pub fn n_genes(&self) -> usize {
        self.genes.len()
    }

    /// The gene at slot `i` (possibly [`Gene::Wildcard`]).
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn gene_at(&self, i: usize) -> &Gene {
        &self.genes[i]
    }

    /// Total size of the concrete genes.
    ///
    /// # Errors
    ///
    /// [`GaError::WildcardUnsupported`] when the pattern holds any
    /// wildcard slot — size is meaningless then.
    pub fn size(&self) -> Result<u64, GaError> {
        if self.n_wildcards > 0 {
            return Err(GaError::WildcardUnsupported { op: "size" });
        }
        Ok(self.size)
    }

    /// Whether `chromosome` matches this pattern: wildcard slots match
    /// anything, concrete slots must be equal. A chromosome with a
    /// different slot count never matches.
    pub fn matches(&self, chromosome: &Chromosome) -> bool {
        self.genes.len() == chromosome.n_genes()
            && self
                .genes
                .iter()
                .zip(chromosome.genes())
                .all(|(p, g)| matches!(p, Gene::Wildcard) || p == g)
    }
}

// ============================================================================
// Tests
// ============================================================================
