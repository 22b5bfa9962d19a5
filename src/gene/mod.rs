//! Genes: the smallest units of heritable information.
//!
//! A [`Gene`] is a tagged sum over the supported variants rather than an
//! open class hierarchy — operations dispatch by matching the tag:
//!
//! - [`Gene::BitString`]: a fixed-length bit vector;
//! - [`Gene::GrayCode`]: a bit vector whose genetic operators re-wrap
//!   their results as Gray-coded genes, so that adjacent integer values
//!   stay one bit apart under mutation;
//! - [`Gene::Wildcard`]: a stateless placeholder that matches anything.
//!   It exists only inside [wildcard patterns](crate::WildcardChromosome);
//!   genetic operators on it fail with
//!   [`GaError::WildcardUnsupported`].
//!
//! Genes are value types: operators never mutate in place, they return
//! new `Gene` values. A gene is owned by exactly one chromosome slot.

mod bit_vector;

pub use bit_vector::BitVector;

use std::fmt;

use rand::Rng;

use crate::error::GaError;

/// A single heritable unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gene {
    /// A plain fixed-length bit vector.
    BitString(BitVector),
    /// A bit vector treated as Gray-coded; operator results stay Gray.
    GrayCode(BitVector),
    /// A pattern placeholder matching any gene.
    Wildcard,
}

impl Gene {
    /// The underlying bit vector of a concrete gene.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn bits(&self) -> Result<&BitVector, GaError> {
        self.vector_for("bits")
    }

    /// Number of bits in the gene.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn size(&self) -> Result<u64, GaError> {
        Ok(self.vector_for("size")?.len() as u64)
    }

    /// A gene with the same variant and length but uniformly random bits.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn randomise<R: Rng>(&self, rng: &mut R) -> Result<Gene, GaError> {
        let v = self.vector_for("randomise")?;
        Ok(self.rewrap(BitVector::random(v.len(), rng)))
    }

    /// Cross this gene with `other` at the given bit position.
    ///
    /// The result takes this gene's bits below `point` and `other`'s bits
    /// from `point` upward, and carries this gene's variant.
    ///
    /// # Errors
    ///
    /// [`GaError::WildcardUnsupported`] if either side is a wildcard;
    /// [`GaError::ConfigurationMismatch`] if the lengths differ.
    pub fn crossover(&self, other: &Gene, point: usize) -> Result<Gene, GaError> {
        let sv = self.vector_for("crossover")?;
        let ov = other.vector_for("crossover")?;
        if sv.len() != ov.len() {
            return Err(GaError::ConfigurationMismatch(format!(
                "gene lengths differ: {} and {}",
                sv.len(),
                ov.len()
            )));
        }
        let mut bits = sv.clone();
        for i in point..bits.len() {
            bits.set(i, ov.get(i).unwrap_or(false));
        }
        Ok(self.rewrap(bits))
    }

    /// Mutate each bit independently.
    ///
    /// With probability `p_mutate` a bit is set to a fresh *random* value,
    /// so the expected fraction of bits that actually flip is
    /// `p_mutate / 2`.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn mutate<R: Rng>(&self, p_mutate: f64, rng: &mut R) -> Result<Gene, GaError> {
        let v = self.vector_for("mutate")?;
        let mut bits = v.clone();
        for i in 0..bits.len() {
            if rng.random_range(0.0..1.0) < p_mutate {
                bits.set(i, rng.random_bool(0.5));
            }
        }
        Ok(self.rewrap(bits))
    }

    /// A measure of disagreement with `other` in [0.0, 1.0].
    ///
    /// 0.0 for identical genes and whenever either side is a wildcard;
    /// 1.0 across variants or lengths; otherwise the fraction of
    /// disagreeing bits.
    pub fn difference(&self, other: &Gene) -> f64 {
        match (self, other) {
            (Gene::Wildcard, _) | (_, Gene::Wildcard) => 0.0,
            (Gene::BitString(a), Gene::BitString(b))
            | (Gene::GrayCode(a), Gene::GrayCode(b)) => {
                if a.len() != b.len() {
                    1.0
                } else if a.is_empty() {
                    0.0
                } else {
                    a.xor(b).count_ones() as f64 / a.len() as f64
                }
            }
            _ => 1.0,
        }
    }

    /// Serialize the gene's data to bytes.
    ///
    /// A wildcard serializes as a single zero byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Gene::BitString(v) | Gene::GrayCode(v) => v.to_bytes(),
            Gene::Wildcard => vec![0],
        }
    }

    /// Gray-code the gene's bits, yielding a plain bit-string gene.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn gray_code(&self) -> Result<Gene, GaError> {
        Ok(Gene::BitString(self.vector_for("gray_code")?.gray_code()))
    }

    /// Decode the gene's Gray-coded bits, yielding a plain bit-string gene.
    ///
    /// # Errors
    /// [`GaError::WildcardUnsupported`] for [`Gene::Wildcard`].
    pub fn inverse_gray_code(&self) -> Result<Gene, GaError> {
        Ok(Gene::BitString(
            self.vector_for("inverse_gray_code")?.inverse_gray_code(),
        ))
    }

    /// Whether this gene supports normal-distribution perturbation.
    ///
    /// None of the bit-oriented variants do; the capability exists for
    /// the chromosome-level perturbation machinery.
    pub fn is_perturbable(&self) -> bool {
        match self {
            Gene::BitString(_) | Gene::GrayCode(_) | Gene::Wildcard => false,
        }
    }

    /// Perturb the gene. Non-perturbable genes pass through unchanged.
    pub fn perturb<R: Rng>(&self, _p_perturb: f64, _perturb_var: f64, _rng: &mut R) -> Gene {
        self.clone()
    }

    fn vector_for(&self, op: &'static str) -> Result<&BitVector, GaError> {
        match self {
            Gene::BitString(v) | Gene::GrayCode(v) => Ok(v),
            Gene::Wildcard => Err(GaError::WildcardUnsupported { op }),
        }
    }

    fn rewrap(&self, bits: BitVector) -> Gene {
        match self {
            Gene::BitString(_) => Gene::BitString(bits),
            Gene::GrayCode(_) => Gene::GrayCode(bits),
            Gene::Wildcard => Gene::Wildcard,
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gene::BitString(v) | Gene::GrayCode(v) => v.fmt(f),
            Gene::Wildcard => f.write_str("*"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
