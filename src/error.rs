//! Error types for the GA core.
//!
//! Every error here signals a programmer or configuration fault, not a
//! transient condition: incompatible chromosome configurations, operations
//! on wildcard placeholders, reads of a cost that was never computed.
//! None of them succeed on retry, so there is no retry policy — callers
//! decide whether to abort the run.

use thiserror::Error;

/// Error type for all fallible GA operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Two chromosomes (or genes) do not share a gene-slot configuration.
    #[error("configuration mismatch: {0}")]
    ConfigurationMismatch(String),

    /// Cost vectors of different lengths were compared.
    #[error("cost vectors have different lengths: {left} and {right}")]
    CostLengthMismatch { left: usize, right: usize },

    /// A genetic operator was invoked on a wildcard gene or pattern.
    ///
    /// Wildcards express commonality between chromosomes for matching;
    /// they are not candidate solutions and cannot be randomised,
    /// crossed, mutated, or sized.
    #[error("`{op}` is not supported on a wildcard")]
    WildcardUnsupported { op: &'static str },

    /// A chromosome's cost was read or compared before `calc_cost`.
    #[error("cost has not been computed; call calc_cost first")]
    CostNotComputed,

    /// Perturbation was requested on a chromosome with no perturbable genes.
    #[error("chromosome has no perturbable genes")]
    NotPerturbable,

    /// Truncated-normal bounds with minimum above maximum.
    #[error("perturbation minimum {min} exceeds maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// A parameter outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
