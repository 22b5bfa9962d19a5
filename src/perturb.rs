//! Normal-distribution sampling for gene perturbation.
//!
//! Perturbation replaces a perturbable gene's value with a resample from
//! a zero-mean normal distribution of caller-chosen variance. Bounded
//! genes use the truncated variants: [`resample_truncated_normal`]
//! redraws until a sample lands inside the bounds (falling back after a
//! bounded number of attempts), while [`sample_truncated_normal`] simply
//! clamps an out-of-range sample to the nearest bound.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::GaError;

/// Maximum redraw attempts before [`resample_truncated_normal`] falls
/// back to the caller-supplied default.
pub const RESAMPLE_MAX: usize = 100;

/// Draw from a zero-mean normal distribution with the given variance.
///
/// # Errors
/// [`GaError::InvalidParameter`] for a negative or NaN variance.
pub fn sample_normal<R: Rng>(variance: f64, rng: &mut R) -> Result<f64, GaError> {
    let normal = Normal::new(0.0, variance.sqrt()).map_err(|_| {
        GaError::InvalidParameter(format!("invalid perturbation variance {variance}"))
    })?;
    Ok(normal.sample(rng))
}

/// Draw from a truncated normal by redrawing until a sample falls in
/// `[minimum, maximum]`, up to [`RESAMPLE_MAX`] attempts, then return
/// `fallback`.
///
/// # Errors
/// [`GaError::InvalidBounds`] when `minimum > maximum`.
pub fn resample_truncated_normal<R: Rng>(
    variance: f64,
    minimum: f64,
    maximum: f64,
    fallback: f64,
    rng: &mut R,
) -> Result<f64, GaError> {
    resample_truncated_normal_capped(variance, minimum, maximum, fallback, RESAMPLE_MAX, rng)
}

/// As [`resample_truncated_normal`] with a caller-chosen attempt cap.
pub fn resample_truncated_normal_capped<R: Rng>(
    variance: f64,
    minimum: f64,
    maximum: f64,
    fallback: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<f64, GaError> {
    if minimum > maximum {
        return Err(GaError::InvalidBounds {
            min: minimum,
            max: maximum,
        });
    }
    for _ in 0..max_attempts {
        let sample = sample_normal(variance, rng)?;
        if sample >= minimum && sample <= maximum {
            return Ok(sample);
        }
    }
    Ok(fallback)
}

/// Draw once from a normal distribution and clamp the sample to
/// `[minimum, maximum]`.
///
/// # Errors
/// [`GaError::InvalidBounds`] when `minimum > maximum`.
pub fn sample_truncated_normal<R: Rng>(
    variance: f64,
    minimum: f64,
    maximum: f64,
    rng: &mut R,
) -> Result<f64, GaError> {
    if minimum > maximum {
        return Err(GaError::InvalidBounds {
            min: minimum,
            max: maximum,
        });
    }
    Ok(sample_normal(variance, rng)?.clamp(minimum, maximum))
}

// ============================================================================
// Tests
// ============================================================================
