//! Input validation for plane fitting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for builder parameters and
//! input samples. It checks finiteness, matching lengths and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect collinearity; the solver reports that.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PlaneFitError;
use crate::primitives::sample::Sample;

/// Minimum number of samples that can determine a plane.
pub const MIN_PLANE_SAMPLES: usize = 3;

/// Minimum number of points that can determine a line.
pub const MIN_LINE_POINTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for plane fitting configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate samples for plane fitting.
    ///
    /// Fewer than three samples cannot determine a plane and are reported as
    /// a singular system.
    pub fn validate_samples<T: Float>(samples: &[Sample<T>]) -> Result<(), PlaneFitError> {
        if samples.len() < MIN_PLANE_SAMPLES {
            return Err(PlaneFitError::SingularMatrix {
                samples: samples.len(),
            });
        }

        for (i, s) in samples.iter().enumerate() {
            if !s.is_finite() {
                return Err(PlaneFitError::InvalidNumericValue(format!(
                    "sample[{}]=({}, {}, {})",
                    i,
                    s.x.to_f64().unwrap_or(f64::NAN),
                    s.y.to_f64().unwrap_or(f64::NAN),
                    s.z.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate paired arrays for line fitting.
    pub fn validate_pairs<T: Float>(x: &[T], y: &[T]) -> Result<(), PlaneFitError> {
        let n = x.len();
        if n != y.len() {
            return Err(PlaneFitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        if n < MIN_LINE_POINTS {
            return Err(PlaneFitError::SingularMatrix { samples: n });
        }

        for i in 0..n {
            if !x[i].is_finite() {
                return Err(PlaneFitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(PlaneFitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the numerical tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), PlaneFitError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(PlaneFitError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Reject a builder on which some parameter was set twice.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), PlaneFitError> {
        match duplicate {
            Some(parameter) => Err(PlaneFitError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
