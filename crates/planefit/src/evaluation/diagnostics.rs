//! Diagnostic metrics for plane fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics for a least-squares fit from
//! the observed targets and the fitted values.
//!
//! ## Design notes
//!
//! * **Residual-based**: Metrics are computed from residuals (z - ẑ).
//! * **Scaled sums**: Values are divided by a common power-of-two scale before
//!   squaring, so sums of squares stay finite for any finite input.
//! * **Rounding-level zero**: A sum of squares counts as zero when the
//!   deviations it sums are below `4 n ε` relative to the largest magnitude,
//!   the size of the rounding error in computing a mean of `n` values.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: SS_res, RMSE and MAE measure prediction error.
//! * **Goodness-of-Fit**: R² = 1 - SS_res / SS_tot.
//!
//! ## Invariants
//!
//! * Error metrics (RMSE, MAE, SS_res, SS_tot) are non-negative.
//! * R² <= 1 (R² = 1 is a perfect fit).
//! * A constant target yields R² = 1 when the fit is exact and `DegenerateData` otherwise.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::pow2_scale;
use crate::primitives::errors::PlaneFitError;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing plane fit quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Residual sum of squares, Σ(z - ẑ)².
    pub ss_res: T,

    /// Total sum of squares, Σ(z - z̄)².
    pub ss_tot: T,
}

impl<T: Float> Diagnostics<T> {
    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute diagnostic statistics from observed and fitted targets.
    pub fn compute(z: &[T], z_hat: &[T]) -> core::result::Result<Self, PlaneFitError> {
        let r_squared = Self::calculate_r_squared(z, z_hat)?;
        let sums = ScaledSums::new(z, z_hat);

        Ok(Diagnostics {
            r_squared,
            rmse: Self::calculate_rmse(z, z_hat),
            mae: Self::calculate_mae(z, z_hat),
            ss_res: sums.ss_res * sums.scale * sums.scale,
            ss_tot: sums.ss_tot * sums.scale * sums.scale,
        })
    }

    // ========================================================================
    // Error Metrics
    // ========================================================================

    /// Compute the root mean squared error (RMSE).
    /// RMSE = sqrt((1/n) * sum (z_i - ẑ_i)^2).
    pub fn calculate_rmse(z: &[T], z_hat: &[T]) -> T {
        if z.is_empty() {
            return T::zero();
        }
        let n_t = T::from(z.len()).unwrap_or(T::one());
        let sums = ScaledSums::new(z, z_hat);

        (sums.ss_res / n_t).sqrt() * sums.scale
    }

    /// Compute the mean absolute error (MAE).
    /// MAE = (1/n) * sum |z_i - ẑ_i|.
    pub fn calculate_mae(z: &[T], z_hat: &[T]) -> T {
        if z.is_empty() {
            return T::zero();
        }
        let n_t = T::from(z.len()).unwrap_or(T::one());
        let scale = pow2_scale(z).max(pow2_scale(z_hat));
        let sum = z
            .iter()
            .zip(z_hat)
            .fold(T::zero(), |acc, (&zi, &zh)| acc + (zi / scale - zh / scale).abs());

        sum / n_t * scale
    }

    // ========================================================================
    // Goodness-of-Fit
    // ========================================================================

    /// Compute the coefficient of determination.
    ///
    /// When the target has zero variance, R² is 1 for an exact fit and the
    /// call fails with `DegenerateData` otherwise.
    pub fn calculate_r_squared(z: &[T], z_hat: &[T]) -> core::result::Result<T, PlaneFitError> {
        let sums = ScaledSums::new(z, z_hat);
        let zero_level = sums.zero_level();

        if sums.ss_tot <= zero_level {
            return if sums.ss_res <= zero_level {
                Ok(T::one())
            } else {
                let ss_res = sums.ss_res * sums.scale * sums.scale;
                Err(PlaneFitError::DegenerateData {
                    ss_res: ss_res.to_f64().unwrap_or(f64::NAN),
                })
            };
        }

        Ok(T::one() - sums.ss_res / sums.ss_tot)
    }
}

// ============================================================================
// Scaled Sums of Squares
// ============================================================================

/// `SS_res` and `SS_tot` of `z / scale` and `ẑ / scale`.
struct ScaledSums<T> {
    n: usize,
    scale: T,
    ss_res: T,
    ss_tot: T,
}

impl<T: Float> ScaledSums<T> {
    fn new(z: &[T], z_hat: &[T]) -> Self {
        let scale = pow2_scale(z).max(pow2_scale(z_hat));
        let n = z.len();
        if n == 0 {
            return Self {
                n,
                scale,
                ss_res: T::zero(),
                ss_tot: T::zero(),
            };
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let mean = z.iter().fold(T::zero(), |acc, &v| acc + v / scale) / n_t;

        let (ss_res, ss_tot) = z.iter().zip(z_hat).fold(
            (T::zero(), T::zero()),
            |(res, tot), (&zi, &zh)| {
                let zi = zi / scale;
                let residual = zi - zh / scale;
                let deviation = zi - mean;
                (res + residual * residual, tot + deviation * deviation)
            },
        );

        Self {
            n,
            scale,
            ss_res,
            ss_tot,
        }
    }

    /// Largest sum of squares that is rounding noise, in scaled units.
    fn zero_level(&self) -> T {
        let n_t = T::from(self.n).unwrap_or(T::one());
        let four = T::from(4.0).unwrap_or(T::one());
        let noise = four * n_t * T::epsilon();
        n_t * noise * noise
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  R²:      {:.6}", self.r_squared)?;
        writeln!(f, "  RMSE:    {:.6}", self.rmse)?;
        writeln!(f, "  MAE:     {:.6}", self.mae)?;
        writeln!(f, "  SS_res:  {:.6}", self.ss_res)?;
        writeln!(f, "  SS_tot:  {:.6}", self.ss_tot)?;
        Ok(())
    }
}
