//! Execution engine for plane fitting.
//!
//! ## Purpose
//!
//! This module runs a complete fit: validation, moment accumulation, solving
//! the normal equations, prediction and goodness-of-fit evaluation.
//!
//! ## Design notes
//!
//! * **Single pass pipeline**: Each stage runs once; any failure stops the fit.
//! * **Pure**: No state survives a call; the same input always yields the same output.
//!
//! ## Invariants
//!
//! * A successful run returns finite coefficients and `r_squared <= 1`.
//!
//! ## Non-goals
//!
//! * This module does not retry or recover from numerical failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{Moments, PlaneCoefficients, PlaneSolver};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::scaling::pow2_scale;
use crate::primitives::errors::PlaneFitError;
use crate::primitives::sample::{Columns, Sample};

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a single fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFitConfig<T> {
    /// Relative threshold for singularity and constant-predictor decisions.
    pub tolerance: T,

    /// Attach `Diagnostics` to the result.
    pub return_diagnostics: bool,

    /// Attach per-sample residuals to the result.
    pub return_residuals: bool,
}

impl<T: Float> PlaneFitConfig<T> {
    /// Default tolerance: `1e-12`, or `16 ε` for types too coarse for it.
    pub fn default_tolerance() -> T {
        let fixed = T::from(1e-12).unwrap_or_else(T::epsilon);
        let coarse = T::epsilon() * T::from(16.0).unwrap_or_else(T::one);
        fixed.max(coarse)
    }
}

impl<T: Float> Default for PlaneFitConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: Self::default_tolerance(),
            return_diagnostics: false,
            return_residuals: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs plane fits for a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct PlaneFitExecutor<T> {
    config: PlaneFitConfig<T>,
}

impl<T: PlaneSolver> PlaneFitExecutor<T> {
    /// Create an executor from a validated configuration.
    pub fn new(config: PlaneFitConfig<T>) -> Self {
        Self { config }
    }

    /// Fit `z = a*x + b*y + c` to `samples`.
    pub fn run(&self, samples: &[Sample<T>]) -> Result<FitResult<T>, PlaneFitError> {
        Validator::validate_samples(samples)?;

        let tol = self.config.tolerance;
        let cols = Columns::from_samples(samples);

        // Solve in power-of-two units; the scales are exact and cancel
        let (sx, sy, sz) = (
            pow2_scale(&cols.x),
            pow2_scale(&cols.y),
            pow2_scale(&cols.z),
        );
        let unit = cols.scaled(sx, sy, sz);
        let moments = Moments::from_columns(&unit.x, &unit.y, &unit.z);
        trace!("scales: ({:?}, {:?}, {:?}), moments: {:?}", sx, sy, sz, moments);

        let coeffs = PlaneCoefficients::solve(&moments, tol)
            .ok_or(PlaneFitError::SingularMatrix {
                samples: samples.len(),
            })?
            .rescale(sx, sy, sz);
        debug!(
            "solved plane over {} samples: a={:?} b={:?} c={:?}",
            samples.len(),
            coeffs.a,
            coeffs.b,
            coeffs.c
        );

        let fitted: Vec<T> = cols
            .x
            .iter()
            .zip(&cols.y)
            .map(|(&x, &y)| coeffs.predict(x, y))
            .collect();

        let diagnostics = Diagnostics::compute(&cols.z, &fitted)?;
        debug!("r_squared={:?}", diagnostics.r_squared);

        let residuals = self.config.return_residuals.then(|| {
            cols.z
                .iter()
                .zip(&fitted)
                .map(|(&z, &zh)| z - zh)
                .collect::<Vec<T>>()
        });

        Ok(FitResult {
            a: coeffs.a,
            b: coeffs.b,
            c: coeffs.c,
            r_squared: diagnostics.r_squared,
            samples: samples.len(),
            diagnostics: self.config.return_diagnostics.then_some(diagnostics),
            residuals,
        })
    }
}
