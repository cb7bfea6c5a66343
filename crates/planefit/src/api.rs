//! High-level API for plane fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a fit, the resulting reusable model, and free
//! functions for the common one-shot cases.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `f32` and `f64`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PlaneFitBuilder`] via `PlaneFit::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.return_diagnostics()`, ...).
//! 3. Call `.build()` to get a [`PlaneFitModel`], then `.fit(&samples)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::PlaneSolver;
use crate::engine::executor::{PlaneFitConfig, PlaneFitExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::regression::{LinearFit, PlaneCoefficients};
pub use crate::engine::output::FitResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::PlaneFitError;
pub use crate::primitives::sample::Sample;

#[cfg(feature = "std")]
pub use crate::io::csv::{read_samples, read_samples_from_path};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a plane fit.
#[derive(Debug, Clone)]
pub struct PlaneFitBuilder<T> {
    /// Relative threshold for singularity and constant-predictor decisions.
    pub tolerance: Option<T>,

    /// Attach goodness-of-fit diagnostics to the result.
    pub return_diagnostics: Option<bool>,

    /// Attach per-sample residuals to the result.
    pub return_residuals: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PlaneFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PlaneFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            return_diagnostics: None,
            return_residuals: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Set the relative tolerance used to decide singularity and constant predictors.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.mark_duplicate(self.tolerance.is_some(), "tolerance");
        self.tolerance = Some(tolerance);
        self
    }

    /// Include RMSE, MAE, SS_res and SS_tot in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.mark_duplicate(self.return_diagnostics.is_some(), "return_diagnostics");
        self.return_diagnostics = Some(true);
        self
    }

    /// Include per-sample residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        self.mark_duplicate(self.return_residuals.is_some(), "return_residuals");
        self.return_residuals = Some(true);
        self
    }

    /// Validate the configuration and build a reusable model.
    pub fn build(self) -> Result<PlaneFitModel<T>, PlaneFitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = self
            .tolerance
            .unwrap_or_else(PlaneFitConfig::default_tolerance);
        Validator::validate_tolerance(tolerance)?;

        Ok(PlaneFitModel {
            config: PlaneFitConfig {
                tolerance,
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
                return_residuals: self.return_residuals.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated plane fitting configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFitModel<T> {
    config: PlaneFitConfig<T>,
}

impl<T: PlaneSolver> PlaneFitModel<T> {
    /// Fit `z = a*x + b*y + c` to `samples`.
    pub fn fit(&self, samples: &[Sample<T>]) -> Result<FitResult<T>, PlaneFitError> {
        PlaneFitExecutor::new(self.config).run(samples)
    }

    /// Fit a line `y = slope*x + intercept` with this model's tolerance.
    pub fn fit_line(&self, x: &[T], y: &[T]) -> Result<LinearFit<T>, PlaneFitError> {
        Validator::validate_pairs(x, y)?;
        LinearFit::fit_ols(x, y, self.config.tolerance)
            .ok_or(PlaneFitError::SingularMatrix { samples: x.len() })
    }

    /// The relative tolerance in effect.
    pub fn tolerance(&self) -> T {
        self.config.tolerance
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Fit `z = a*x + b*y + c` with default settings.
pub fn fit<T: PlaneSolver>(samples: &[Sample<T>]) -> Result<FitResult<T>, PlaneFitError> {
    PlaneFitBuilder::new().build()?.fit(samples)
}

/// Fit `y = slope*x + intercept` with default settings.
pub fn fit_line<T: PlaneSolver>(x: &[T], y: &[T]) -> Result<LinearFit<T>, PlaneFitError> {
    PlaneFitBuilder::new().build()?.fit_line(x, y)
}
