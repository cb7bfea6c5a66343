//! Output types for plane fitting.
//!
//! ## Purpose
//!
//! This module defines `FitResult`, which holds the fitted coefficients, R²,
//! and the optional diagnostics and residuals requested through the builder.
//!
//! ## Design notes
//!
//! * **Optional Outputs**: Extra outputs use `Option` and are only populated on request.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `r_squared <= 1`.
//! * When present, `residuals` has one entry per input sample, in input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond prediction.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::PlaneCoefficients;
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Least-squares plane `z = a*x + b*y + c` with its goodness of fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Slope along x.
    pub a: T,

    /// Slope along y.
    pub b: T,

    /// Intercept.
    pub c: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Number of samples the plane was fitted to.
    pub samples: usize,

    /// Goodness-of-fit metrics, when requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Residuals `z_i - ẑ_i` in input order, when requested.
    pub residuals: Option<Vec<T>>,
}

impl<T: Float> FitResult<T> {
    /// Predict z for the given predictors.
    #[inline]
    pub fn predict(&self, x: T, y: T) -> T {
        self.coefficients().predict(x, y)
    }

    /// The fitted coefficients alone.
    pub fn coefficients(&self) -> PlaneCoefficients<T> {
        PlaneCoefficients {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }

    /// Check if diagnostics were computed.
    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    /// Check if residuals were retained.
    pub fn has_residuals(&self) -> bool {
        self.residuals.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Precision flag of the formatter wins, default 4 places
        let p = f.precision().unwrap_or(4);

        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:    {}", self.samples)?;
        writeln!(f)?;
        writeln!(f, "Plane: z = a*x + b*y + c")?;
        writeln!(f, "  a (x slope): {:.*}", p, self.a)?;
        writeln!(f, "  b (y slope): {:.*}", p, self.b)?;
        writeln!(f, "  c:           {:.*}", p, self.c)?;
        writeln!(f, "  R²:          {:.*}", p, self.r_squared)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        if let Some(residuals) = &self.residuals {
            writeln!(f)?;
            writeln!(f, "Residuals:")?;
            writeln!(f, "{:>8} {:>14}", "Index", "Residual")?;
            writeln!(f, "  {:-<21}", "")?;
            for (i, r) in residuals.iter().enumerate() {
                writeln!(f, "{:>8} {:>14.*}", i, p + 2, r)?;
            }
        }

        Ok(())
    }
}
