//! Error types for plane fitting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while loading
//! samples, configuring a fit, or solving the normal equations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (sample counts, line numbers).
//! * **Deferred**: Builder misconfiguration is reported from `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Numerical failures**: Singular normal equations, degenerate targets.
//! 2. **Input validation**: Non-finite values, mismatched lengths.
//! 3. **Parsing**: Rows that are not three numbers, unreadable files.
//! 4. **Configuration**: Invalid or duplicated builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for plane fitting operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneFitError {
    /// The normal-equations matrix cannot be inverted: fewer than 3 samples,
    /// or the samples are collinear in the `(x, y)` plane.
    SingularMatrix {
        /// Number of samples provided.
        samples: usize,
    },

    /// All target values are identical but the fit leaves a nonzero residual,
    /// so R² is undefined.
    DegenerateData {
        /// Residual sum of squares of the fit.
        ss_res: f64,
    },

    /// A dataset row cannot be parsed as three numbers.
    MalformedInput {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with the row.
        reason: String,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Numerical tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The dataset source could not be read.
    Io(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PlaneFitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::SingularMatrix { samples } => write!(
                f,
                "Singular normal equations: {samples} samples do not determine a plane \
                 (need at least 3 non-collinear points)"
            ),
            Self::DegenerateData { ss_res } => write!(
                f,
                "Degenerate data: target has zero variance but residual sum of squares is {ss_res}"
            ),
            Self::MalformedInput { line, reason } => {
                write!(f, "Malformed input at line {line}: {reason}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
            ),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PlaneFitError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for PlaneFitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
