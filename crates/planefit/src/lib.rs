//! # planefit: Least-Squares Plane Fitting for Rust
//!
//! Fits the plane `z = a*x + b*y + c` to a set of `(x, y, z)` samples with
//! ordinary least squares and reports the coefficient of determination (R²).
//!
//! ## Quick Start
//!
//! ```rust
//! use planefit::prelude::*;
//!
//! let samples: Vec<Sample<f64>> = vec![
//!     Sample::new(0.0, 0.0, 0.0),
//!     Sample::new(1.0, 0.0, 1.0),
//!     Sample::new(0.0, 1.0, 2.0),
//!     Sample::new(1.0, 1.0, 3.0),
//! ];
//!
//! let result = PlaneFit::new().build()?.fit(&samples)?;
//!
//! assert!((result.a - 1.0).abs() < 1e-12);
//! assert!((result.b - 2.0).abs() < 1e-12);
//! assert!(result.c.abs() < 1e-12);
//! assert!((result.r_squared - 1.0).abs() < 1e-12);
//! # Result::<(), PlaneFitError>::Ok(())
//! ```
//!
//! For the common case the free function [`fit`](crate::api::fit) skips the
//! builder:
//!
//! ```rust
//! use planefit::prelude::*;
//!
//! let samples = [(0.0, 0.0, 1.0), (2.0, 0.0, 5.0), (0.0, 3.0, -2.0), (1.0, 1.0, 2.0)]
//!     .map(Sample::from);
//!
//! let result = fit(&samples)?;
//! println!("{}", result);
//! # Result::<(), PlaneFitError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use planefit::prelude::*;
//!
//! let samples = vec![
//!     Sample::new(0.0, 0.0, 0.1),
//!     Sample::new(1.0, 0.0, 0.9),
//!     Sample::new(0.0, 1.0, 2.1),
//!     Sample::new(1.0, 1.0, 2.9),
//!     Sample::new(2.0, 1.0, 4.1),
//! ];
//!
//! let model = PlaneFit::new()
//!     .tolerance(1e-10)       // Singularity / constant-predictor threshold
//!     .return_diagnostics()   // RMSE, MAE, SS_res, SS_tot
//!     .return_residuals()     // z_i - ẑ_i for every sample
//!     .build()?;
//!
//! let result = model.fit(&samples)?;
//! println!("{}", result);
//! # Result::<(), PlaneFitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<FitResult<T>, PlaneFitError>`:
//!
//! - **`SingularMatrix`**: fewer than 3 samples, or the samples are collinear
//!   in the `(x, y)` plane.
//! - **`DegenerateData`**: all `z` values are identical but the fit leaves a
//!   nonzero residual.
//! - **`MalformedInput`**: a row of a delimited file is not three numbers.
//!
//! ## Minimal Usage (no_std)
//!
//! The fitting core only needs `alloc`. Disable default features to drop the
//! standard library, the CSV loader and the command-line binary:
//!
//! ```toml
//! [dependencies]
//! planefit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure linear algebra.
mod math;

// Layer 3: Algorithms - least-squares accumulation and solving.
mod algorithms;

// Layer 4: Evaluation - goodness-of-fit metrics.
mod evaluation;

// Layer 5: Engine - validation, orchestration and output.
mod engine;

// Layer 6: I/O - delimited sample files.
#[cfg(feature = "std")]
mod io;

// High-level fluent API.
pub mod api;

// Standard planefit prelude.
pub mod prelude {
    pub use crate::api::{
        fit, fit_line, Diagnostics, FitResult, LinearFit, PlaneFitBuilder as PlaneFit,
        PlaneFitError, PlaneFitModel, Sample,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{read_samples, read_samples_from_path};
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    #[cfg(feature = "std")]
    pub mod io {
        pub use crate::io::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
