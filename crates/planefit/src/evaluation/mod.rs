//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing of a fit: goodness-of-fit metrics
//! computed from observed and fitted target values.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: I/O / API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit diagnostics.
pub mod diagnostics;
