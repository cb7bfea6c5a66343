//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the least-squares algorithms: moment accumulation,
//! normal-equation assembly and coefficient recovery for planes and lines.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: I/O / API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares regression for planes and lines.
pub mod regression;
