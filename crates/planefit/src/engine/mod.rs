//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: it validates the samples, splits them into
//! columns, runs the solver and evaluates the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: I/O / API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for plane fitting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for plane fitting.
pub mod output;
