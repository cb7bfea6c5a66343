//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure linear algebra used by the solvers. It has no
//! regression-specific logic.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Dense linear system solving.
pub mod linalg;

/// Power-of-two magnitude scaling.
pub mod scaling;
