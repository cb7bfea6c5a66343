//! Layer 6: I/O
//!
//! # Purpose
//!
//! This layer reads samples from delimited text sources. It requires `std`.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: I/O / API ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// CSV sample loading.
pub mod csv;
