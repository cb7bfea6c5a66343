//! A single `(x, y, z)` observation and column extraction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// One observation of the two predictors `x`, `y` and the target `z`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample<T> {
    /// First predictor.
    pub x: T,

    /// Second predictor.
    pub y: T,

    /// Target value.
    pub z: T,
}

impl<T: Float> Sample<T> {
    /// Create a sample from its three coordinates.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Whether all three coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T> From<(T, T, T)> for Sample<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<[T; 3]> for Sample<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Samples split into one contiguous vector per coordinate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Columns<T> {
    /// All x values, in sample order.
    pub x: Vec<T>,
    /// All y values, in sample order.
    pub y: Vec<T>,
    /// All z values, in sample order.
    pub z: Vec<T>,
}

impl<T: Copy> Columns<T> {
    /// Split samples into columns.
    pub fn from_samples(samples: &[Sample<T>]) -> Self {
        let mut cols = Self {
            x: Vec::with_capacity(samples.len()),
            y: Vec::with_capacity(samples.len()),
            z: Vec::with_capacity(samples.len()),
        };
        for s in samples {
            cols.x.push(s.x);
            cols.y.push(s.y);
            cols.z.push(s.z);
        }
        cols
    }
}

impl<T: Float> Columns<T> {
    /// Divide every column by its own scale.
    pub fn scaled(&self, sx: T, sy: T, sz: T) -> Self {
        Self {
            x: self.x.iter().map(|&v| v / sx).collect(),
            y: self.y.iter().map(|&v| v / sy).collect(),
            z: self.z.iter().map(|&v| v / sz).collect(),
        }
    }
}
