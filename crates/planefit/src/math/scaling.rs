//! Power-of-two magnitude scaling.
//!
//! ## Purpose
//!
//! This module picks a power-of-two scale for a set of values so that sums of
//! squares of the scaled values cannot overflow or underflow, whatever the
//! units of the input.
//!
//! ## Design notes
//!
//! * **Exact**: Dividing by a power of two only shifts the exponent, so scaled
//!   values carry the same digits as the originals.
//! * **Normal range**: The scale never drops below the smallest normal number,
//!   which keeps it representable for every finite input.

// External dependencies
use num_traits::Float;

/// Largest power of two not exceeding `max |v|`.
///
/// Returns one when the values are empty, all zero or not finite.
pub fn pow2_scale<T: Float>(values: &[T]) -> T {
    let max_abs = values
        .iter()
        .fold(T::zero(), |acc, &v| if v.abs() > acc { v.abs() } else { acc });

    if max_abs == T::zero() || !max_abs.is_finite() {
        return T::one();
    }

    let k = floor_log2(max_abs).max(floor_log2(T::min_positive_value()));
    T::from(2.0).map_or(T::one(), |two| two.powi(k))
}

/// Exponent `k` with `2^k <= v < 2^(k+1)`, for finite positive `v`.
fn floor_log2<T: Float>(v: T) -> i32 {
    let (mantissa, exponent, _) = v.integer_decode();
    let bits = 64 - mantissa.leading_zeros() as i32;
    i32::from(exponent) + bits - 1
}
