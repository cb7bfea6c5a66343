//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the core data types and logic for ordinary least
//! squares, including:
//! - Generic and SIMD-optimized accumulation of first and second moments.
//! - Assembly of the normal equations for `z = a*x + b*y + c`.
//! - Coefficient recovery for planes and for simple `y = slope*x + intercept` lines.
//!
//! ## Design notes
//!
//! * **Centering**: Moments are accumulated about the sample means (two passes),
//!   which keeps the normal equations well conditioned when the data sit far
//!   from the origin.
//! * **Relative degeneracy**: A predictor is treated as constant when its
//!   centered sum of squares is at or below `tol² * Σu²`, i.e. when its spread
//!   is below `tol` relative to its magnitude. Callers pass columns already
//!   divided by a power-of-two scale (see `math::scaling`) so `Σu²` stays finite.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::linalg::solve_symmetric;
use crate::math::scaling::pow2_scale;

/// Six accumulated sums, in the order documented by each accumulator.
pub type Sums6<T> = (T, T, T, T, T, T);

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar accumulation of raw sums.
///
/// Returns `(Σx, Σy, Σz, Σx², Σy², Σz²)`.
#[inline]
pub fn accumulate_sums_scalar<T: Float>(x: &[T], y: &[T], z: &[T]) -> Sums6<T> {
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_z = T::zero();
    let mut sum_xx = T::zero();
    let mut sum_yy = T::zero();
    let mut sum_zz = T::zero();

    for ((&xi, &yi), &zi) in x.iter().zip(y).zip(z) {
        sum_x = sum_x + xi;
        sum_y = sum_y + yi;
        sum_z = sum_z + zi;
        sum_xx = sum_xx + xi * xi;
        sum_yy = sum_yy + yi * yi;
        sum_zz = sum_zz + zi * zi;
    }

    (sum_x, sum_y, sum_z, sum_xx, sum_yy, sum_zz)
}

/// Scalar accumulation of centered cross products.
///
/// Returns `(Sxx, Sxy, Syy, Sxz, Syz, Szz)` where `Suv = Σ(u - ū)(v - v̄)`.
#[inline]
pub fn accumulate_centered_scalar<T: Float>(
    x: &[T],
    y: &[T],
    z: &[T],
    x_mean: T,
    y_mean: T,
    z_mean: T,
) -> Sums6<T> {
    let mut sxx = T::zero();
    let mut sxy = T::zero();
    let mut syy = T::zero();
    let mut sxz = T::zero();
    let mut syz = T::zero();
    let mut szz = T::zero();

    for ((&xi, &yi), &zi) in x.iter().zip(y).zip(z) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        let dz = zi - z_mean;

        sxx = sxx + dx * dx;
        sxy = sxy + dx * dy;
        syy = syy + dy * dy;
        sxz = sxz + dx * dz;
        syz = syz + dy * dz;
        szz = szz + dz * dz;
    }

    (sxx, sxy, syy, sxz, syz, szz)
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

#[inline(always)]
fn load_f64x2(s: &[f64], i: usize) -> f64x2 {
    f64x2::new([s[i], s[i + 1]])
}

#[inline(always)]
fn load_f32x8(s: &[f32], i: usize) -> f32x8 {
    f32x8::new([
        s[i],
        s[i + 1],
        s[i + 2],
        s[i + 3],
        s[i + 4],
        s[i + 5],
        s[i + 6],
        s[i + 7],
    ])
}

macro_rules! simd_accumulators {
    ($sums:ident, $centered:ident, $float:ty, $vec:ty, $lanes:expr, $load:ident) => {
        /// SIMD-optimized accumulation of raw sums.
        ///
        /// Returns `(Σx, Σy, Σz, Σx², Σy², Σz²)`.
        #[inline]
        pub fn $sums(x: &[$float], y: &[$float], z: &[$float]) -> Sums6<$float> {
            debug_assert!(x.len() == y.len() && y.len() == z.len());
            let n = x.len();

            let zero = <$vec>::splat(0.0);
            let (mut s_x, mut s_y, mut s_z) = (zero, zero, zero);
            let (mut s_xx, mut s_yy, mut s_zz) = (zero, zero, zero);

            let mut i = 0;
            while i + $lanes <= n {
                let xv = $load(x, i);
                let yv = $load(y, i);
                let zv = $load(z, i);

                s_x += xv;
                s_y += yv;
                s_z += zv;
                s_xx += xv * xv;
                s_yy += yv * yv;
                s_zz += zv * zv;

                i += $lanes;
            }

            let mut a_x = s_x.reduce_add();
            let mut a_y = s_y.reduce_add();
            let mut a_z = s_z.reduce_add();
            let mut a_xx = s_xx.reduce_add();
            let mut a_yy = s_yy.reduce_add();
            let mut a_zz = s_zz.reduce_add();

            while i < n {
                a_x += x[i];
                a_y += y[i];
                a_z += z[i];
                a_xx += x[i] * x[i];
                a_yy += y[i] * y[i];
                a_zz += z[i] * z[i];
                i += 1;
            }

            (a_x, a_y, a_z, a_xx, a_yy, a_zz)
        }

        /// SIMD-optimized accumulation of centered cross products.
        ///
        /// Returns `(Sxx, Sxy, Syy, Sxz, Syz, Szz)`.
        #[inline]
        pub fn $centered(
            x: &[$float],
            y: &[$float],
            z: &[$float],
            x_mean: $float,
            y_mean: $float,
            z_mean: $float,
        ) -> Sums6<$float> {
            debug_assert!(x.len() == y.len() && y.len() == z.len());
            let n = x.len();

            let xm = <$vec>::splat(x_mean);
            let ym = <$vec>::splat(y_mean);
            let zm = <$vec>::splat(z_mean);

            let zero = <$vec>::splat(0.0);
            let (mut s_xx, mut s_xy, mut s_yy) = (zero, zero, zero);
            let (mut s_xz, mut s_yz, mut s_zz) = (zero, zero, zero);

            let mut i = 0;
            while i + $lanes <= n {
                let dx = $load(x, i) - xm;
                let dy = $load(y, i) - ym;
                let dz = $load(z, i) - zm;

                s_xx += dx * dx;
                s_xy += dx * dy;
                s_yy += dy * dy;
                s_xz += dx * dz;
                s_yz += dy * dz;
                s_zz += dz * dz;

                i += $lanes;
            }

            let mut a_xx = s_xx.reduce_add();
            let mut a_xy = s_xy.reduce_add();
            let mut a_yy = s_yy.reduce_add();
            let mut a_xz = s_xz.reduce_add();
            let mut a_yz = s_yz.reduce_add();
            let mut a_zz = s_zz.reduce_add();

            while i < n {
                let dx = x[i] - x_mean;
                let dy = y[i] - y_mean;
                let dz = z[i] - z_mean;

                a_xx += dx * dx;
                a_xy += dx * dy;
                a_yy += dy * dy;
                a_xz += dx * dz;
                a_yz += dy * dz;
                a_zz += dz * dz;

                i += 1;
            }

            (a_xx, a_xy, a_yy, a_xz, a_yz, a_zz)
        }
    };
}

simd_accumulators!(
    accumulate_sums_simd_f64,
    accumulate_centered_simd_f64,
    f64,
    f64x2,
    2,
    load_f64x2
);

simd_accumulators!(
    accumulate_sums_simd_f32,
    accumulate_centered_simd_f32,
    f32,
    f32x8,
    8,
    load_f32x8
);

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for type-specific moment accumulation.
///
/// The default methods are the generic scalar loops; `f64` and `f32` override
/// them with SIMD versions.
pub trait PlaneSolver: Float + Debug {
    /// Accumulate `(Σx, Σy, Σz, Σx², Σy², Σz²)`.
    #[inline]
    fn accumulate_sums(x: &[Self], y: &[Self], z: &[Self]) -> Sums6<Self> {
        accumulate_sums_scalar(x, y, z)
    }

    /// Accumulate `(Sxx, Sxy, Syy, Sxz, Syz, Szz)` about the given means.
    #[inline]
    fn accumulate_centered(
        x: &[Self],
        y: &[Self],
        z: &[Self],
        x_mean: Self,
        y_mean: Self,
        z_mean: Self,
    ) -> Sums6<Self> {
        accumulate_centered_scalar(x, y, z, x_mean, y_mean, z_mean)
    }
}

impl PlaneSolver for f64 {
    #[inline]
    fn accumulate_sums(x: &[f64], y: &[f64], z: &[f64]) -> Sums6<f64> {
        accumulate_sums_simd_f64(x, y, z)
    }

    #[inline]
    fn accumulate_centered(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        x_mean: f64,
        y_mean: f64,
        z_mean: f64,
    ) -> Sums6<f64> {
        accumulate_centered_simd_f64(x, y, z, x_mean, y_mean, z_mean)
    }
}

impl PlaneSolver for f32 {
    #[inline]
    fn accumulate_sums(x: &[f32], y: &[f32], z: &[f32]) -> Sums6<f32> {
        accumulate_sums_simd_f32(x, y, z)
    }

    #[inline]
    fn accumulate_centered(
        x: &[f32],
        y: &[f32],
        z: &[f32],
        x_mean: f32,
        y_mean: f32,
        z_mean: f32,
    ) -> Sums6<f32> {
        accumulate_centered_simd_f32(x, y, z, x_mean, y_mean, z_mean)
    }
}

// ============================================================================
// Moments
// ============================================================================

/// First and second moments of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments<T> {
    /// Number of samples.
    pub n: usize,

    /// Mean of x.
    pub x_mean: T,
    /// Mean of y.
    pub y_mean: T,
    /// Mean of z.
    pub z_mean: T,

    /// Raw sum of squares of x (scale reference for `sxx`).
    pub sum_xx: T,
    /// Raw sum of squares of y (scale reference for `syy`).
    pub sum_yy: T,
    /// Raw sum of squares of z (scale reference for `szz`).
    pub sum_zz: T,

    /// Σ(x - x̄)².
    pub sxx: T,
    /// Σ(x - x̄)(y - ȳ).
    pub sxy: T,
    /// Σ(y - ȳ)².
    pub syy: T,
    /// Σ(x - x̄)(z - z̄).
    pub sxz: T,
    /// Σ(y - ȳ)(z - z̄).
    pub syz: T,
    /// Σ(z - z̄)².
    pub szz: T,
}

impl<T: PlaneSolver> Moments<T> {
    /// Accumulate moments from column slices of equal length.
    pub fn from_columns(x: &[T], y: &[T], z: &[T]) -> Self {
        let n = x.len();
        let n_t = T::from(n.max(1)).unwrap_or(T::one());

        let (sum_x, sum_y, sum_z, sum_xx, sum_yy, sum_zz) = T::accumulate_sums(x, y, z);
        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;
        let z_mean = sum_z / n_t;

        let (sxx, sxy, syy, sxz, syz, szz) =
            T::accumulate_centered(x, y, z, x_mean, y_mean, z_mean);

        Self {
            n,
            x_mean,
            y_mean,
            z_mean,
            sum_xx,
            sum_yy,
            sum_zz,
            sxx,
            sxy,
            syy,
            sxz,
            syz,
            szz,
        }
    }
}

// ============================================================================
// Normal Equations
// ============================================================================

/// Normal equations `XᵀX β = Xᵀz` for the design `[x, y, 1]`.
///
/// Stored in centered coordinates, so the intercept row decouples:
/// `β = (a, b, c')` with `c = z̄ + c' - a*x̄ - b*ȳ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEquations<T> {
    /// Symmetric 3x3 system matrix.
    pub matrix: [[T; 3]; 3],

    /// Right-hand side.
    pub rhs: [T; 3],
}

impl<T: Float> NormalEquations<T> {
    /// Assemble the centered normal equations.
    pub fn from_moments(m: &Moments<T>) -> Self {
        let n_t = T::from(m.n).unwrap_or(T::zero());
        let zero = T::zero();

        // Σx' = Σy' = 0 after centering
        Self {
            matrix: [[m.sxx, m.sxy, zero], [m.sxy, m.syy, zero], [zero, zero, n_t]],
            rhs: [m.sxz, m.syz, zero],
        }
    }
}

// ============================================================================
// PlaneCoefficients
// ============================================================================

/// Coefficients of the plane `z = a*x + b*y + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCoefficients<T> {
    /// Slope along x.
    pub a: T,

    /// Slope along y.
    pub b: T,

    /// Intercept.
    pub c: T,
}

impl<T: Float> PlaneCoefficients<T> {
    /// Predict z for the given predictors.
    #[inline]
    pub fn predict(&self, x: T, y: T) -> T {
        self.a * x + self.b * y + self.c
    }

    /// Solve the normal equations described by `moments`.
    ///
    /// Returns `None` when fewer than 3 samples are present, when either
    /// predictor is constant, or when the predictors are collinear.
    pub fn solve(moments: &Moments<T>, tol: T) -> Option<Self> {
        if moments.n < 3 {
            return None;
        }

        // A constant predictor leaves a zero row after centering
        let tol_sq = tol * tol;
        if moments.sxx <= tol_sq * moments.sum_xx || moments.syy <= tol_sq * moments.sum_yy {
            return None;
        }

        let eq = NormalEquations::from_moments(moments);
        let [a, b, c_shift] = solve_symmetric(eq.matrix, eq.rhs, tol)?;

        let c = moments.z_mean + c_shift - a * moments.x_mean - b * moments.y_mean;

        Some(Self { a, b, c })
    }

    /// Map coefficients fitted on `(x/sx, y/sy, z/sz)` back to original units.
    pub fn rescale(&self, sx: T, sy: T, sz: T) -> Self {
        Self {
            a: self.a * (sz / sx),
            b: self.b * (sz / sy),
            c: self.c * sz,
        }
    }
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Mean of x-values
    pub x_mean: T,

    /// Mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Fit Ordinary Least Squares (OLS) regression of `y` on `x`.
    ///
    /// Returns `None` for fewer than 2 points or (numerically) constant `x`.
    pub fn fit_ols(x: &[T], y: &[T], tol: T) -> Option<Self> {
        let n = x.len();
        if n < 2 {
            return None;
        }

        let n_t = T::from(n).unwrap_or(T::one());

        // Work in power-of-two units so no sum of squares overflows
        let sx = pow2_scale(x);
        let sy = pow2_scale(y);

        let mut sum_x = T::zero();
        let mut sum_y = T::zero();
        let mut sum_xx = T::zero();

        for (&xi, &yi) in x.iter().zip(y) {
            let (xi, yi) = (xi / sx, yi / sy);
            sum_x = sum_x + xi;
            sum_y = sum_y + yi;
            sum_xx = sum_xx + xi * xi;
        }

        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();

        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi / sx - x_mean;
            let dy = yi / sy - y_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * dy;
        }

        if variance <= tol * tol * sum_xx {
            return None;
        }

        let slope = covariance / variance;
        let intercept = y_mean - slope * x_mean;

        Some(Self {
            slope: slope * (sy / sx),
            intercept: intercept * sy,
            x_mean: x_mean * sx,
            y_mean: y_mean * sy,
        })
    }
}
