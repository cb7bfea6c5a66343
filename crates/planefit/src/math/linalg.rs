//! Dense linear system solving for small symmetric systems.
//!
//! ## Purpose
//!
//! This module solves the `N x N` symmetric positive semi-definite systems that
//! arise from least-squares normal equations, reporting singularity instead of
//! returning meaningless coefficients.
//!
//! ## Design notes
//!
//! * **Equilibration**: Rows and columns are scaled by `1/sqrt(a_ii)` so the
//!   system has a unit diagonal. Pivot magnitudes then measure linear
//!   dependence independently of the units of each predictor.
//! * **Pivoting**: Gaussian elimination with partial (row) pivoting.
//! * **Fixed size**: Const-generic arrays, no allocation.
//!
//! ## Invariants
//!
//! * A returned solution contains only finite values.
//! * `None` is returned iff some scaled pivot is at or below the tolerance
//!   (or a diagonal entry is not strictly positive).
//!
//! ## Non-goals
//!
//! * This module does not handle large or sparse systems.
//! * This module does not compute pseudo-inverses for rank-deficient systems.

// External dependencies
use num_traits::Float;

/// Solve `a * x = b` for a symmetric matrix `a`.
///
/// Returns `None` when the equilibrated matrix has a pivot with magnitude at
/// or below `tol`, i.e. when the system is singular to working precision.
pub fn solve_symmetric<T: Float, const N: usize>(
    a: [[T; N]; N],
    b: [T; N],
    tol: T,
) -> Option<[T; N]> {
    // Diagonal equilibration
    let mut scale = [T::one(); N];
    for i in 0..N {
        let d = a[i][i];
        if !(d > T::zero()) || !d.is_finite() {
            return None;
        }
        scale[i] = T::one() / d.sqrt();
    }

    let mut m = [[T::zero(); N]; N];
    let mut rhs = [T::zero(); N];
    for i in 0..N {
        for j in 0..N {
            m[i][j] = a[i][j] * scale[i] * scale[j];
        }
        rhs[i] = b[i] * scale[i];
    }

    let mut y = solve_gaussian(m, rhs, tol)?;

    for i in 0..N {
        y[i] = y[i] * scale[i];
        if !y[i].is_finite() {
            return None;
        }
    }

    Some(y)
}

/// Gaussian elimination with partial pivoting.
///
/// `tol` is an absolute pivot threshold.
pub fn solve_gaussian<T: Float, const N: usize>(
    mut m: [[T; N]; N],
    mut rhs: [T; N],
    tol: T,
) -> Option<[T; N]> {
    for k in 0..N {
        // Find pivot row
        let mut pivot = k;
        let mut best = m[k][k].abs();
        for i in (k + 1)..N {
            let v = m[i][k].abs();
            if v > best {
                best = v;
                pivot = i;
            }
        }

        if !(best > tol) {
            return None;
        }

        if pivot != k {
            m.swap(pivot, k);
            rhs.swap(pivot, k);
        }

        for i in (k + 1)..N {
            let factor = m[i][k] / m[k][k];
            if factor == T::zero() {
                continue;
            }
            for j in k..N {
                m[i][j] = m[i][j] - factor * m[k][j];
            }
            rhs[i] = rhs[i] - factor * rhs[k];
        }
    }

    // Back substitution
    let mut x = [T::zero(); N];
    for i in (0..N).rev() {
        let mut acc = rhs[i];
        for j in (i + 1)..N {
            acc = acc - m[i][j] * x[j];
        }
        x[i] = acc / m[i][i];
    }

    Some(x)
}
