//! Tests for the high-level plane fitting API.
//!
//! These tests verify the public entry points:
//! - Coefficient recovery and R² for exact and noisy planes
//! - Singular and degenerate inputs
//! - Builder configuration and validation
//! - Simple line fitting
//!
//! ## Test Organization
//!
//! 1. **Exact Recovery** - Noise-free planes
//! 2. **Singular Inputs** - Too few, duplicated, collinear points
//! 3. **Goodness of Fit** - R² on noisy and constant targets
//! 4. **Builder** - Options and parameter validation
//! 5. **Line Fitting** - Slope and intercept
//! 6. **Precision** - f32, large offsets and extreme magnitudes

use approx::assert_relative_eq;

use planefit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn plane_samples(a: f64, b: f64, c: f64) -> Vec<Sample<f64>> {
    let mut samples = Vec::new();
    for i in 0..5 {
        for j in 0..4 {
            let x = i as f64 * 0.7 - 1.0;
            let y = j as f64 * 1.3 + 0.5;
            samples.push(Sample::new(x, y, a * x + b * y + c));
        }
    }
    samples
}

fn noisy_samples() -> Vec<Sample<f64>> {
    let noise = [0.12, -0.31, 0.05, 0.27, -0.18, -0.02, 0.22, -0.09, 0.15, -0.2, 0.08];
    noise
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            let x = i as f64;
            let y = ((i * 7) % 5) as f64;
            Sample::new(x, y, 2.0 * x - 3.0 * y + 1.0 + e)
        })
        .collect()
}

// ============================================================================
// Exact Recovery Tests
// ============================================================================

/// Test the canonical four-corner example.
///
/// Verifies that z = x + 2y is recovered exactly with R² = 1.
#[test]
fn test_fit_unit_square() {
    let samples = [(0.0, 0.0, 0.0), (1.0, 0.0, 1.0), (0.0, 1.0, 2.0), (1.0, 1.0, 3.0)]
        .map(Sample::from);

    let result = fit(&samples).unwrap();

    assert_relative_eq!(result.a, 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.b, 2.0, epsilon = 1e-12);
    assert_relative_eq!(result.c, 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-12);
    assert_eq!(result.samples, 4);
}

/// Test recovery of an arbitrary plane on a grid.
///
/// Verifies that noise-free data yields the generating coefficients.
#[test]
fn test_fit_recovers_known_plane() {
    let samples = plane_samples(1.5, -0.75, 3.25);
    let result = fit(&samples).unwrap();

    assert_relative_eq!(result.a, 1.5, epsilon = 1e-10);
    assert_relative_eq!(result.b, -0.75, epsilon = 1e-10);
    assert_relative_eq!(result.c, 3.25, epsilon = 1e-10);
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-12);
}

/// Test that the minimum of three non-collinear points suffices.
#[test]
fn test_fit_three_points() {
    let samples = vec![
        Sample::new(0.0, 0.0, 4.0),
        Sample::new(2.0, 0.0, 0.0),
        Sample::new(0.0, 4.0, 8.0),
    ];
    let result = fit(&samples).unwrap();

    // z = -2x + y + 4
    assert_relative_eq!(result.a, -2.0, epsilon = 1e-12);
    assert_relative_eq!(result.b, 1.0, epsilon = 1e-12);
    assert_relative_eq!(result.c, 4.0, epsilon = 1e-12);
    assert_relative_eq!(result.predict(1.0, 1.0), 3.0, epsilon = 1e-12);
}

// ============================================================================
// Singular Input Tests
// ============================================================================

/// Test that two distinct points are rejected.
///
/// Repeating the points does not make the system determined.
#[test]
fn test_fit_two_distinct_points_is_singular() {
    let samples = vec![
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 1.0, 1.0),
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 1.0, 1.0),
    ];

    assert_eq!(
        fit(&samples),
        Err(PlaneFitError::SingularMatrix { samples: 4 })
    );
}

/// Test that fewer than three samples are rejected.
#[test]
fn test_fit_too_few_samples_is_singular() {
    let two = vec![Sample::new(0.0, 0.0, 0.0), Sample::new(1.0, 2.0, 3.0)];
    assert_eq!(fit(&two), Err(PlaneFitError::SingularMatrix { samples: 2 }));

    let empty: Vec<Sample<f64>> = Vec::new();
    assert_eq!(
        fit(&empty),
        Err(PlaneFitError::SingularMatrix { samples: 0 })
    );
}

/// Test that points on a line in the (x, y) plane are rejected.
#[test]
fn test_fit_collinear_points_is_singular() {
    let samples: Vec<Sample<f64>> = (0..4)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, 2.0 * x, 2.0 * x + 1.0)
        })
        .collect();

    assert!(matches!(
        fit(&samples),
        Err(PlaneFitError::SingularMatrix { samples: 4 })
    ));
}

/// Test that a constant predictor is rejected.
#[test]
fn test_fit_constant_x_is_singular() {
    let samples = vec![
        Sample::new(0.1, 0.0, 1.0),
        Sample::new(0.1, 1.0, 2.0),
        Sample::new(0.1, 2.0, 2.5),
        Sample::new(0.1, 3.0, 4.0),
    ];

    assert!(matches!(
        fit(&samples),
        Err(PlaneFitError::SingularMatrix { .. })
    ));
}

/// Test that non-finite coordinates are rejected before solving.
#[test]
fn test_fit_non_finite_is_rejected() {
    let samples = vec![
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 0.0, f64::NAN),
        Sample::new(0.0, 1.0, 2.0),
    ];

    assert!(matches!(
        fit(&samples),
        Err(PlaneFitError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Goodness of Fit Tests
// ============================================================================

/// Test that a constant target matching the prediction has R² = 1.
#[test]
fn test_fit_constant_target() {
    let samples = vec![
        Sample::new(0.0, 0.0, 0.1),
        Sample::new(1.0, 0.0, 0.1),
        Sample::new(0.0, 1.0, 0.1),
        Sample::new(2.0, 3.0, 0.1),
        Sample::new(-1.0, 4.0, 0.1),
    ];
    let result = fit(&samples).unwrap();

    assert_eq!(result.r_squared, 1.0);
    assert_relative_eq!(result.a, 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.b, 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.c, 0.1, epsilon = 1e-12);
}

/// Test R² on noisy data against the textbook definition.
#[test]
fn test_fit_noisy_r_squared() {
    let samples = noisy_samples();
    let result = fit(&samples).unwrap();

    let n = samples.len() as f64;
    let mean = samples.iter().map(|s| s.z).sum::<f64>() / n;
    let ss_tot: f64 = samples.iter().map(|s| (s.z - mean).powi(2)).sum();
    let ss_res: f64 = samples
        .iter()
        .map(|s| (s.z - result.predict(s.x, s.y)).powi(2))
        .sum();

    assert!(result.r_squared > 0.9 && result.r_squared < 1.0);
    assert_relative_eq!(result.r_squared, 1.0 - ss_res / ss_tot, epsilon = 1e-12);
    assert_relative_eq!(result.a, 2.0, epsilon = 0.2);
    assert_relative_eq!(result.b, -3.0, epsilon = 0.2);
}

/// Test that the order of samples does not matter.
#[test]
fn test_fit_permutation_invariance() {
    let samples = noisy_samples();
    let base = fit(&samples).unwrap();

    let mut reversed = samples.clone();
    reversed.reverse();
    let mut rotated = samples.clone();
    rotated.rotate_left(4);

    for permuted in [reversed, rotated] {
        let result = fit(&permuted).unwrap();
        assert_relative_eq!(result.a, base.a, epsilon = 1e-12);
        assert_relative_eq!(result.b, base.b, epsilon = 1e-12);
        assert_relative_eq!(result.c, base.c, epsilon = 1e-12);
        assert_relative_eq!(result.r_squared, base.r_squared, epsilon = 1e-12);
    }
}

/// Test that a constant target with a nonzero residual is degenerate.
#[test]
fn test_r_squared_degenerate_target() {
    let z = [3.0, 3.0, 3.0];
    let z_hat = [2.0, 3.0, 4.0];

    assert_eq!(
        Diagnostics::calculate_r_squared(&z, &z_hat),
        Err(PlaneFitError::DegenerateData { ss_res: 2.0 })
    );
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that optional outputs are attached on request.
#[test]
fn test_builder_optional_outputs() {
    let samples = noisy_samples();

    let plain = PlaneFit::new().build().unwrap().fit(&samples).unwrap();
    assert!(!plain.has_diagnostics());
    assert!(!plain.has_residuals());

    let full = PlaneFit::new()
        .return_diagnostics()
        .return_residuals()
        .build()
        .unwrap()
        .fit(&samples)
        .unwrap();

    let diag = full.diagnostics.unwrap();
    assert_relative_eq!(diag.r_squared, full.r_squared);
    assert!(diag.rmse > 0.0);
    assert!(diag.mae > 0.0 && diag.mae <= diag.rmse + 1e-12);

    let residuals = full.residuals.unwrap();
    assert_eq!(residuals.len(), samples.len());
    // OLS with an intercept leaves residuals that sum to zero
    assert_relative_eq!(residuals.iter().sum::<f64>(), 0.0, epsilon = 1e-10);
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    assert_relative_eq!(ss_res, diag.ss_res, epsilon = 1e-10);
}

/// Test that a custom tolerance is accepted and kept.
#[test]
fn test_builder_custom_tolerance() {
    let model = PlaneFit::new().tolerance(1e-9).build().unwrap();
    assert_eq!(model.tolerance(), 1e-9);

    let result = model.fit(&plane_samples(0.5, 0.25, -2.0)).unwrap();
    assert_relative_eq!(result.a, 0.5, epsilon = 1e-10);
}

/// Test that invalid tolerances are rejected at build time.
#[test]
fn test_builder_invalid_tolerance() {
    for tol in [0.0, -1e-6, f64::INFINITY] {
        assert_eq!(
            PlaneFit::new().tolerance(tol).build(),
            Err(PlaneFitError::InvalidTolerance(tol))
        );
    }
    assert!(matches!(
        PlaneFit::new().tolerance(f64::NAN).build(),
        Err(PlaneFitError::InvalidTolerance(_))
    ));
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_builder_duplicate_parameter() {
    let res = PlaneFit::<f64>::new()
        .tolerance(1e-10)
        .return_residuals()
        .tolerance(1e-8)
        .build();

    assert_eq!(
        res,
        Err(PlaneFitError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
}

// ============================================================================
// Line Fitting Tests
// ============================================================================

/// Test simple regression on a small dataset.
#[test]
fn test_fit_line() {
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [2.0, 4.0, 5.0, 4.0, 5.0];

    let line = fit_line(&xs, &ys).unwrap();

    assert_relative_eq!(line.slope, 0.6, epsilon = 1e-12);
    assert_relative_eq!(line.intercept, 2.2, epsilon = 1e-12);
    assert_relative_eq!(line.x_mean, 3.0, epsilon = 1e-12);
    assert_relative_eq!(line.y_mean, 4.0, epsilon = 1e-12);
    assert_relative_eq!(line.predict(6.0), 5.8, epsilon = 1e-12);
}

/// Test line fitting input errors.
#[test]
fn test_fit_line_errors() {
    assert_eq!(
        fit_line(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(PlaneFitError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
    assert_eq!(
        fit_line(&[1.0], &[1.0]),
        Err(PlaneFitError::SingularMatrix { samples: 1 })
    );
    assert_eq!(
        fit_line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(PlaneFitError::SingularMatrix { samples: 3 })
    );
    assert!(matches!(
        fit_line(&[1.0, f64::INFINITY], &[1.0, 2.0]),
        Err(PlaneFitError::InvalidNumericValue(_))
    ));
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test single-precision fitting, including SIMD tails.
#[test]
fn test_fit_f32() {
    for n in [4usize, 7, 8, 17] {
        let samples: Vec<Sample<f32>> = (0..n)
            .map(|i| {
                let x = (i % 4) as f32;
                let y = (i / 4) as f32 + (i % 3) as f32 * 0.5;
                Sample::new(x, y, x + 2.0 * y)
            })
            .collect();

        let result = fit(&samples).unwrap();
        assert_relative_eq!(result.a, 1.0f32, epsilon = 1e-4);
        assert_relative_eq!(result.b, 2.0f32, epsilon = 1e-4);
        assert_relative_eq!(result.c, 0.0f32, epsilon = 1e-4);
        assert_relative_eq!(result.r_squared, 1.0f32, epsilon = 1e-4);
    }
}

/// Test data far from the origin.
#[test]
fn test_fit_large_offset() {
    let samples: Vec<Sample<f64>> = (0..6)
        .map(|i| {
            let x = 1.0e6 + i as f64 * 0.5;
            let y = 2.0e6 + ((i * i) % 5) as f64 * 0.25;
            Sample::new(x, y, 0.5 * x + 0.25 * y - 1000.0)
        })
        .collect();

    let result = fit(&samples).unwrap();
    assert_relative_eq!(result.a, 0.5, epsilon = 1e-6);
    assert_relative_eq!(result.b, 0.25, epsilon = 1e-6);
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-9);
}

/// Test that a target variance far above rounding survives a large offset.
#[test]
fn test_fit_offset_target_keeps_r_squared() {
    let points = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (1.0, 2.0)];
    let steps = [0.0, 1.0, -1.0, 2.0, -2.0, 1.0];
    // Thousands of ulps of 1e6, exactly representable
    let step = 2f64.powi(-22);

    let shifted: Vec<Sample<f64>> = points
        .iter()
        .zip(steps)
        .map(|(&(x, y), k)| Sample::new(x, y, k * step))
        .collect();
    let offset: Vec<Sample<f64>> = shifted
        .iter()
        .map(|s| Sample::new(s.x, s.y, 1.0e6 + s.z))
        .collect();

    let r2_shifted = fit(&shifted).unwrap().r_squared;
    let r2_offset = fit(&offset).unwrap().r_squared;

    assert_relative_eq!(r2_shifted, 0.028671328671328673, epsilon = 1e-9);
    assert!(r2_offset < 0.5, "offset r2 = {r2_offset}");
    assert_relative_eq!(r2_offset, r2_shifted, epsilon = 1e-2);
}

/// Test targets whose squares approach the overflow threshold.
#[test]
fn test_fit_huge_target() {
    let points = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 0.0), (0.0, 2.0)];
    let z = [1.0, 1.2, 1.0, 1.0, 1.3, 1.0];

    let unit: Vec<Sample<f64>> = points
        .iter()
        .zip(z)
        .map(|(&(x, y), z)| Sample::new(x, y, z))
        .collect();
    let huge: Vec<Sample<f64>> = unit
        .iter()
        .map(|s| Sample::new(s.x, s.y, s.z * 1e154))
        .collect();

    let small = fit(&unit).unwrap();
    let large = fit(&huge).unwrap();

    assert_relative_eq!(small.r_squared, 0.7849056603773585, epsilon = 1e-9);
    assert_relative_eq!(large.r_squared, small.r_squared, epsilon = 1e-9);
    assert_relative_eq!(large.a, small.a * 1e154, max_relative = 1e-9);
    assert_relative_eq!(large.b, small.b * 1e154, max_relative = 1e-9);
}

/// Test predictors whose squares approach the overflow threshold.
#[test]
fn test_fit_huge_predictors() {
    let samples: Vec<Sample<f64>> = [(1.2e154, 0.0), (1.3e154, 0.0), (1.2e154, 1.0), (1.3e154, 1.0)]
        .iter()
        .map(|&(x, y)| Sample::new(x, y, 2.0e-154 * x + 3.0 * y + 1.0))
        .collect();

    let result = fit(&samples).unwrap();

    assert_relative_eq!(result.a, 2.0e-154, max_relative = 1e-9);
    assert_relative_eq!(result.b, 3.0, epsilon = 1e-9);
    assert_relative_eq!(result.c, 1.0, epsilon = 1e-9);
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-9);
}

/// Test line fitting on predictors near the overflow threshold.
#[test]
fn test_fit_line_huge_predictor() {
    let xs = [1.0e154, 2.0e154, 3.0e154, 4.0e154, 5.0e154];
    let ys = [2.0, 4.0, 5.0, 4.0, 5.0];

    let line = fit_line(&xs, &ys).unwrap();

    assert_relative_eq!(line.slope, 0.6e-154, max_relative = 1e-12);
    assert_relative_eq!(line.intercept, 2.2, epsilon = 1e-12);
    assert_relative_eq!(line.x_mean, 3.0e154, max_relative = 1e-12);
}
