#![cfg(feature = "dev")]
//! Tests for input and parameter validation.
//!
//! ## Test Organization
//!
//! 1. **Sample Validation** - Counts and finiteness
//! 2. **Pair Validation** - Line-fitting inputs
//! 3. **Parameter Validation** - Tolerance and duplicates

use planefit::internals::engine::validator::{Validator, MIN_LINE_POINTS, MIN_PLANE_SAMPLES};
use planefit::internals::primitives::errors::PlaneFitError;
use planefit::internals::primitives::sample::Sample;

// ============================================================================
// Sample Validation Tests
// ============================================================================

/// Test that three finite samples pass.
#[test]
fn test_validate_samples_minimum() {
    let samples: Vec<Sample<f64>> = (0..MIN_PLANE_SAMPLES)
        .map(|i| Sample::new(i as f64, 0.0, 1.0))
        .collect();
    assert!(Validator::validate_samples(&samples).is_ok());
}

/// Test that fewer than three samples are reported as singular.
#[test]
fn test_validate_samples_too_few() {
    let samples = [Sample::new(0.0, 0.0, 0.0), Sample::new(1.0, 1.0, 1.0)];
    assert_eq!(
        Validator::validate_samples(&samples),
        Err(PlaneFitError::SingularMatrix { samples: 2 })
    );

    let empty: [Sample<f64>; 0] = [];
    assert_eq!(
        Validator::validate_samples(&empty),
        Err(PlaneFitError::SingularMatrix { samples: 0 })
    );
}

/// Test that the first non-finite sample is named.
#[test]
fn test_validate_samples_non_finite() {
    let samples = [
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 0.0, 1.0),
        Sample::new(0.0, f64::NAN, 2.0),
        Sample::new(1.0, 1.0, f64::INFINITY),
    ];

    match Validator::validate_samples(&samples) {
        Err(PlaneFitError::InvalidNumericValue(msg)) => assert!(msg.starts_with("sample[2]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

// ============================================================================
// Pair Validation Tests
// ============================================================================

/// Test that mismatched lengths are rejected.
#[test]
fn test_validate_pairs_mismatch() {
    assert_eq!(
        Validator::validate_pairs(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(PlaneFitError::MismatchedInputs { x_len: 3, y_len: 2 })
    );
}

/// Test the minimum point count for lines.
#[test]
fn test_validate_pairs_count() {
    assert_eq!(MIN_LINE_POINTS, 2);
    assert!(Validator::validate_pairs(&[1.0, 2.0], &[1.0, 2.0]).is_ok());
    assert_eq!(
        Validator::validate_pairs(&[1.0], &[1.0]),
        Err(PlaneFitError::SingularMatrix { samples: 1 })
    );
}

/// Test that non-finite x and y values are named.
#[test]
fn test_validate_pairs_non_finite() {
    match Validator::validate_pairs(&[1.0, f64::NAN], &[1.0, 2.0]) {
        Err(PlaneFitError::InvalidNumericValue(msg)) => assert!(msg.starts_with("x[1]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
    match Validator::validate_pairs(&[1.0, 2.0], &[f64::NEG_INFINITY, 2.0]) {
        Err(PlaneFitError::InvalidNumericValue(msg)) => assert!(msg.starts_with("y[0]")),
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test tolerance bounds.
#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(1e-12).is_ok());
    assert!(Validator::validate_tolerance(0.5f32).is_ok());

    assert_eq!(
        Validator::validate_tolerance(0.0),
        Err(PlaneFitError::InvalidTolerance(0.0))
    );
    assert_eq!(
        Validator::validate_tolerance(-1.0),
        Err(PlaneFitError::InvalidTolerance(-1.0))
    );
    assert!(matches!(
        Validator::validate_tolerance(f64::NAN),
        Err(PlaneFitError::InvalidTolerance(_))
    ));
}

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("tolerance")),
        Err(PlaneFitError::DuplicateParameter {
            parameter: "tolerance"
        })
    );
}
