//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_buffer_tolerance_above_epsilon() {
    assert!(
        DEFAULT_BUFFER_TOLERANCE > EPSILON,
        "DEFAULT_BUFFER_TOLERANCE must not vanish in numeric noise"
    );
}

#[test]
fn test_buffer_tolerance_is_small() {
    // Must stay far below typical cuboid half-extents
    assert!(DEFAULT_BUFFER_TOLERANCE <= 1e-3);
}

// =============================================================================
// LAYOUT TESTS
// =============================================================================

#[test]
fn test_grain_column_follows_geometry_columns() {
    assert_eq!(GRAIN_ID_COLUMN, MIN_CUBOID_COLUMNS);
}

#[test]
fn test_footprint_is_quadrilateral() {
    assert_eq!(FOOTPRINT_CORNERS, 4);
}

#[test]
fn test_mitre_limit_allows_right_angles() {
    // A right-angle mitre extends sqrt(2) times the offset distance
    assert!(DEFAULT_MITRE_LIMIT > std::f64::consts::SQRT_2);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(DEFAULT_BUFFER_TOLERANCE));
}
