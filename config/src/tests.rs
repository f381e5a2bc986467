//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants,
//! helper functions and the resolution builder.

use crate::constants::*;
use crate::{ConfigError, Resolution};

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_plane_epsilon_coarser_than_merge() {
    assert!(PLANE_EPSILON > VERTEX_MERGE_EPSILON);
    // Must stay well below the smallest feature of the jig
    assert!(PLANE_EPSILON < DEFAULT_PIN_HOLE_SIZE / 100.0);
}

#[test]
fn test_sliver_thresholds() {
    // truck rejects faces whose plane normal is below 1e-6
    assert!(SLIVER_EPSILON > 1e-6);
    assert!(SLIVER_COLLAPSE_DISTANCE > VERTEX_MERGE_EPSILON);
    assert!(SLIVER_COLLAPSE_DISTANCE < DEFAULT_PIN_HOLE_SIZE / 100.0);
    assert!(SLIVER_REPAIR_PASSES >= 1);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_fragments_at_least_three() {
    assert!(MIN_FRAGMENTS >= 3);
}

#[test]
fn test_compute_fragments_with_fn_override() {
    let fragments = compute_fragments(10.0, 32.0, DEFAULT_FA, DEFAULT_FS);
    assert_eq!(fragments, 32);
}

#[test]
fn test_compute_fragments_clamps_to_min() {
    let fragments = compute_fragments(10.0, 1.0, DEFAULT_FA, DEFAULT_FS);
    assert_eq!(fragments, MIN_FRAGMENTS);
}

#[test]
fn test_compute_fragments_clamps_to_max() {
    let fragments = compute_fragments(10.0, 100000.0, DEFAULT_FA, DEFAULT_FS);
    assert_eq!(fragments, MAX_FRAGMENTS);
}

#[test]
fn test_compute_fragments_default_hole_sizes() {
    // 1.5 mm hole: 2*PI*0.75/0.2 = 23.6 -> 24, below the 30 from $fa
    assert_eq!(
        compute_fragments(DEFAULT_PIN_HOLE_SIZE / 2.0, 0.0, DEFAULT_FA, DEFAULT_FS),
        24
    );
    // 2 mm hole: 31.4 from $fs, so $fa caps it at 30
    assert_eq!(
        compute_fragments(BIG_PIN_HOLE_SIZE / 2.0, 0.0, DEFAULT_FA, DEFAULT_FS),
        30
    );
}

#[test]
fn test_resolution_default_matches_constants() {
    let resolution = Resolution::default();
    assert_eq!(resolution.fn_, None);
    assert_eq!(resolution.fa, DEFAULT_FA);
    assert_eq!(resolution.fs, DEFAULT_FS);
}

#[test]
fn test_resolution_fixed_count() {
    let resolution = Resolution::with_fn(48).unwrap();
    assert_eq!(resolution.segments_for(0.1), 48);
    assert_eq!(resolution.segments_for(100.0), 48);
}

#[test]
fn test_resolution_rejects_bad_values() {
    assert_eq!(
        Resolution::new(None, 0.0, 1.0).unwrap_err(),
        ConfigError::InvalidFragmentAngle(0.0)
    );
    assert_eq!(
        Resolution::new(None, 12.0, -1.0).unwrap_err(),
        ConfigError::InvalidFragmentSize(-1.0)
    );
    assert_eq!(
        Resolution::with_fn(2).unwrap_err(),
        ConfigError::InvalidFragmentCount {
            value: 2,
            min: MIN_FRAGMENTS
        }
    );
    assert!(Resolution::new(None, f64::NAN, 1.0).is_err());
}

// =============================================================================
// JIG DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_holes_do_not_merge() {
    assert!(DEFAULT_PIN_HOLE_SIZE < DEFAULT_PIN_PITCH);
    assert!(BIG_PIN_HOLE_SIZE < DEFAULT_PIN_PITCH);
}

#[test]
fn test_part_names_are_distinct() {
    assert_ne!(CLIP_JIG_PART_NAME, CLIP_JIG_BIG_HOLES_PART_NAME);
    assert_ne!(STL_EXTENSION, STEP_EXTENSION);
}
