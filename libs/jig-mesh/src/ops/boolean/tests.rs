//! # Boolean Operation Tests
//!
//! CSG results checked through enclosed volume, which stays exact under
//! the BSP splitting.

use super::*;
use crate::align::Align3;
use crate::primitives::cube::create_box;
use crate::primitives::cylinder::{create_cylinder, polygon_area};
use approx::assert_relative_eq;
use glam::DVec3;

/// Cube of edge `size` centered at `pos`.
fn cube_at(pos: DVec3, size: f64) -> Mesh {
    create_box(DVec3::splat(size), Align3::CENTER)
        .unwrap()
        .translated(pos)
}

/// 10 x 10 x 5 block standing on z = 0.
fn block() -> Mesh {
    create_box(DVec3::new(10.0, 10.0, 5.0), Align3::ANCHOR_BOTTOM).unwrap()
}

fn drill(at: DVec3, radius: f64, segments: u32) -> Mesh {
    create_cylinder(radius, 5.0, Align3::ANCHOR_BOTTOM, segments)
        .unwrap()
        .translated(at)
}

// =============================================================================
// UNION TESTS
// =============================================================================

#[test]
fn test_union_empty_operands() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert_eq!(union(&Mesh::new(), &cube).unwrap(), cube);
    assert_eq!(union(&cube, &Mesh::new()).unwrap(), cube);
}

#[test]
fn test_union_non_overlapping_merges() {
    let a = cube_at(DVec3::new(-5.0, 0.0, 0.0), 1.0);
    let b = cube_at(DVec3::new(5.0, 0.0, 0.0), 1.0);

    let result = union(&a, &b).unwrap();

    assert_eq!(result.vertex_count(), 16);
    assert_eq!(result.triangle_count(), 24);
    assert_relative_eq!(result.volume(), 2.0, epsilon = 1e-12);
}

#[test]
fn test_union_overlapping_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0);

    let result = union(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 12.0, max_relative = 1e-9);
    assert!(result.validate());
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 2.0, epsilon = 1e-9);
}

#[test]
fn test_union_contained() {
    let outer = cube_at(DVec3::ZERO, 4.0);
    let inner = cube_at(DVec3::ZERO, 1.0);

    let result = union(&outer, &inner).unwrap();
    assert_relative_eq!(result.volume(), 64.0, max_relative = 1e-9);
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_operands() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert!(difference(&Mesh::new(), &cube).unwrap().is_empty());
    assert_eq!(difference(&cube, &Mesh::new()).unwrap(), cube);
}

#[test]
fn test_difference_non_overlapping_returns_a() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::splat(10.0), 1.0);
    assert_eq!(difference(&a, &b).unwrap(), a);
}

#[test]
fn test_difference_corner_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::ONE, 2.0);

    let result = difference(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 7.0, max_relative = 1e-9);
    assert!(result.validate());
}

#[test]
fn test_difference_fully_covered_is_empty() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::ZERO, 3.0);

    let result = difference(&a, &b).unwrap();
    assert!(result.volume().abs() < 1e-9);
}

#[test]
fn test_difference_through_hole() {
    let result = difference(&block(), &drill(DVec3::ZERO, 1.0, 16)).unwrap();

    let expected = 500.0 - polygon_area(1.0, 16) * 5.0;
    assert_relative_eq!(result.volume(), expected, max_relative = 1e-9);
    assert!(result.validate());

    // Both faces opened: nothing left on the axis
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 5.0, epsilon = 1e-12);
}

#[test]
fn test_difference_hole_on_face_removes_half() {
    let result = difference(&block(), &drill(DVec3::new(5.0, 0.0, 0.0), 1.0, 16)).unwrap();

    let expected = 500.0 - 0.5 * polygon_area(1.0, 16) * 5.0;
    assert_relative_eq!(result.volume(), expected, max_relative = 1e-9);

    // The block does not grow where the tool sticks out
    let (_, max) = result.bounding_box();
    assert_relative_eq!(max.x, 5.0, epsilon = 1e-12);
}

#[test]
fn test_difference_is_deterministic() {
    let tool = drill(DVec3::new(1.5, -2.0, 0.0), 0.75, 24);
    let first = difference(&block(), &tool).unwrap();
    let second = difference(&block(), &tool).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// INTERSECTION TESTS
// =============================================================================

#[test]
fn test_intersection_empty_operand() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert!(intersection(&Mesh::new(), &cube).unwrap().is_empty());
    assert!(intersection(&cube, &Mesh::new()).unwrap().is_empty());
}

#[test]
fn test_intersection_non_overlapping_is_empty() {
    let a = cube_at(DVec3::ZERO, 1.0);
    let b = cube_at(DVec3::splat(5.0), 1.0);
    assert!(intersection(&a, &b).unwrap().is_empty());
}

#[test]
fn test_intersection_corner_volume() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::ONE, 2.0);

    let result = intersection(&a, &b).unwrap();

    assert_relative_eq!(result.volume(), 1.0, max_relative = 1e-9);
    let (min, max) = result.bounding_box();
    assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(max.x, 1.0, epsilon = 1e-9);
}

// =============================================================================
// UNION_ALL TESTS
// =============================================================================

#[test]
fn test_union_all_disjoint_is_plain_merge() {
    let tools: Vec<Mesh> = (0..4)
        .map(|i| drill(DVec3::new(i as f64 * 2.54, 0.0, 0.0), 0.75, 24))
        .collect();

    let result = union_all(&tools).unwrap();

    assert_eq!(result.triangle_count(), 4 * tools[0].triangle_count());
    assert_relative_eq!(
        result.volume(),
        4.0 * polygon_area(0.75, 24) * 5.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_union_all_fuses_overlapping() {
    let cubes = [
        cube_at(DVec3::ZERO, 2.0),
        cube_at(DVec3::new(1.0, 0.0, 0.0), 2.0),
        cube_at(DVec3::new(10.0, 0.0, 0.0), 2.0),
    ];

    let result = union_all(&cubes).unwrap();
    assert_relative_eq!(result.volume(), 20.0, max_relative = 1e-9);
}

#[test]
fn test_union_all_empty() {
    assert!(union_all(&[]).unwrap().is_empty());
}

#[test]
fn test_drilling_many_holes_matches_one_by_one() {
    let tools: Vec<Mesh> = [-2.5, 0.0, 2.5]
        .iter()
        .map(|&x| drill(DVec3::new(x, 0.0, 0.0), 0.75, 12))
        .collect();

    let at_once = difference(&block(), &union_all(&tools).unwrap()).unwrap();

    let mut one_by_one = block();
    for tool in &tools {
        one_by_one = difference(&one_by_one, tool).unwrap();
    }

    let expected = 500.0 - 3.0 * polygon_area(0.75, 12) * 5.0;
    assert_relative_eq!(at_once.volume(), expected, max_relative = 1e-9);
    assert_relative_eq!(one_by_one.volume(), expected, max_relative = 1e-9);
}

#[test]
fn test_degenerate_operand_fails() {
    let mut flat = Mesh::new();
    let a = flat.add_vertex(DVec3::ZERO);
    let b = flat.add_vertex(DVec3::X);
    let c = flat.add_vertex(DVec3::X * 2.0);
    flat.add_triangle(a, b, c);

    let result = difference(&cube_at(DVec3::ZERO, 4.0), &flat);
    assert!(matches!(
        result,
        Err(MeshError::BooleanFailed {
            operation: "difference",
            ..
        })
    ));
}
