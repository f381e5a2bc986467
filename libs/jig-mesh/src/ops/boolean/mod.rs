//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; result.invert()
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; result.invert()
//!
//! Operands whose bounding boxes do not overlap skip the trees entirely.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use jig_mesh::{create_box, difference, Align3};
//!
//! let a = create_box(DVec3::splat(2.0), Align3::CENTER)?;
//! let b = create_box(DVec3::splat(2.0), Align3::MIN)?;
//! let result = difference(&a, &b)?;
//! assert!((result.volume() - 7.0).abs() < 1e-9);
//! # Ok::<(), jig_mesh::MeshError>(())
//! ```

mod bsp;
mod plane;
mod polygon;
mod vertex;

#[cfg(test)]
mod tests;

use config::constants::{MAX_TRIANGLES, PLANE_EPSILON};
use glam::DVec3;
use tracing::{debug, trace};

use crate::error::MeshError;
use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;
use vertex::Vertex;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
///
/// Returns a mesh containing all geometry from both inputs.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }
    if !bounding_boxes_overlap(a, b) {
        let mut merged = a.clone();
        merged.merge(b);
        return Ok(merged);
    }

    let mut bsp_a = BspNode::new(operand_polygons("union", a)?);
    let mut bsp_b = BspNode::new(operand_polygons("union", b)?);
    trace_trees("union", &bsp_a, &bsp_b);

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    // Drop B's faces that are coplanar with A's
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());

    polygons_to_mesh("union", &bsp_a.all_polygons())
}

/// Compute difference of two meshes (A - B).
///
/// Returns a mesh containing geometry from A that is not in B.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() || !bounding_boxes_overlap(a, b) {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(operand_polygons("difference", a)?);
    let mut bsp_b = BspNode::new(operand_polygons("difference", b)?);
    trace_trees("difference", &bsp_a, &bsp_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    polygons_to_mesh("difference", &bsp_a.all_polygons())
}

/// Compute intersection of two meshes.
///
/// Returns a mesh containing only geometry that is in both inputs.
pub fn intersection(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() || b.is_empty() || !bounding_boxes_overlap(a, b) {
        return Ok(Mesh::new());
    }

    let mut bsp_a = BspNode::new(operand_polygons("intersection", a)?);
    let mut bsp_b = BspNode::new(operand_polygons("intersection", b)?);
    trace_trees("intersection", &bsp_a, &bsp_b);

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    polygons_to_mesh("intersection", &bsp_a.all_polygons())
}

/// Union of many solids.
///
/// A solid whose bounding box is clear of every solid added so far is merged
/// as-is; anything else goes through [`union`].
pub fn union_all(meshes: &[Mesh]) -> Result<Mesh, MeshError> {
    let mut result = Mesh::new();
    let mut boxes: Vec<(DVec3, DVec3)> = Vec::with_capacity(meshes.len());
    let mut fused = 0usize;

    for mesh in meshes.iter().filter(|m| !m.is_empty()) {
        let bounds = mesh.bounding_box();
        if boxes.iter().any(|other| boxes_overlap(*other, bounds)) {
            result = union(&result, mesh)?;
            fused += 1;
        } else {
            result.merge(mesh);
        }
        boxes.push(bounds);
    }

    debug!(
        solids = meshes.len(),
        fused,
        triangles = result.triangle_count(),
        "union_all"
    );
    Ok(result)
}

fn trace_trees(operation: &'static str, a: &BspNode, b: &BspNode) {
    trace!(
        operation,
        polygons_a = a.polygon_count(),
        depth_a = a.depth(),
        polygons_b = b.polygon_count(),
        depth_b = b.depth(),
        "bsp trees built"
    );
}

// =============================================================================
// BOUNDS
// =============================================================================

fn bounding_boxes_overlap(a: &Mesh, b: &Mesh) -> bool {
    boxes_overlap(a.bounding_box(), b.bounding_box())
}

/// Overlap test with `PLANE_EPSILON` slack, so touching boxes count.
fn boxes_overlap((min_a, max_a): (DVec3, DVec3), (min_b, max_b): (DVec3, DVec3)) -> bool {
    let eps = DVec3::splat(PLANE_EPSILON);
    (min_a - eps).cmple(max_b).all() && (min_b - eps).cmple(max_a).all()
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Polygons of a non-empty operand; fails when every triangle is degenerate.
fn operand_polygons(operation: &'static str, mesh: &Mesh) -> Result<Vec<Polygon>, MeshError> {
    let polygons = mesh_to_polygons(mesh);
    if polygons.is_empty() {
        return Err(MeshError::boolean_failed(
            operation,
            format!("all {} operand triangles are degenerate", mesh.triangle_count()),
        ));
    }
    Ok(polygons)
}

/// Convert mesh to list of polygons, one per triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles()
        .iter()
        .filter_map(|tri| {
            Polygon::from_vertices(
                tri.iter()
                    .map(|&i| Vertex::new(mesh.vertex(i)))
                    .collect(),
            )
        })
        .collect()
}

/// Fan-triangulate convex polygons back into an indexed mesh.
///
/// Coincident corners are welded and zero-area slivers dropped.
fn polygons_to_mesh(operation: &'static str, polygons: &[Polygon]) -> Result<Mesh, MeshError> {
    let triangle_estimate: usize = polygons.iter().map(|p| p.vertices().len() - 2).sum();
    if triangle_estimate > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_estimate,
            max: MAX_TRIANGLES,
        });
    }

    let vertex_estimate = triangle_estimate + 2 * polygons.len();
    let mut mesh = Mesh::with_capacity(vertex_estimate, triangle_estimate);

    for poly in polygons {
        let verts = poly.vertices();
        let i0 = mesh.add_vertex(verts[0].pos);
        let mut prev = mesh.add_vertex(verts[1].pos);
        for v in &verts[2..] {
            let next = mesh.add_vertex(v.pos);
            mesh.add_triangle(i0, prev, next);
            prev = next;
        }
    }

    mesh.weld_vertices();
    let slivers = mesh.remove_degenerate_triangles();

    debug!(
        operation,
        polygons = polygons.len(),
        slivers,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "boolean"
    );

    Ok(mesh)
}
