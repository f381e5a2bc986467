//! # Box Primitive
//!
//! Generates mesh for rectangular prisms.

use glam::DVec3;

use crate::align::Align3;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a rectangular box mesh.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `align` - Which point of the bounding box sits on the origin
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use jig_mesh::{create_box, Align3};
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(4.0, 2.0, 1.0), Align3::ANCHOR_BOTTOM).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert_eq!(mesh.bounding_box().0.z, 0.0);
/// ```
pub fn create_box(size: DVec3, align: Align3) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let min = align.offset(size);
    let max = min + size;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Counter-clockwise winding for outward normals

    // Bottom
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
