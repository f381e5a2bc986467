//! # Cylinder Primitive
//!
//! Generates mesh for right circular cylinders (tessellated as prisms).

use std::f64::consts::PI;

use glam::DVec3;

use crate::align::Align3;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a cylinder mesh along the Z axis.
///
/// The circle is approximated by a regular polygon whose first vertex lies at
/// angle 0 (on +X), so the tessellation is mirror-symmetric about the XZ
/// plane, and also about the YZ plane when `segments` is even.
///
/// # Arguments
///
/// * `radius` - Circumscribed radius
/// * `height` - Extent along Z
/// * `align` - Alignment of the cylinder's bounding box
/// * `segments` - Number of segments around circumference
///
/// # Example
///
/// ```rust
/// use jig_mesh::{create_cylinder, Align3};
///
/// let mesh = create_cylinder(0.75, 5.4, Align3::ANCHOR_BOTTOM, 24).unwrap();
/// assert_eq!(mesh.vertex_count(), 48);
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(min.z, 0.0);
/// assert!((max.z - 5.4).abs() < 1e-12);
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    align: Align3,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(height.is_finite() && height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {segments}"
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    // The bounding box is the circumscribing square, which aligns the axis
    // the same way for Min/Center/Max as a true circle would.
    let diameter = 2.0 * radius;
    let origin = align.offset(DVec3::new(diameter, diameter, height));
    let axis = DVec3::new(origin.x + radius, origin.y + radius, origin.z);

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(
                    axis.x + radius * theta.cos(),
                    axis.y + radius * theta.sin(),
                    z,
                ))
            })
            .collect()
    };

    let bottom = ring(&mut mesh, axis.z);
    let top = ring(&mut mesh, axis.z + height);

    // Side quads
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);
    }

    // Caps
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}

/// Area of the regular polygon that [`create_cylinder`] uses for a circle.
///
/// # Example
///
/// ```rust
/// use jig_mesh::primitives::cylinder::polygon_area;
///
/// // A square inscribed in the unit circle
/// assert!((polygon_area(1.0, 4) - 2.0).abs() < 1e-12);
/// ```
pub fn polygon_area(radius: f64, segments: u32) -> f64 {
    let n = f64::from(segments);
    0.5 * n * radius * radius * (2.0 * PI / n).sin()
}
