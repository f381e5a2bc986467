//! # Preview
//!
//! Stand-in for an interactive viewer: logs what a viewer would show and
//! hands the mesh back so calls chain.

use jig_mesh::Mesh;
use tracing::info;

/// Logs a summary of `mesh` under `name` and returns it unchanged.
pub fn show(name: &str, mesh: Mesh) -> Mesh {
    let (min, max) = mesh.bounding_box();
    let size = mesh.extent();

    info!(
        part = name,
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        size = ?size.to_array(),
        min = ?min.to_array(),
        max = ?max.to_array(),
        volume = mesh.volume(),
        area = mesh.surface_area(),
        "showing part"
    );

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use jig_mesh::{create_box, Align3};

    #[test]
    fn test_show_returns_mesh_unchanged() {
        let mesh = create_box(DVec3::new(1.0, 2.0, 3.0), Align3::MIN).unwrap();
        assert_eq!(show("block", mesh.clone()), mesh);
    }

    #[test]
    fn test_show_accepts_empty_mesh() {
        assert!(show("nothing", Mesh::new()).is_empty());
    }
}
