//! # STEP Writer
//!
//! Converts a triangle mesh into a planar B-rep through the `truck` CAD
//! crates and writes it as ISO 10303-21. Every triangle becomes one planar
//! face; corners and edges are shared between neighbouring faces so the
//! shell keeps the mesh topology. A triangle that cannot become a face fails
//! the export rather than leaving a hole in the shell.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{SLIVER_EPSILON, STEP_ORGANIZATION_SYSTEM};
use tracing::debug;
use truck_modeling::{builder, Curve, Point3, Surface};
use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModel};
use truck_topology::{Shell, Wire};

use crate::error::MeshError;
use crate::mesh::Mesh;

type Vertex = truck_topology::Vertex<Point3>;
type Edge = truck_topology::Edge<Point3, Curve>;
type Face = truck_topology::Face<Point3, Curve, Surface>;

/// Header fields written into the STEP `FILE_NAME` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepHeader {
    /// Recorded file name; the output file's name when empty.
    pub file_name: String,
    /// Originating system.
    pub organization_system: String,
}

impl Default for StepHeader {
    fn default() -> Self {
        Self {
            file_name: String::new(),
            organization_system: STEP_ORGANIZATION_SYSTEM.to_owned(),
        }
    }
}

/// Writes `mesh` as a STEP file with one face per triangle.
///
/// Returns the number of faces written, which always equals the triangle
/// count.
///
/// # Errors
///
/// [`MeshError::ExportFailed`] when the mesh is empty or a triangle cannot
/// be turned into a planar face; nothing is written then.
/// [`MeshError::Io`] when the file cannot be written.
pub fn save_step(
    mesh: &Mesh,
    path: impl AsRef<Path>,
    header: &StepHeader,
) -> Result<usize, MeshError> {
    let path = path.as_ref();
    if mesh.is_empty() {
        return Err(MeshError::export_failed(path, "cannot save an empty mesh to STEP"));
    }

    let faces = build_faces(mesh).map_err(|message| MeshError::export_failed(path, message))?;
    let face_count = faces.len();

    let shell: Shell<Point3, Curve, Surface> = faces.into();
    let compressed = shell.compress();

    let file_name = if header.file_name.is_empty() {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        header.file_name.clone()
    };

    let step_string = CompleteStepDisplay::new(
        StepModel::from(&compressed),
        StepHeaderDescriptor {
            file_name,
            organization_system: header.organization_system.clone(),
            ..Default::default()
        },
    )
    .to_string();

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(step_string.as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), faces = face_count, "wrote STEP");
    Ok(face_count)
}

/// One planar face per triangle, or a description of the first triangle
/// that has none.
fn build_faces(mesh: &Mesh) -> Result<Vec<Face>, String> {
    let vertices: Vec<Vertex> = mesh
        .vertices()
        .iter()
        .map(|v| builder::vertex(Point3::new(v.x, v.y, v.z)))
        .collect();
    let mut edges: HashMap<(u32, u32), Edge> = HashMap::new();
    let mut faces = Vec::with_capacity(mesh.triangle_count());

    for i in 0..mesh.triangle_count() {
        let [p0, p1, p2] = mesh.triangle_corners(i);
        let area = (p1 - p0).cross(p2 - p0).length();
        if area < SLIVER_EPSILON {
            return Err(format!("triangle {i} is a sliver (doubled area {area:e})"));
        }

        let [a, b, c] = mesh.triangle(i);
        let wire = Wire::from(vec![
            shared_edge(&vertices, &mut edges, a, b),
            shared_edge(&vertices, &mut edges, b, c),
            shared_edge(&vertices, &mut edges, c, a),
        ]);

        let face = builder::try_attach_plane(&[wire])
            .map_err(|e| format!("triangle {i} has no plane: {e}"))?;
        faces.push(face);
    }

    Ok(faces)
}

/// Edge from `start` to `end`, reusing the reverse of an existing edge.
fn shared_edge(
    vertices: &[Vertex],
    edges: &mut HashMap<(u32, u32), Edge>,
    start: u32,
    end: u32,
) -> Edge {
    if let Some(edge) = edges.get(&(end, start)) {
        return edge.inverse();
    }
    edges
        .entry((start, end))
        .or_insert_with(|| builder::line(&vertices[start as usize], &vertices[end as usize]))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align3;
    use crate::primitives::create_box;
    use glam::DVec3;

    #[test]
    fn test_save_box() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.step");
        let mesh = create_box(DVec3::new(2.0, 3.0, 4.0), Align3::ANCHOR_BOTTOM).unwrap();

        let faces = save_step(&mesh, &path, &StepHeader::default()).unwrap();
        assert_eq!(faces, mesh.triangle_count());

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("ISO-10303-21;"));
        assert!(text.contains(STEP_ORGANIZATION_SYSTEM));
        assert!(text.contains("block.step"));
        assert!(text.contains("PLANE"));
    }

    #[test]
    fn test_faces_share_edges() {
        let mesh = create_box(DVec3::ONE, Align3::MIN).unwrap();
        let faces = build_faces(&mesh).unwrap();
        assert_eq!(faces.len(), 12);

        let shell: Shell<Point3, Curve, Surface> = faces.into();
        // 12 triangles on a closed box: 18 distinct edges
        let distinct: std::collections::HashSet<_> = shell.edge_iter().map(|e| e.id()).collect();
        assert_eq!(distinct.len(), 18);
    }

    #[test]
    fn test_sliver_triangle_fails_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sliver.step");
        let mut mesh = create_box(DVec3::ONE, Align3::MIN).unwrap();
        let a = mesh.add_vertex(DVec3::new(5.0, 0.0, 0.0));
        let b = mesh.add_vertex(DVec3::new(6.0, 0.0, 0.0));
        let c = mesh.add_vertex(DVec3::new(5.5, 6e-7, 0.0));
        mesh.add_triangle(a, b, c);

        let result = save_step(&mesh, &path, &StepHeader::default());

        assert!(matches!(result, Err(MeshError::ExportFailed { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_custom_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.step");
        let mesh = create_box(DVec3::ONE, Align3::MIN).unwrap();
        let header = StepHeader {
            file_name: "clip_jig.step".to_owned(),
            organization_system: "bench".to_owned(),
        };

        save_step(&mesh, &path, &header).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("clip_jig.step"));
        assert!(text.contains("bench"));
    }

    #[test]
    fn test_empty_mesh_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.step");

        let result = save_step(&Mesh::new(), &path, &StepHeader::default());

        assert!(matches!(result, Err(MeshError::ExportFailed { .. })));
        assert!(!path.exists());
    }
}
