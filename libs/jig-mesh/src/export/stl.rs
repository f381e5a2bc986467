//! # STL Writer
//!
//! Binary layout: 80-byte header, `u32` triangle count, then per triangle a
//! normal and three corners as little-endian `f32` followed by a zero `u16`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

const HEADER_SIZE: usize = 80;
const HEADER_TEXT: &[u8] = b"Binary STL written by jig-mesh";

/// STL flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Writes `mesh` as an STL file.
///
/// # Errors
///
/// [`MeshError::ExportFailed`] for an empty mesh, [`MeshError::Io`] when the
/// file cannot be written.
///
/// # Example
///
/// ```no_run
/// use glam::DVec3;
/// use jig_mesh::{create_box, save_stl, Align3, StlFormat};
///
/// let mesh = create_box(DVec3::ONE, Align3::MIN)?;
/// save_stl(&mesh, "cube.stl", StlFormat::Binary)?;
/// # Ok::<(), jig_mesh::MeshError>(())
/// ```
pub fn save_stl(mesh: &Mesh, path: impl AsRef<Path>, format: StlFormat) -> Result<(), MeshError> {
    let path = path.as_ref();
    if mesh.is_empty() {
        return Err(MeshError::export_failed(path, "cannot save an empty mesh to STL"));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    match format {
        StlFormat::Binary => write_binary(mesh, &mut writer)?,
        StlFormat::Ascii => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("mesh");
            write_ascii(mesh, name, &mut writer)?;
        }
    }
    writer.flush()?;

    debug!(path = %path.display(), ?format, triangles = mesh.triangle_count(), "wrote STL");
    Ok(())
}

fn write_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> std::io::Result<()> {
    let mut header = [b' '; HEADER_SIZE];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;

    // Mesh::check caps the count well below u32::MAX
    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for i in 0..mesh.triangle_count() {
        write_vec3(writer, mesh.triangle_normal(i))?;
        for corner in mesh.triangle_corners(i) {
            write_vec3(writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_vec3<W: Write>(writer: &mut W, v: DVec3) -> std::io::Result<()> {
    for c in v.to_array() {
        writer.write_all(&(c as f32).to_le_bytes())?;
    }
    Ok(())
}

fn write_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;

    for i in 0..mesh.triangle_count() {
        let n = mesh.triangle_normal(i);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_corners(i) {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}
