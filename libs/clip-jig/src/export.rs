//! # Part Export
//!
//! Writes every built part as `{name}.stl` and `{name}.step`.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::{EPSILON, STEP_EXTENSION, STEP_ORGANIZATION_SYSTEM, STL_EXTENSION};
use jig_mesh::{save_step, save_stl, Mesh, StepHeader, StlFormat};
use tracing::info;

use crate::catalog::BuiltPart;
use crate::error::JigError;

/// How parts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Binary or ASCII STL.
    pub stl_format: StlFormat,
    /// Originating system recorded in STEP headers.
    pub organization_system: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            stl_format: StlFormat::Binary,
            organization_system: STEP_ORGANIZATION_SYSTEM.to_owned(),
        }
    }
}

/// Rejects meshes that are not a usable closed solid.
pub fn check_exportable(name: &str, mesh: &Mesh) -> Result<(), JigError> {
    if mesh.is_empty() {
        return Err(JigError::unexpected_geometry(name, "mesh has no triangles"));
    }
    mesh.check()
        .map_err(|e| JigError::unexpected_geometry(name, e.to_string()))?;
    let volume = mesh.volume();
    if volume <= EPSILON {
        return Err(JigError::unexpected_geometry(
            name,
            format!("mesh encloses no volume ({volume})"),
        ));
    }
    Ok(())
}

/// Writes `mesh` into `folder` as `{name}.stl` and `{name}.step`.
///
/// Nothing is written when the mesh fails [`check_exportable`]. Returns the
/// paths written.
pub fn export_part(
    name: &str,
    mesh: &Mesh,
    folder: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, JigError> {
    check_exportable(name, mesh)?;

    let stl_path = folder.join(format!("{name}.{STL_EXTENSION}"));
    save_stl(mesh, &stl_path, options.stl_format)?;
    info!(part = name, path = %stl_path.display(), "exported STL");

    let step_file = format!("{name}.{STEP_EXTENSION}");
    let step_path = folder.join(&step_file);
    let header = StepHeader {
        file_name: step_file,
        organization_system: options.organization_system.clone(),
    };
    save_step(mesh, &step_path, &header)?;
    info!(part = name, path = %step_path.display(), "exported STEP");

    Ok(vec![stl_path, step_path])
}

/// Exports every part into `folder`, creating it when missing.
///
/// All parts are checked before the first file is written.
pub fn export_all(
    parts: &[BuiltPart],
    folder: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, JigError> {
    for part in parts {
        check_exportable(&part.name, &part.mesh)?;
    }

    fs::create_dir_all(folder)?;

    let mut written = Vec::with_capacity(parts.len() * 2);
    for part in parts {
        written.extend(export_part(&part.name, &part.mesh, folder, options)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use jig_mesh::{create_box, Align3};

    fn block() -> Mesh {
        create_box(DVec3::new(3.0, 2.0, 1.0), Align3::ANCHOR_BOTTOM).unwrap()
    }

    #[test]
    fn test_check_accepts_box() {
        assert!(check_exportable("block", &block()).is_ok());
    }

    #[test]
    fn test_check_rejects_empty() {
        let err = check_exportable("empty", &Mesh::new()).unwrap_err();
        assert!(matches!(err, JigError::UnexpectedGeometry { ref name, .. } if name == "empty"));
    }

    #[test]
    fn test_check_rejects_inside_out() {
        let mut mesh = Mesh::new();
        let inverted = block();
        for v in inverted.vertices() {
            mesh.add_vertex(*v);
        }
        for [a, b, c] in inverted.triangles() {
            mesh.add_triangle(*a, *c, *b);
        }
        assert!(check_exportable("inverted", &mesh).is_err());
    }

    #[test]
    fn test_check_rejects_bad_index() {
        let mut mesh = block();
        mesh.add_triangle(0, 1, 99);
        let err = check_exportable("broken", &mesh).unwrap_err();
        assert!(matches!(err, JigError::UnexpectedGeometry { .. }));
    }

    #[test]
    fn test_check_rejects_sliver_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut mesh = block();
        let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 5.0));
        let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 5.0));
        let c = mesh.add_vertex(DVec3::new(0.5, 6e-7, 5.0));
        mesh.add_triangle(a, b, c);

        let result = export_part("thin", &mesh, dir.path(), &ExportOptions::default());

        assert!(matches!(result, Err(JigError::UnexpectedGeometry { .. })));
        assert!(!dir.path().join("thin.stl").exists());
        assert!(!dir.path().join("thin.step").exists());
    }

    #[test]
    fn test_export_part_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();

        let written = export_part("block", &block(), dir.path(), &ExportOptions::default()).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("block.stl"), dir.path().join("block.step")]
        );
        for path in &written {
            assert!(fs::metadata(path).unwrap().len() > 0);
        }
    }

    #[test]
    fn test_export_part_nothing_written_on_bad_geometry() {
        let dir = tempfile::tempdir().unwrap();

        let result = export_part("empty", &Mesh::new(), dir.path(), &ExportOptions::default());

        assert!(result.is_err());
        assert!(!dir.path().join("empty.stl").exists());
        assert!(!dir.path().join("empty.step").exists());
    }

    #[test]
    fn test_export_all_creates_folder() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("build");
        let parts = vec![BuiltPart {
            name: "block".to_owned(),
            mesh: block(),
        }];

        let written = export_all(&parts, &folder, &ExportOptions::default()).unwrap();

        assert_eq!(written.len(), 2);
        assert!(folder.join("block.stl").is_file());
        assert!(folder.join("block.step").is_file());
    }

    #[test]
    fn test_export_all_checks_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let parts = vec![
            BuiltPart {
                name: "good".to_owned(),
                mesh: block(),
            },
            BuiltPart {
                name: "bad".to_owned(),
                mesh: Mesh::new(),
            },
        ];

        let result = export_all(&parts, dir.path(), &ExportOptions::default());

        assert!(matches!(result, Err(JigError::UnexpectedGeometry { .. })));
        assert!(!dir.path().join("good.stl").exists());
    }
}
