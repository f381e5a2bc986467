//! # Jig Assembly
//!
//! Turns a [`ClipJigSpec`] into a solid: a block standing on z = 0 with one
//! through-hole per pin.

use config::Resolution;
use glam::DVec3;
use jig_mesh::{create_box, create_cylinder, difference, union_all, Align3, Mesh};
use tracing::debug;

use crate::error::JigError;
use crate::layout::hole_centers;
use crate::spec::ClipJigSpec;

/// Builds the jig solid for `spec`.
///
/// The block is `total_x × total_y × target_pin_length`, centered in XY.
/// Every hole runs the full block height. `resolution` sets how finely the
/// holes are tessellated.
///
/// # Errors
///
/// Kernel errors are returned as [`JigError::Mesh`], e.g. for a spec with
/// fewer than two pins along X, which gives a block of zero length.
///
/// # Example
///
/// ```rust
/// use clip_jig::{make_clip_jig, ClipJigSpec};
/// use config::Resolution;
///
/// let spec = ClipJigSpec { pin_count_x: 3, pin_count_y: 1, ..ClipJigSpec::default() };
/// let jig = make_clip_jig(&spec, &Resolution::with_fn(12)?)?;
/// assert!(jig.volume() > 0.0);
/// # Ok::<(), clip_jig::JigError>(())
/// ```
pub fn make_clip_jig(spec: &ClipJigSpec, resolution: &Resolution) -> Result<Mesh, JigError> {
    let block = create_box(
        DVec3::new(spec.total_x(), spec.total_y(), spec.target_pin_length),
        Align3::ANCHOR_BOTTOM,
    )?;

    let radius = spec.pin_hole_size / 2.0;
    let segments = resolution.segments_for(radius);
    let hole = create_cylinder(radius, spec.target_pin_length, Align3::ANCHOR_BOTTOM, segments)?;

    let tools: Vec<Mesh> = hole_centers(spec)
        .into_iter()
        .map(|center| hole.translated(center.extend(0.0)))
        .collect();

    debug!(
        holes = tools.len(),
        radius,
        segments,
        "drilling clip jig"
    );

    let drill = union_all(&tools)?;
    let jig = difference(&block, &drill)?;

    debug!(
        triangles = jig.triangle_count(),
        vertices = jig.vertex_count(),
        "clip jig built"
    );
    Ok(jig)
}
