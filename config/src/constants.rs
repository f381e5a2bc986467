//! # Configuration Constants
//!
//! Centralized constants for the clip jig pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters ($fn, $fa, $fs)
//! - **Limits**: Maximum values for safety bounds
//! - **Jig Defaults**: Dimensions of the stock pin header clip jig
//! - **Output**: Export folder and file naming

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication.
///
/// Slightly larger tolerance used when welding nearly-identical vertices
/// produced by boolean operations before export.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Tolerance used by the BSP boolean kernel when classifying a point
/// against a splitting plane.
///
/// Points closer than this to a plane are treated as coplanar.
///
/// # Example
///
/// ```rust
/// use config::constants::{PLANE_EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(PLANE_EPSILON > VERTEX_MERGE_EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Smallest doubled area (cross product length) of a usable triangle.
///
/// Lies above the 1e-6 tolerance `truck` uses when fitting a plane to a
/// face, so every triangle that passes `Mesh::check` can be written to STEP.
///
/// # Example
///
/// ```rust
/// use config::constants::{SLIVER_EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(SLIVER_EPSILON > 1e-6);
/// assert!(SLIVER_EPSILON > VERTEX_MERGE_EPSILON);
/// ```
pub const SLIVER_EPSILON: f64 = 1e-5;

/// Edges of a sliver shorter than this may be collapsed into one vertex.
pub const SLIVER_COLLAPSE_DISTANCE: f64 = 1e-4;

/// Upper bound on flip and collapse rounds when repairing slivers.
pub const SLIVER_REPAIR_PASSES: usize = 4;

// =============================================================================
// RESOLUTION CONSTANTS ($fn, $fa, $fs)
// =============================================================================

/// Default value for $fa (minimum fragment angle in degrees).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FA;
///
/// let max_from_angle = 360.0 / DEFAULT_FA;
/// assert_eq!(max_from_angle, 30.0);
/// ```
pub const DEFAULT_FA: f64 = 12.0;

/// Default value for $fs (minimum fragment size, millimetres).
///
/// Pin holes are small, so this is much finer than the 2 mm a general
/// modelling tool would use.
pub const DEFAULT_FS: f64 = 0.2;

/// Minimum number of fragments for any circular shape.
pub const MIN_FRAGMENTS: u32 = 5;

/// Maximum number of fragments for any circular shape.
pub const MAX_FRAGMENTS: u32 = 1000;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Boolean results beyond this size are rejected instead of exported.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// JIG DEFAULTS
// =============================================================================

/// Center-to-center pin spacing of a standard 0.1" header (mm).
pub const DEFAULT_PIN_PITCH: f64 = 2.54;

/// Pins along X.
pub const DEFAULT_PIN_COUNT_X: u32 = 8;

/// Pins along Y.
pub const DEFAULT_PIN_COUNT_Y: u32 = 3;

/// Drilled hole diameter (mm).
pub const DEFAULT_PIN_HOLE_SIZE: f64 = 1.5;

/// Hole diameter of the oversized variant (mm).
pub const BIG_PIN_HOLE_SIZE: f64 = 2.0;

/// Jig thickness, which is also the hole depth (mm).
///
/// ESQ-126-13-G-D length B is 7.37 mm and the PCB is 1.6 mm thick, leaving
/// 5.77 mm; the jig is cut slightly shorter.
pub const DEFAULT_TARGET_PIN_LENGTH: f64 = 5.4;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Folder that receives exported models.
pub const BUILD_DIR_NAME: &str = "build";

/// Extension of the triangulated mesh export.
pub const STL_EXTENSION: &str = "stl";

/// Extension of the boundary-representation export.
pub const STEP_EXTENSION: &str = "step";

/// Name of the stock jig part.
pub const CLIP_JIG_PART_NAME: &str = "clip_jig";

/// Name of the oversized-hole jig part.
pub const CLIP_JIG_BIG_HOLES_PART_NAME: &str = "clip_jig_big_holes";

/// Organization string written into STEP headers.
pub const STEP_ORGANIZATION_SYSTEM: &str = "clip-jig jig-mesh";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of fragments for a circular shape.
///
/// - If $fn > 0: use $fn (clamped to MIN_FRAGMENTS..MAX_FRAGMENTS)
/// - Otherwise: ceil(min(360/$fa, 2*PI*r/$fs)) clamped to MIN_FRAGMENTS..MAX_FRAGMENTS
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_fragments, DEFAULT_FA, DEFAULT_FS};
///
/// let fragments = compute_fragments(10.0, 32.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 32);
///
/// let fragments = compute_fragments(0.75, 0.0, DEFAULT_FA, DEFAULT_FS);
/// assert_eq!(fragments, 24);
/// ```
pub fn compute_fragments(radius: f64, fn_value: f64, fa_value: f64, fs_value: f64) -> u32 {
    let fragments = if fn_value > 0.0 {
        fn_value as u32
    } else {
        let from_angle = 360.0 / fa_value;
        let from_size = (2.0 * std::f64::consts::PI * radius) / fs_value;
        from_angle.min(from_size).ceil() as u32
    };

    fragments.clamp(MIN_FRAGMENTS, MAX_FRAGMENTS)
}
