//! # Jig Mesh
//!
//! Pure Rust geometry kernel for the clip jig: aligned primitives,
//! constructive solid geometry and model export.
//!
//! ## Architecture
//!
//! ```text
//! primitives (box, cylinder) → ops::boolean (BSP CSG) → export (STL, STEP)
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: Custom mesh generation with build-style alignment
//! - **STEP**: Planar B-rep faces through the `truck` CAD crates
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use jig_mesh::{create_box, create_cylinder, difference, Align3};
//!
//! let block = create_box(DVec3::new(10.0, 10.0, 5.0), Align3::ANCHOR_BOTTOM)?;
//! let hole = create_cylinder(1.0, 5.0, Align3::ANCHOR_BOTTOM, 16)?;
//! let drilled = difference(&block, &hole)?;
//! assert!(drilled.volume() < block.volume());
//! # Ok::<(), jig_mesh::MeshError>(())
//! ```

pub mod align;
pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use align::{Align, Align3};
pub use error::MeshError;
pub use export::{save_step, save_stl, StepHeader, StlFormat};
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union, union_all};
pub use primitives::{create_box, create_cylinder};
