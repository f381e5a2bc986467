//! # Clip Jig
//!
//! Parametric drilling jig for pin header clips: a block with a grid of
//! through-holes at the header pitch, exported as STL and STEP.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → ClipJigSpec → make_clip_jig → preview::show → export_all
//! ```
//!
//! Geometry comes from the `jig-mesh` kernel; tolerances and defaults come
//! from the `config` crate.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use clip_jig::{export_all, Catalog, ExportOptions};
//! use config::Resolution;
//!
//! let parts = Catalog::builtin().build(&Resolution::default())?;
//! export_all(&parts, Path::new("build"), &ExportOptions::default())?;
//! # Ok::<(), clip_jig::JigError>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod export;
pub mod layout;
pub mod preview;
pub mod spec;

pub use builder::make_clip_jig;
pub use catalog::{BuiltPart, Catalog, NamedPart};
pub use error::JigError;
pub use export::{check_exportable, export_all, export_part, ExportOptions};
pub use layout::{evenly_space_with_center, hole_centers};
pub use spec::ClipJigSpec;
