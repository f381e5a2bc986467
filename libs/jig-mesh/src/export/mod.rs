//! # Export
//!
//! Writers for the file formats the jig is delivered in.
//!
//! - [`save_stl`]: triangle soup for slicers, binary or ASCII
//! - [`save_step`]: planar B-rep for CAD packages

pub mod step;
pub mod stl;

pub use step::{save_step, StepHeader};
pub use stl::{save_stl, StlFormat};
