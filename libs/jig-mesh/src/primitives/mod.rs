//! # Primitives
//!
//! Mesh generation for the solids the jig is assembled from.

pub mod cube;
pub mod cylinder;

pub use cube::create_box;
pub use cylinder::create_cylinder;
