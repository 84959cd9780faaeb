//! # ConeKit Visualizer
//!
//! 2D profile and 3D mesh generation for truncated cones, plus raster
//! rendering and PNG export of the 2D profile.
//!
//! - 2D: the axial cross-section the calculator plots
//! - 3D: a two-ring triangulated lateral surface (50 points per ring)
//! - Raster: tiny-skia drawing converted to an `image::RgbImage`

pub mod mesh;
pub mod profile;
pub mod render;

pub use mesh::{ConeMesh, RING_STEPS};
pub use profile::{ConeProfile, ProfilePoint};
pub use render::{encode_png, export_png, render_profile};
