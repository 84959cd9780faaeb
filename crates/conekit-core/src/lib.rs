//! # ConeKit Core
//!
//! Core cone geometry solver and turning parameter calculations.
//! Provides the stateless trigonometric operations over the cone scalars
//! {D, d, l, alpha, k}, the support-angle forward/reverse calculations,
//! cutting speed and feed rate, and a one-shot analysis report.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! lifecycle beyond the function call.

pub mod analysis;
pub mod error;
pub mod solver;
pub mod types;

pub use analysis::{ConeAnalysis, ConeReport};
pub use error::{Result, SolverError};
pub use solver::{
    angle_from_dimensions, cutting_speed, feed_rate, large_diameter_from_angle, length_from_angle,
    relative_error, small_diameter_from_angle, small_diameter_from_support, support_angle_forward,
};
pub use types::{ConeAngle, ConeSpec, MachiningParams};
