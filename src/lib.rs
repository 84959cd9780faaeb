//! # ConeKit
//!
//! Truncated-cone geometry and turning-parameter calculator:
//! - Cone angle, taper ratio and support angle from the cone dimensions
//! - Length and diameter solving from a known angle
//! - Cutting speed and feed rate for the turning operation
//! - 2D profile rendering with PNG export and a 3D lateral-surface mesh
//!
//! ## Architecture
//!
//! ConeKit is organized as a workspace with multiple crates:
//!
//! 1. **conekit-core** - Solver types, pure trigonometric operations, analysis
//! 2. **conekit-settings** - Explicit configuration and bilingual messages
//! 3. **conekit-visualizer** - 2D profile, 3D mesh, raster rendering
//! 4. **conekit** - Main binary that integrates all crates

pub mod report;

pub use conekit_core::{
    angle_from_dimensions, cutting_speed, feed_rate, large_diameter_from_angle, length_from_angle,
    relative_error, small_diameter_from_angle, small_diameter_from_support, support_angle_forward,
    ConeAnalysis, ConeAngle, ConeReport, ConeSpec, MachiningParams, SolverError,
};

pub use conekit_settings::{Config, InputDefaults, Language, Messages, Theme, UiSettings};

pub use conekit_visualizer::{
    encode_png, export_png, render_profile, ConeMesh, ConeProfile, ProfilePoint, RING_STEPS,
};

pub use report::{format_report, localized_error};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr so reports stay clean on stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
