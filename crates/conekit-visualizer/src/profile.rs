//! 2D cone profile generation.
//!
//! The profile is the axial cross-section the calculator plots: the upper
//! outline runs (0, D/2) -> (l, 0) -> (0, d/2) and the lower outline is its
//! mirror below the axis. The x axis is the cone axis in mm, y is the
//! radius in mm.

use conekit_core::ConeSpec;
use serde::{Deserialize, Serialize};

/// A point in the profile plane (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
}

impl ProfilePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axial cross-section of a truncated cone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeProfile {
    /// Outline above the axis
    pub upper: Vec<ProfilePoint>,
    /// Mirrored outline below the axis
    pub lower: Vec<ProfilePoint>,
}

impl ConeProfile {
    /// Build the profile for the given dimensions. No validation is applied:
    /// degenerate dimensions produce a degenerate outline, which front ends
    /// draw as-is.
    pub fn new(large_diameter: f64, small_diameter: f64, length: f64) -> Self {
        let upper = vec![
            ProfilePoint::new(0.0, large_diameter / 2.0),
            ProfilePoint::new(length, 0.0),
            ProfilePoint::new(0.0, small_diameter / 2.0),
        ];
        let lower = upper
            .iter()
            .map(|p| ProfilePoint::new(p.x, -p.y))
            .collect();
        Self { upper, lower }
    }

    /// Build the profile from a cone spec.
    pub fn from_spec(spec: &ConeSpec) -> Self {
        Self::new(spec.large_diameter, spec.small_diameter, spec.length)
    }

    /// Closed outline for filling: the upper polyline followed by the lower
    /// polyline reversed.
    pub fn outline(&self) -> Vec<ProfilePoint> {
        let mut points = self.upper.clone();
        points.extend(self.lower.iter().rev().copied());
        points
    }

    /// Bounding box (min_x, min_y, max_x, max_y) of the profile.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in self.upper.iter().chain(self.lower.iter()) {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}
