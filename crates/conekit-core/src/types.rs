//! Parameter and result types for the cone solver.
//!
//! All entities are immutable per-invocation scalar bundles in millimeters,
//! degrees and rpm. None of them carries identity or lifecycle beyond the
//! function call that consumes it.

use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};

/// Dimensions of a truncated cone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeSpec {
    /// Large diameter D (mm)
    pub large_diameter: f64,
    /// Small diameter d (mm)
    pub small_diameter: f64,
    /// Cone length l (mm)
    pub length: f64,
}

impl ConeSpec {
    /// Create a new cone spec. No validation is performed here; call
    /// [`ConeSpec::validate`] before solving for angle or length.
    pub fn new(large_diameter: f64, small_diameter: f64, length: f64) -> Self {
        Self {
            large_diameter,
            small_diameter,
            length,
        }
    }

    /// Check the solving invariant D >= d > 0 and l > 0.
    ///
    /// D == d is accepted: it describes a straight cylinder, which the angle
    /// solver maps to alpha = 0 with an undefined taper ratio.
    pub fn validate(&self) -> Result<()> {
        if self.small_diameter <= 0.0 {
            return Err(SolverError::dimensions(format!(
                "small diameter must be positive, got {}",
                self.small_diameter
            )));
        }
        if self.large_diameter < self.small_diameter {
            return Err(SolverError::dimensions(format!(
                "large diameter {} must not be below small diameter {}",
                self.large_diameter, self.small_diameter
            )));
        }
        if self.length <= 0.0 {
            return Err(SolverError::dimensions(format!(
                "length must be positive, got {}",
                self.length
            )));
        }
        Ok(())
    }

    /// Difference between the two diameters (mm).
    pub fn diameter_delta(&self) -> f64 {
        self.large_diameter - self.small_diameter
    }
}

/// Solved cone angle and taper ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeAngle {
    /// Full cone apex angle alpha (degrees)
    pub alpha_deg: f64,
    /// Taper ratio k = 1 / (2 tan(alpha/2)).
    /// `None` when the diameters are equal (alpha = 0, k undefined).
    pub taper_ratio: Option<f64>,
}

/// Turning parameters for the workpiece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachiningParams {
    /// Spindle speed (rpm)
    pub spindle_rpm: f64,
    /// Feed per revolution (mm/rev)
    pub feed_per_rev: f64,
}

impl MachiningParams {
    pub fn new(spindle_rpm: f64, feed_per_rev: f64) -> Self {
        Self {
            spindle_rpm,
            feed_per_rev,
        }
    }

    /// Both rates must be non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.spindle_rpm < 0.0 {
            return Err(SolverError::dimensions(format!(
                "spindle speed must be non-negative, got {}",
                self.spindle_rpm
            )));
        }
        if self.feed_per_rev < 0.0 {
            return Err(SolverError::dimensions(format!(
                "feed per revolution must be non-negative, got {}",
                self.feed_per_rev
            )));
        }
        Ok(())
    }
}

impl Default for MachiningParams {
    fn default() -> Self {
        Self {
            spindle_rpm: 600.0,
            feed_per_rev: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_spec_validate_ok() {
        assert!(ConeSpec::new(50.0, 30.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_cone_spec_accepts_cylinder() {
        assert!(ConeSpec::new(30.0, 30.0, 100.0).validate().is_ok());
    }

    #[test]
    fn test_cone_spec_rejects_inverted_diameters() {
        let err = ConeSpec::new(30.0, 50.0, 100.0).validate().unwrap_err();
        assert!(matches!(err, SolverError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_cone_spec_rejects_zero_length() {
        let err = ConeSpec::new(50.0, 30.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, SolverError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_machining_params_validate() {
        assert!(MachiningParams::default().validate().is_ok());
        assert!(MachiningParams::new(0.0, 0.0).validate().is_ok());
        assert!(MachiningParams::new(-1.0, 0.2).validate().is_err());
        assert!(MachiningParams::new(600.0, -0.1).validate().is_err());
    }

    #[test]
    fn test_cone_spec_serde_roundtrip() {
        let spec = ConeSpec::new(50.0, 30.0, 100.0);
        let json = serde_json::to_string(&spec).unwrap();
        let back: ConeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
