//! Cone geometry solver.
//!
//! Pure trigonometric operations over the five cone scalars {D, d, l, alpha,
//! k} plus the turning scalars {spindle speed, feed per revolution} and the
//! support angle. Every function is a stateless, idempotent transform; the
//! only failures are input-domain validations.
//!
//! Angle convention: `alpha_deg` is the full apex angle of the cone, so the
//! profile slope against the axis is alpha/2. The support angle of a lathe
//! compound slide equals that half angle.

use crate::error::{Result, SolverError};
use crate::types::{ConeAngle, ConeSpec};
use tracing::debug;

/// Solve the cone angle and taper ratio from the three dimensions.
///
/// tan(alpha/2) = (D - d) / (2 l), alpha = 2 atan(tan(alpha/2)),
/// k = 1 / (2 tan(alpha/2)).
///
/// Equal diameters describe a cylinder: alpha = 0 and the taper ratio is
/// undefined, returned as `None` rather than dividing by zero.
pub fn angle_from_dimensions(spec: &ConeSpec) -> Result<ConeAngle> {
    spec.validate()?;

    let delta = spec.diameter_delta();
    if delta == 0.0 {
        return Ok(ConeAngle {
            alpha_deg: 0.0,
            taper_ratio: None,
        });
    }

    let tan_half = delta / (2.0 * spec.length);
    let alpha_deg = (2.0 * tan_half.atan()).to_degrees();
    let taper_ratio = 1.0 / (2.0 * tan_half);
    debug!(alpha_deg, taper_ratio, "solved cone angle from dimensions");

    Ok(ConeAngle {
        alpha_deg,
        taper_ratio: Some(taper_ratio),
    })
}

/// Solve the cone length from both diameters and the apex angle.
///
/// l = (D - d) / (2 tan(alpha/2)).
pub fn length_from_angle(large_diameter: f64, small_diameter: f64, alpha_deg: f64) -> Result<f64> {
    if large_diameter <= small_diameter {
        return Err(SolverError::dimensions(format!(
            "large diameter {} must exceed small diameter {}",
            large_diameter, small_diameter
        )));
    }
    if alpha_deg <= 0.0 || alpha_deg >= 180.0 {
        return Err(SolverError::dimensions(format!(
            "cone angle must lie in (0, 180) degrees, got {}",
            alpha_deg
        )));
    }

    let tan_half = (alpha_deg / 2.0).to_radians().tan();
    Ok((large_diameter - small_diameter) / (2.0 * tan_half))
}

/// Solve the small diameter from the large diameter, length and apex angle.
///
/// d = D - 2 l tan(alpha/2). Deliberately unguarded: extreme angles or
/// lengths yield d <= 0 or d >= D, and callers render that result as-is.
pub fn small_diameter_from_angle(large_diameter: f64, length: f64, alpha_deg: f64) -> f64 {
    large_diameter - 2.0 * length * (alpha_deg / 2.0).to_radians().tan()
}

/// Solve the large diameter from the small diameter, length and apex angle.
///
/// D = d + 2 l tan(alpha/2). Same no-validation policy as
/// [`small_diameter_from_angle`].
pub fn large_diameter_from_angle(small_diameter: f64, length: f64, alpha_deg: f64) -> f64 {
    small_diameter + 2.0 * length * (alpha_deg / 2.0).to_radians().tan()
}

/// Support (compound-slide) angle for a given apex angle: alpha / 2.
pub fn support_angle_forward(alpha_deg: f64) -> f64 {
    alpha_deg / 2.0
}

/// Reverse support calculation: small diameter from the support angle.
///
/// d = D - 2 l tan(support). The support angle, large diameter and length
/// must all be positive; the resulting diameter may still be negative for a
/// steep support angle, which is reported as-is.
pub fn small_diameter_from_support(
    large_diameter: f64,
    length: f64,
    support_deg: f64,
) -> Result<f64> {
    if support_deg <= 0.0 {
        return Err(SolverError::support(format!(
            "support angle must be positive, got {}",
            support_deg
        )));
    }
    if large_diameter <= 0.0 {
        return Err(SolverError::support(format!(
            "large diameter must be positive, got {}",
            large_diameter
        )));
    }
    if length <= 0.0 {
        return Err(SolverError::support(format!(
            "length must be positive, got {}",
            length
        )));
    }

    let d = large_diameter - 2.0 * length * support_deg.to_radians().tan();
    debug!(support_deg, d, "solved small diameter from support angle");
    Ok(d)
}

/// Relative deviation of a measured diameter from its nominal value, in
/// percent: |real - nominal| / nominal * 100.
pub fn relative_error(real_diameter: f64, nominal_diameter: f64) -> f64 {
    (real_diameter - nominal_diameter).abs() / nominal_diameter * 100.0
}

/// Cutting (surface) speed of the rotating workpiece in m/min:
/// V = pi * D * N / 1000 with D in mm and N in rpm.
pub fn cutting_speed(diameter: f64, spindle_rpm: f64) -> f64 {
    std::f64::consts::PI * diameter * spindle_rpm / 1000.0
}

/// Linear feed rate in mm/min from feed per revolution and spindle speed.
pub fn feed_rate(feed_per_rev: f64, spindle_rpm: f64) -> f64 {
    feed_per_rev * spindle_rpm
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_angle_from_dimensions_reference_cone() {
        let spec = ConeSpec::new(50.0, 30.0, 100.0);
        let angle = angle_from_dimensions(&spec).unwrap();
        assert!((angle.alpha_deg - 11.421186).abs() < 1e-4);
        // tan(alpha/2) = 0.1, so k = 1 / 0.2
        assert!((angle.taper_ratio.unwrap() - 5.0).abs() < TOL);
    }

    #[test]
    fn test_angle_from_dimensions_cylinder_is_guarded() {
        let spec = ConeSpec::new(30.0, 30.0, 100.0);
        let angle = angle_from_dimensions(&spec).unwrap();
        assert_eq!(angle.alpha_deg, 0.0);
        assert!(angle.taper_ratio.is_none());
    }

    #[test]
    fn test_angle_from_dimensions_rejects_bad_inputs() {
        assert!(matches!(
            angle_from_dimensions(&ConeSpec::new(30.0, 50.0, 100.0)),
            Err(SolverError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            angle_from_dimensions(&ConeSpec::new(50.0, 30.0, 0.0)),
            Err(SolverError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            angle_from_dimensions(&ConeSpec::new(50.0, -1.0, 100.0)),
            Err(SolverError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_length_from_angle_reference_cone() {
        let l = length_from_angle(50.0, 30.0, 30.0).unwrap();
        assert!((l - 37.320508).abs() < 1e-4);
    }

    #[test]
    fn test_length_from_angle_rejects_bad_inputs() {
        assert!(length_from_angle(30.0, 30.0, 30.0).is_err());
        assert!(length_from_angle(30.0, 50.0, 30.0).is_err());
        assert!(length_from_angle(50.0, 30.0, 0.0).is_err());
        assert!(length_from_angle(50.0, 30.0, 180.0).is_err());
    }

    #[test]
    fn test_diameter_solvers_are_inverse() {
        let d = small_diameter_from_angle(50.0, 100.0, 11.421186);
        let back = large_diameter_from_angle(d, 100.0, 11.421186);
        assert!((back - 50.0).abs() < TOL);
    }

    #[test]
    fn test_small_diameter_from_angle_permits_negative() {
        // A long cone at a wide angle runs out of material; no error.
        let d = small_diameter_from_angle(10.0, 100.0, 60.0);
        assert!(d < 0.0);
    }

    #[test]
    fn test_support_angle_forward_is_exact_half() {
        let spec = ConeSpec::new(50.0, 30.0, 100.0);
        let alpha = angle_from_dimensions(&spec).unwrap().alpha_deg;
        assert_eq!(support_angle_forward(alpha), alpha / 2.0);
    }

    #[test]
    fn test_small_diameter_from_support_reference() {
        let d = small_diameter_from_support(50.0, 100.0, 15.0).unwrap();
        assert!((d - (-3.589838)).abs() < 1e-4);
    }

    #[test]
    fn test_small_diameter_from_support_rejects_bad_inputs() {
        assert!(matches!(
            small_diameter_from_support(50.0, 100.0, 0.0),
            Err(SolverError::InvalidSupportInput { .. })
        ));
        assert!(matches!(
            small_diameter_from_support(0.0, 100.0, 15.0),
            Err(SolverError::InvalidSupportInput { .. })
        ));
        assert!(matches!(
            small_diameter_from_support(50.0, 0.0, 15.0),
            Err(SolverError::InvalidSupportInput { .. })
        ));
    }

    #[test]
    fn test_relative_error_percent() {
        assert!((relative_error(51.0, 50.0) - 2.0).abs() < TOL);
        assert!((relative_error(49.0, 50.0) - 2.0).abs() < TOL);
        assert_eq!(relative_error(50.0, 50.0), 0.0);
    }

    #[test]
    fn test_cutting_speed_reference() {
        let v = cutting_speed(40.0, 600.0);
        assert!((v - 75.398224).abs() < 1e-4);
        assert_eq!(cutting_speed(0.0, 600.0), 0.0);
    }

    #[test]
    fn test_feed_rate() {
        assert!((feed_rate(0.2, 600.0) - 120.0).abs() < TOL);
        assert_eq!(feed_rate(0.0, 600.0), 0.0);
    }
}
