//! One-shot cone analysis.
//!
//! Bundles every quantity the calculator screen shows for a single set of
//! inputs: angle, taper ratio, support angle, cutting speed, feed rate and
//! the optional measured-diameter deviation and reverse-support diameter.
//! Validation happens up front; on failure no partial result is produced.

use crate::error::Result;
use crate::solver;
use crate::types::{ConeAngle, ConeSpec, MachiningParams};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full result of one cone analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConeReport {
    /// The dimensions that were analyzed
    pub spec: ConeSpec,
    /// Solved apex angle and taper ratio
    pub angle: ConeAngle,
    /// Compound-slide support angle (degrees)
    pub support_deg: f64,
    /// Cutting speed at the large diameter (m/min)
    pub cutting_speed_m_min: f64,
    /// Linear feed rate (mm/min)
    pub feed_mm_min: f64,
    /// Deviation of the measured large diameter from nominal, in percent.
    /// `None` when no measurement was supplied.
    pub relative_error_percent: Option<f64>,
    /// Small diameter derived from an independently supplied support angle.
    /// `None` when no support angle was supplied. May be negative.
    pub support_small_diameter: Option<f64>,
}

/// Stateless analysis entry point
pub struct ConeAnalysis;

impl ConeAnalysis {
    /// Evaluate the complete report for one set of inputs.
    ///
    /// `measured_large_diameter` is an optional workshop measurement of D;
    /// when present the report carries its relative error. `support_deg`
    /// is an optional independently supplied support angle; when present
    /// the report carries the small diameter it implies.
    pub fn evaluate(
        spec: &ConeSpec,
        machining: &MachiningParams,
        measured_large_diameter: Option<f64>,
        support_deg: Option<f64>,
    ) -> Result<ConeReport> {
        spec.validate()?;
        machining.validate()?;

        let angle = solver::angle_from_dimensions(spec)?;
        let support = solver::support_angle_forward(angle.alpha_deg);
        let cutting_speed_m_min = solver::cutting_speed(spec.large_diameter, machining.spindle_rpm);
        let feed_mm_min = solver::feed_rate(machining.feed_per_rev, machining.spindle_rpm);

        let relative_error_percent = measured_large_diameter
            .map(|measured| solver::relative_error(measured, spec.large_diameter));

        let support_small_diameter = match support_deg {
            Some(deg) => Some(solver::small_diameter_from_support(
                spec.large_diameter,
                spec.length,
                deg,
            )?),
            None => None,
        };

        debug!(
            alpha_deg = angle.alpha_deg,
            support,
            cutting_speed_m_min,
            feed_mm_min,
            "evaluated cone report"
        );

        Ok(ConeReport {
            spec: *spec,
            angle,
            support_deg: support,
            cutting_speed_m_min,
            feed_mm_min,
            relative_error_percent,
            support_small_diameter,
        })
    }
}
