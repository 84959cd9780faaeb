//! Localized text report for a cone analysis.
//!
//! Turns a [`ConeReport`] into the display strings the calculator shows,
//! using the message catalog selected by the configuration. The number
//! formats match the original calculator screen: angles and speeds with two
//! decimals, the taper ratio with three.

use conekit_core::{ConeReport, SolverError};
use conekit_settings::{Config, Language};

/// Format the full report in the configured language.
pub fn format_report(config: &Config, report: &ConeReport) -> String {
    let m = config.ui.language.messages();
    let mut out = String::new();

    out.push_str(m.title);
    out.push('\n');
    for _ in 0..m.title.chars().count() {
        out.push('=');
    }
    out.push('\n');

    out.push_str(&format!(
        "{}: D = {:.2} mm, d = {:.2} mm, l = {:.2} mm\n",
        m.section_inputs,
        report.spec.large_diameter,
        report.spec.small_diameter,
        report.spec.length
    ));

    out.push_str(&format!(
        "{} = {:.2}°\n",
        m.result_angle, report.angle.alpha_deg
    ));
    if let Some(k) = report.angle.taper_ratio {
        out.push_str(&format!("{} = {:.3}\n", m.result_taper_ratio, k));
    }
    if let Some(error) = report.relative_error_percent {
        out.push_str(&format!("{}: {:.2}%\n", m.result_relative_error, error));
    }

    out.push_str(&format!(
        "{} ≈ {:.2}°\n",
        m.result_support_angle, report.support_deg
    ));
    if let Some(d) = report.support_small_diameter {
        out.push_str(&format!("{} = {:.2} mm\n", m.result_support_diameter, d));
    }

    out.push_str(&format!(
        "{} = {:.2} m/min\n",
        m.result_cutting_speed, report.cutting_speed_m_min
    ));
    out.push_str(&format!(
        "{} = {:.2} mm/min\n",
        m.result_feed_rate, report.feed_mm_min
    ));

    out
}

/// The user-facing message for a solver error in the given language.
pub fn localized_error(language: Language, error: &SolverError) -> &'static str {
    let m = language.messages();
    match error {
        SolverError::InvalidDimensions { .. } => m.error_invalid_dimensions,
        SolverError::InvalidSupportInput { .. } => m.error_invalid_support,
    }
}
