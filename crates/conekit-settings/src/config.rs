//! Configuration for the ConeKit presentation layer.
//!
//! The original tool kept language, theme and field defaults in process-wide
//! UI state. Here they live in an explicit [`Config`] value handed to
//! whatever front end drives the solver, so the solver itself stays
//! stateless and reusable from a CLI, a service or a test harness.
//!
//! Configuration is organized into logical sections:
//! - UI preferences (language, theme)
//! - Input defaults (the values pre-filled into the calculator fields)

use crate::error::{SettingsError, SettingsResult};
use crate::localization::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow system preference
    System,
    /// Force light theme
    Light,
    /// Force dark theme
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::System
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Display language for reports and error messages
    pub language: Language,
    /// Color theme for graphical front ends
    pub theme: Theme,
}

/// Default values pre-filled into the calculator input fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Large diameter D (mm)
    pub large_diameter: f64,
    /// Small diameter d (mm)
    pub small_diameter: f64,
    /// Cone length l (mm)
    pub length: f64,
    /// Spindle speed (rpm)
    pub spindle_rpm: f64,
    /// Feed per revolution (mm/rev)
    pub feed_per_rev: f64,
    /// Support angle (degrees)
    pub support_angle: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            large_diameter: 50.0,
            small_diameter: 30.0,
            length: 100.0,
            spindle_rpm: 600.0,
            feed_per_rev: 0.2,
            support_angle: 15.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
    /// Input defaults
    #[serde(default)]
    pub defaults: InputDefaults,
}

impl Config {
    /// Parse a configuration from a JSON document and validate it.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the default field values.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.defaults.spindle_rpm < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "defaults.spindle_rpm".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        if self.defaults.feed_per_rev < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "defaults.feed_per_rev".to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
        if self.defaults.length <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "defaults.length".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
