//! Display language selection and bilingual message catalog.
//!
//! The calculator ships with English and Farsi label sets. The catalog is a
//! static lookup so report formatting never allocates for labels; the
//! presentation layer picks the set via [`Language`], which travels inside
//! the explicit [`Config`](crate::Config) rather than any global state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English labels
    English,
    /// Farsi (Persian) labels
    Farsi,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Farsi => write!(f, "Farsi"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "farsi" | "persian" | "fa" => Ok(Self::Farsi),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

impl Language {
    /// The message catalog for this language.
    pub fn messages(&self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::Farsi => &FARSI,
        }
    }
}

/// Label set for one display language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,

    // Input field labels
    pub input_large_diameter: &'static str,
    pub input_small_diameter: &'static str,
    pub input_length: &'static str,
    pub input_spindle_rpm: &'static str,
    pub input_feed_per_rev: &'static str,
    pub input_measured_diameter: &'static str,
    pub input_support_angle: &'static str,

    // Section headings
    pub section_inputs: &'static str,
    pub section_angle: &'static str,
    pub section_support: &'static str,
    pub section_support_reverse: &'static str,
    pub section_cutting: &'static str,

    // Result labels
    pub result_angle: &'static str,
    pub result_taper_ratio: &'static str,
    pub result_relative_error: &'static str,
    pub result_support_angle: &'static str,
    pub result_support_diameter: &'static str,
    pub result_cutting_speed: &'static str,
    pub result_feed_rate: &'static str,

    // Error messages
    pub error_invalid_dimensions: &'static str,
    pub error_invalid_support: &'static str,
}

static ENGLISH: Messages = Messages {
    title: "Cone Expert",
    input_large_diameter: "Large Diameter D (mm)",
    input_small_diameter: "Small Diameter d (mm)",
    input_length: "Cone Length l (mm)",
    input_spindle_rpm: "Spindle Speed (rpm)",
    input_feed_per_rev: "Feed Rate (mm/rev)",
    input_measured_diameter: "Real Measured D (optional)",
    input_support_angle: "Support Angle (degrees)",
    section_inputs: "Input Parameters",
    section_angle: "Cone Angle & Taper Ratio",
    section_support: "Support Angle",
    section_support_reverse: "Reverse Support Calculation",
    section_cutting: "Cutting Speed & Feed",
    result_angle: "Cone Angle α",
    result_taper_ratio: "Taper Ratio k",
    result_relative_error: "Error from Real D",
    result_support_angle: "Calculated Support Angle",
    result_support_diameter: "Calculated small diameter d",
    result_cutting_speed: "Cutting Speed",
    result_feed_rate: "Feed Rate",
    error_invalid_dimensions: "Invalid input: D > d and l > 0 required.",
    error_invalid_support: "Invalid input for reverse support.",
};

static FARSI: Messages = Messages {
    title: "مخروط‌یار",
    input_large_diameter: "قطر بزرگ D (میلی‌متر)",
    input_small_diameter: "قطر کوچک d (میلی‌متر)",
    input_length: "طول مخروط l (میلی‌متر)",
    input_spindle_rpm: "دور اسپیندل (rpm)",
    input_feed_per_rev: "میزان پیشروی (میلی‌متر/دور)",
    input_measured_diameter: "قطر واقعی D (اختیاری)",
    input_support_angle: "زاویه ساپورت (درجه)",
    section_inputs: "ورودی‌ها",
    section_angle: "زاویه مخروط و نسبت مخروطی",
    section_support: "زاویه ساپورت",
    section_support_reverse: "محاسبه معکوس ساپورت",
    section_cutting: "سرعت برش و پیشروی",
    result_angle: "زاویه مخروط α",
    result_taper_ratio: "نسبت مخروطی k",
    result_relative_error: "خطا نسبت به مقدار واقعی",
    result_support_angle: "زاویه ساپورت محاسبه‌شده",
    result_support_diameter: "قطر کوچک d محاسبه‌شده",
    result_cutting_speed: "سرعت برش",
    result_feed_rate: "نرخ پیشروی",
    error_invalid_dimensions: "ورودی نادرست: D باید > d و l > 0 باشد.",
    error_invalid_support: "ورودی‌های معکوس ساپورت نادرست.",
};
