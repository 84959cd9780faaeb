//! ConeKit Settings Crate
//!
//! Handles presentation-layer configuration and localization: display
//! language, theme and calculator input defaults, carried as an explicit
//! value instead of global state.

pub mod config;
pub mod error;
pub mod localization;

pub use config::{Config, InputDefaults, Theme, UiSettings};
pub use error::{SettingsError, SettingsResult};
pub use localization::{Language, Messages};
