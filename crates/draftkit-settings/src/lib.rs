//! draftkit Settings Crate
//!
//! Handles editor configuration: pick tolerance, selection behavior, and
//! logging preferences, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, HitSettings, LoggingSettings, SelectionSettings, ToggleModifier};
pub use error::{ConfigError, SettingsError, SettingsResult};
