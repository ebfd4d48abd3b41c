//! LabelKit Settings Crate
//!
//! Handles editor configuration: viewport limits, hit-testing tolerances,
//! label presets, history depth and render styling. Files are TOML or JSON,
//! chosen by extension, and are validated on every load and save.

pub mod config;
pub mod error;

pub use config::{
    EditorConfig, HistorySettings, HitTestingSettings, LabelPreset, LabelSettings,
    RenderSettings, ViewportSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
