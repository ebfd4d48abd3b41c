//! Editor configuration for LabelKit
//!
//! Configuration is organized into logical sections:
//! - Viewport limits (scale bounds, zoom speed)
//! - Hit-testing tolerances (vertex, edge, polygon closing)
//! - Label presets (default label/colour, palette)
//! - History depth
//! - Render styling for the SVG export

use labelkit_core::constants;
use labelkit_core::LabelColor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsResult};

/// Viewport limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Smallest reachable scale
    pub min_scale: f64,
    /// Largest reachable scale
    pub max_scale: f64,
    /// Scale change per unit of wheel delta
    pub zoom_speed: f64,
    /// Scale when a session starts
    pub initial_scale: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
            zoom_speed: constants::ZOOM_SPEED,
            initial_scale: constants::INITIAL_SCALE,
        }
    }
}

/// Hit-testing tolerances, in screen pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestingSettings {
    /// Vertex hit radius
    pub point_radius: f64,
    /// Edge hit distance
    pub line_distance: f64,
    /// Distance to the first vertex that closes an open polygon
    pub close_threshold: f64,
}

impl Default for HitTestingSettings {
    fn default() -> Self {
        Self {
            point_radius: constants::POINT_HIT_RADIUS,
            line_distance: constants::LINE_HIT_DISTANCE,
            close_threshold: constants::CLOSE_THRESHOLD,
        }
    }
}

/// A named label with its display colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPreset {
    pub label: String,
    pub color: LabelColor,
}

impl LabelPreset {
    pub fn new(label: impl Into<String>, color: LabelColor) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Label defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Label given to new polygons
    pub default_label: String,
    /// Colour given to new polygons
    pub default_color: LabelColor,
    /// Presets offered by the label picker
    pub palette: Vec<LabelPreset>,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            default_label: constants::DEFAULT_LABEL.to_string(),
            default_color: constants::DEFAULT_COLOR,
            palette: vec![
                LabelPreset::new("object", constants::DEFAULT_COLOR),
                LabelPreset::new("person", LabelColor::from_rgb(0x00, 0xa2, 0xff)),
                LabelPreset::new("vehicle", LabelColor::from_rgb(0xff, 0xb3, 0x00)),
            ],
        }
    }
}

impl LabelSettings {
    /// The default label as a preset
    pub fn default_preset(&self) -> LabelPreset {
        LabelPreset::new(self.default_label.clone(), self.default_color)
    }

    /// Find a palette entry by label name
    pub fn preset(&self, label: &str) -> Option<&LabelPreset> {
        self.palette.iter().find(|p| p.label == label)
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable commands
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: constants::HISTORY_DEPTH,
        }
    }
}

/// Styling used when rendering polygons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Fill opacity in `[0, 1]`
    pub fill_alpha: f64,
    /// Outline width in screen pixels
    pub stroke_width: f64,
    /// Vertex marker radius in screen pixels
    pub vertex_radius: f64,
    /// Canvas background
    pub background: LabelColor,
    /// Outline colour of the selected polygon
    pub selection_color: LabelColor,
    /// Vertex marker fill on unselected polygons
    pub vertex_color: LabelColor,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fill_alpha: constants::FILL_ALPHA,
            stroke_width: constants::STROKE_WIDTH,
            vertex_radius: constants::VERTEX_RADIUS,
            background: constants::BACKGROUND_COLOR,
            selection_color: constants::SELECTION_COLOR,
            vertex_color: constants::VERTEX_COLOR,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub viewport: ViewportSettings,
    pub hit_testing: HitTestingSettings,
    pub labels: LabelSettings,
    pub history: HistorySettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/labelkit/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("labelkit").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no user configuration directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No config at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vp = &self.viewport;
        if !(vp.min_scale > 0.0) {
            return Err(ConfigError::out_of_range("viewport.min_scale", vp.min_scale));
        }
        if !(vp.max_scale >= vp.min_scale) {
            return Err(ConfigError::out_of_range("viewport.max_scale", vp.max_scale));
        }
        if !(vp.initial_scale >= vp.min_scale && vp.initial_scale <= vp.max_scale) {
            return Err(ConfigError::out_of_range(
                "viewport.initial_scale",
                vp.initial_scale,
            ));
        }
        if !(vp.zoom_speed > 0.0) {
            return Err(ConfigError::out_of_range("viewport.zoom_speed", vp.zoom_speed));
        }

        let hit = &self.hit_testing;
        for (key, value) in [
            ("hit_testing.point_radius", hit.point_radius),
            ("hit_testing.line_distance", hit.line_distance),
            ("hit_testing.close_threshold", hit.close_threshold),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if self.labels.default_label.trim().is_empty() {
            return Err(ConfigError::out_of_range("labels.default_label", "\"\""));
        }

        if self.history.max_depth == 0 {
            return Err(ConfigError::out_of_range("history.max_depth", 0));
        }

        let render = &self.render;
        if !(0.0..=1.0).contains(&render.fill_alpha) {
            return Err(ConfigError::out_of_range("render.fill_alpha", render.fill_alpha));
        }
        if !(render.stroke_width >= 0.0) {
            return Err(ConfigError::out_of_range(
                "render.stroke_width",
                render.stroke_width,
            ));
        }
        if !(render.vertex_radius >= 0.0) {
            return Err(ConfigError::out_of_range(
                "render.vertex_radius",
                render.vertex_radius,
            ));
        }

        Ok(())
    }
}
