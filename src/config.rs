//! Application configuration
//!
//! Read from `~/.config/partition/config.yaml`. Every section and field is
//! optional; anything missing takes its default. A file that cannot be read or
//! parsed is reported and ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::drag::DragSettings;
use crate::theme::Theme;

/// Saturation and lightness of generated pane colors (0.0-1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation: 0.70,
            lightness: 0.55,
        }
    }
}

/// Sizes in logical pixels, scaled by the window's scale factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Gap between the window edge and the canvas
    pub padding: f32,
    pub divider_width: f32,
    /// Divider thickness under the pointer; also the divider's hit area
    pub divider_hover_width: f32,
    pub button_size: f32,
    pub button_gap: f32,
    /// Distance of the control buttons from the pane's top-right corner
    pub button_inset: f32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            padding: 16.0,
            divider_width: 4.0,
            divider_hover_width: 8.0,
            button_size: 20.0,
            button_gap: 4.0,
            button_inset: 8.0,
        }
    }
}

/// Everything `config.yaml` can set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    pub drag: DragSettings,
    pub palette: PaletteConfig,
    pub theme: Theme,
    pub metrics: MetricsConfig,
}

impl PartitionConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML and repair out-of-range values
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(config.normalized())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf, String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn normalized(mut self) -> Self {
        if let Err(e) = self.drag.validate() {
            tracing::warn!("Invalid drag settings ({}), using defaults", e);
            self.drag = DragSettings::default();
        }

        let unit = |name: &str, value: f32, fallback: f32| {
            if (0.0..=1.0).contains(&value) {
                value
            } else {
                tracing::warn!(
                    "palette.{} = {} is outside 0..1, using {}",
                    name,
                    value,
                    fallback
                );
                fallback
            }
        };
        let defaults = PaletteConfig::default();
        self.palette.saturation = unit("saturation", self.palette.saturation, defaults.saturation);
        self.palette.lightness = unit("lightness", self.palette.lightness, defaults.lightness);

        let m = &mut self.metrics;
        for value in [
            &mut m.padding,
            &mut m.divider_width,
            &mut m.divider_hover_width,
            &mut m.button_size,
            &mut m.button_gap,
            &mut m.button_inset,
        ] {
            if !value.is_finite() || *value < 0.0 {
                tracing::warn!("Ignoring negative or non-finite metric {}", value);
                *value = 0.0;
            }
        }
        m.divider_hover_width = m.divider_hover_width.max(m.divider_width);

        self
    }
}
