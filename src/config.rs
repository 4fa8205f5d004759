//! Viewer configuration
//!
//! Read once at startup from `~/.config/gridlook/config.yaml`; the viewer
//! never writes it.

use std::path::Path;

use serde::Deserialize;

use crate::image::SaveFormat;

/// User preferences read from `config.yaml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewerConfig {
    /// Selected theme id ("dark", "light" or a user theme)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// How the encoder is picked when saving
    #[serde(default)]
    pub save_format: SaveFormat,

    /// Turn the grid overlay on as soon as an image is shown
    #[serde(default)]
    pub show_grid_on_load: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            save_format: SaveFormat::default(),
            show_grid_on_load: false,
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
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
}
