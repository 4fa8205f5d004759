//! Theme system for the viewer
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/gridlook/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::config_paths;

// Embed theme YAML files at compile time
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark", "light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<ViewerTheme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    ViewerTheme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<ViewerTheme, String> {
    if let Some(user_dir) = config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    ViewerTheme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub viewer: ViewerThemeData,
}

/// Viewer colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerThemeData {
    pub background: String,
    pub grid: String,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
}

fn default_grid_line_width() -> f64 {
    3.0
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerTheme {
    pub name: String,
    /// Canvas color behind and around the image
    pub background: Color,
    /// Grid overlay color; alpha controls blending over the image
    pub grid: Color,
    /// Grid line width in image pixels
    pub grid_line_width: f64,
}

impl ViewerTheme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        ViewerTheme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let width = data.viewer.grid_line_width;
        if width.is_nan() || width <= 0.0 {
            return Err(format!(
                "grid_line_width must be positive, got {}",
                width
            ));
        }
        Ok(ViewerTheme {
            name: data.name,
            background: Color::from_hex(&data.viewer.background)?,
            grid: Color::from_hex(&data.viewer.grid)?,
            grid_line_width: width,
        })
    }

    pub fn dark() -> Self {
        ViewerTheme {
            name: "Dark".to_string(),
            background: Color::rgb(30, 30, 30),
            grid: Color::rgba(20, 140, 210, 150),
            grid_line_width: 3.0,
        }
    }
}

impl Default for ViewerTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#148CD2").unwrap(), Color::rgb(20, 140, 210));
        assert_eq!(
            Color::from_hex("8AC64096").unwrap(),
            Color::rgba(138, 198, 64, 150)
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_color_to_argb() {
        assert_eq!(Color::rgba(1, 2, 3, 4).to_argb_u32(), 0x04010203);
    }

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = ViewerTheme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("{} failed: {}", builtin.id, e));
            assert!(theme.grid.a < 255, "{} grid should blend", builtin.id);
        }
    }

    #[test]
    fn test_builtin_dark_matches_default() {
        assert_eq!(ViewerTheme::from_builtin("dark").unwrap(), ViewerTheme::default());
    }

    #[test]
    fn test_light_theme_grid_is_green() {
        let theme = ViewerTheme::from_builtin("light").unwrap();
        assert_eq!(theme.grid, Color::rgba(138, 198, 64, 150));
        assert_eq!(theme.background, Color::rgb(30, 30, 30));
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(ViewerTheme::from_builtin("solarized").is_err());
    }

    #[test]
    fn test_rejects_non_positive_line_width() {
        let yaml = "version: 1\nname: Bad\nviewer:\n  background: \"#000000\"\n  grid: \"#FFFFFF80\"\n  grid_line_width: 0.0\n";
        assert!(ViewerTheme::from_yaml(yaml).is_err());
    }
}
