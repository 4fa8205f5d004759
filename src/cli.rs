//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Opening an image at start-up
//! - Turning the grid overlay on from the command line
//! - Overriding the configured theme

use clap::Parser;
use std::path::PathBuf;

use crate::image::is_image_file;

/// A zoomable image viewer with a grid overlay
#[derive(Parser, Debug)]
#[command(
    name = "gridlook",
    version,
    about = "A zoomable image viewer with a grid overlay"
)]
pub struct CliArgs {
    /// Image to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show the grid overlay once the image is loaded
    #[arg(short = 'g', long)]
    pub grid: bool,

    /// Theme to use instead of the configured one (dark, light or a user theme)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupConfig {
    /// Image to decode before the first frame
    pub image: Option<PathBuf>,
    /// Turn the grid on after the first load
    pub show_grid: bool,
    /// Theme id overriding `ViewerConfig::theme`
    pub theme: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.path {
            if path.is_dir() {
                return Err(format!("{} is a directory", path.display()));
            }
            if !is_image_file(path) {
                return Err(format!("{} is not a supported image file", path.display()));
            }
        }

        Ok(StartupConfig {
            image: self.path,
            show_grid: self.grid,
            theme: self.theme,
        })
    }
}
