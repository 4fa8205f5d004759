//! Application model
//!
//! Everything the update functions mutate lives here. The runtime owns one
//! `AppModel` and never touches the viewport directly.

use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::theme::ViewerTheme;
use crate::viewport::{Viewport, ViewportSize};

/// Name shown in the window title
pub const APP_NAME: &str = "gridlook";

/// Severity of the status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Info,
    Error,
}

/// One-line status display, rendered into the window title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusLine {
    pub fn info(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.kind = StatusKind::Info;
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.kind = StatusKind::Error;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Window title for the current status
    pub fn title(&self) -> String {
        match (self.is_empty(), self.kind) {
            (true, _) => APP_NAME.to_string(),
            (false, StatusKind::Info) => format!("{} - {}", APP_NAME, self.text),
            (false, StatusKind::Error) => format!("{} - Error: {}", APP_NAME, self.text),
        }
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Image, transform and overlay state
    pub viewport: Viewport,
    /// Colors for the background and grid
    pub theme: ViewerTheme,
    /// Persisted viewer configuration
    pub config: ViewerConfig,
    /// Status line shown in the window title
    pub status: StatusLine,
    /// Path of the image currently shown
    pub current_path: Option<PathBuf>,
    /// Turn the grid on after the next successful load (`--grid`)
    pub grid_after_load: bool,
    /// Window dimensions
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a new application model with the given window size
    pub fn new(
        window_width: u32,
        window_height: u32,
        config: ViewerConfig,
        theme: ViewerTheme,
    ) -> Self {
        Self {
            viewport: Viewport::new(ViewportSize::new(window_width, window_height)),
            theme,
            config,
            status: StatusLine::default(),
            current_path: None,
            grid_after_load: false,
            window_size: (window_width, window_height),
        }
    }

    /// Window title reflecting the status line
    pub fn title(&self) -> String {
        self.status.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_title() {
        assert_eq!(StatusLine::default().title(), "gridlook");
    }

    #[test]
    fn test_status_title_kinds() {
        let mut status = StatusLine::default();
        status.info("Image size: 4x3");
        assert_eq!(status.title(), "gridlook - Image size: 4x3");
        status.error("no image to save");
        assert_eq!(status.title(), "gridlook - Error: no image to save");
    }

    #[test]
    fn test_new_model_is_empty() {
        let model = AppModel::new(640, 480, ViewerConfig::default(), ViewerTheme::default());
        assert!(!model.viewport.has_image());
        assert_eq!(model.viewport.bounds(), ViewportSize::new(640, 480));
        assert_eq!(model.title(), "gridlook");
    }
}
