//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::viewport::PointerButton;

/// Input forwarded to the viewport controller
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerMsg {
    /// Wheel notch at a cursor position (positive = forward = zoom in)
    Wheel { delta: f64, x: f64, y: f64 },
    /// Pointer button pressed at a position
    PointerDown { button: PointerButton, x: f64, y: f64 },
    /// Pointer moved to a position
    PointerMove { x: f64, y: f64 },
    /// Pointer button released
    PointerUp { button: PointerButton },
    /// Flip the grid overlay (G)
    ToggleGrid,
    /// Discard zoom and pan (F)
    FitToWindow,
}

/// Application-level messages (window, file I/O)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Decode and show the image at a path
    OpenImage(PathBuf),
    /// Encode the shown image to a path
    SaveImage(PathBuf),
    /// Quit the application
    Quit,

    // === File Dialog Messages ===
    /// User requested "Open Image..." dialog
    OpenFileDialog,
    /// Open dialog returned a path (or None if cancelled)
    OpenFileDialogResult { path: Option<PathBuf> },

    /// User requested "Save Image As..." dialog
    SaveFileDialog,
    /// Save dialog returned a path (or None if cancelled)
    SaveFileDialogResult { path: Option<PathBuf> },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Viewport messages (zoom, pan, grid)
    Viewer(ViewerMsg),
    /// App messages (file I/O, window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    /// Create a wheel message
    pub fn wheel(delta: f64, x: f64, y: f64) -> Self {
        Msg::Viewer(ViewerMsg::Wheel { delta, x, y })
    }

    /// Create an open-image message
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Msg::App(AppMsg::OpenImage(path.into()))
    }
}
