//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the viewer:
//! - `app` - ApplicationHandler, window management and command execution
//! - `renderer` - softbuffer surface the viewport is drawn into

pub mod app;
pub mod renderer;

pub use app::App;
