//! gridlook - Elm-style image viewer
//!
//! This crate provides the core types and logic for a zoomable image viewer
//! with a grid overlay, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod image;
pub mod input;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;
pub mod viewport;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::ViewerTheme;
pub use viewport::Viewport;
