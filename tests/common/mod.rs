//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gridlook::config::ViewerConfig;
use gridlook::image::{save_image, ImageBuffer, SaveFormat};
use gridlook::model::AppModel;
use gridlook::theme::ViewerTheme;
use gridlook::viewport::{Viewport, ViewportSize};

/// Create an empty model with the default 800x600 window
pub fn test_model() -> AppModel {
    AppModel::new(800, 600, ViewerConfig::default(), ViewerTheme::default())
}

/// Solid gray RGB image
pub fn solid(width: u32, height: u32) -> ImageBuffer {
    ImageBuffer::from_raw(width, height, vec![128; (width * height * 3) as usize]).unwrap()
}

/// RGB image where every pixel encodes its own coordinates
pub fn coordinate_image(width: u32, height: u32) -> ImageBuffer {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, 200]);
        }
    }
    ImageBuffer::from_raw(width, height, pixels).unwrap()
}

/// Viewport of the given size holding a solid image
pub fn loaded_viewport(vw: u32, vh: u32, iw: u32, ih: u32) -> Viewport {
    let mut vp = Viewport::new(ViewportSize::new(vw, vh));
    vp.load_image(solid(iw, ih));
    vp
}

/// Write `buffer` as a PNG named `name` under `dir`
pub fn write_png(dir: &Path, name: &str, buffer: &ImageBuffer) -> PathBuf {
    let path = dir.join(name);
    save_image(buffer, &path, SaveFormat::Extension).unwrap();
    path
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
