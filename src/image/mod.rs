//! Pixel surface adapter
//!
//! Decodes image files into a single normalized pixel layout (8-bit RGB,
//! row-major) that the viewport can blit without caring where the pixels
//! came from, and writes that layout back out when saving.

pub mod render;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ExtendedColorType, ImageReader};
use serde::Deserialize;

pub use image::ImageFormat;

/// Channels per pixel in a normalized buffer (R, G, B)
pub const CHANNELS: usize = 3;

/// Image file extensions the viewer will try to open
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "ico"];

/// Errors raised while turning bytes into an [`ImageBuffer`] or back
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("unrecognized or corrupt image data: {0}")]
    Decode(String),
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("image encode failed: {0}")]
    Encode(String),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image loaded")]
    NoImage,
}

/// Normalized RGB8 pixel data
///
/// Can only be built through [`ImageBuffer::from_raw`] or [`normalize`], so
/// the length invariant always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Wrap raw RGB8 bytes, validating dimensions against the buffer length
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(SurfaceError::BufferMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// Raw row-major RGB8 bytes
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at (x, y) packed as 0xFFRRGGBB, or None outside the image
    #[inline]
    pub fn argb_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let r = self.pixels[idx] as u32;
        let g = self.pixels[idx + 1] as u32;
        let b = self.pixels[idx + 2] as u32;
        Some(0xFF000000 | (r << 16) | (g << 8) | b)
    }
}

/// Decode `bytes` into a normalized RGB8 buffer.
///
/// The format is sniffed from the content first; `format_hint` (a file
/// extension such as `"png"`) is only consulted when sniffing fails.
/// Alpha is flattened against opaque black.
pub fn normalize(bytes: &[u8], format_hint: Option<&str>) -> Result<ImageBuffer, SurfaceError> {
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SurfaceError::Decode(e.to_string()))?;

    if reader.format().is_none() {
        match format_hint.and_then(ImageFormat::from_extension) {
            Some(format) => reader.set_format(format),
            None => {
                return Err(SurfaceError::Decode(
                    "unknown image format".to_string(),
                ))
            }
        }
    }

    let decoded = reader
        .decode()
        .map_err(|e| SurfaceError::Decode(e.to_string()))?;

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(SurfaceError::EmptyImage { width, height });
    }

    let pixels = flatten_to_rgb(decoded);
    tracing::debug!("Normalized {}x{} image to RGB8", width, height);
    ImageBuffer::from_raw(width, height, pixels)
}

/// Convert any decoded layout to RGB8, premultiplying alpha onto black
fn flatten_to_rgb(decoded: DynamicImage) -> Vec<u8> {
    if !decoded.color().has_alpha() {
        return decoded.to_rgb8().into_raw();
    }

    let rgba = decoded.to_rgba8();
    let mut out = Vec::with_capacity(rgba.width() as usize * rgba.height() as usize * CHANNELS);
    for px in rgba.pixels() {
        let a = px.0[3] as u32;
        for c in &px.0[..3] {
            out.push(((*c as u32 * a) / 255) as u8);
        }
    }
    out
}

/// Read and normalize the image at `path`, using its extension as format hint
pub fn load_image(path: &Path) -> Result<ImageBuffer, SurfaceError> {
    let bytes = std::fs::read(path).map_err(|source| SurfaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let hint = path.extension().and_then(|e| e.to_str());
    let buffer = normalize(&bytes, hint)?;
    tracing::info!(
        "Loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// How the output encoding is chosen when saving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Encode according to the destination extension, JPEG when unknown
    #[default]
    Extension,
    /// Always JPEG regardless of the destination extension
    Jpeg,
}

impl SaveFormat {
    /// Resolve the concrete encoder for a destination path
    pub fn resolve(self, path: &Path) -> ImageFormat {
        match self {
            SaveFormat::Jpeg => ImageFormat::Jpeg,
            SaveFormat::Extension => ImageFormat::from_path(path)
                .ok()
                .filter(|f| f.writing_enabled())
                .unwrap_or(ImageFormat::Jpeg),
        }
    }
}

/// Encode `buffer` to `path`. Returns the format that was written.
pub fn save_image(
    buffer: &ImageBuffer,
    path: &Path,
    policy: SaveFormat,
) -> Result<ImageFormat, SurfaceError> {
    let format = policy.resolve(path);
    image::save_buffer_with_format(
        path,
        buffer.pixels(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgb8,
        format,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(source) => SurfaceError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => SurfaceError::Encode(other.to_string()),
    })?;

    tracing::info!("Saved {} as {:?}", path.display(), format);
    Ok(format)
}

/// Check if a file path has an image extension
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
