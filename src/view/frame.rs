//! Pixel surface the viewport draws into
//!
//! Wraps the softbuffer row-major `0xAARRGGBB` buffer. The image blit writes
//! opaque pixels; the grid overlay blends translucent spans on top. Every
//! write is clipped to the frame and to the optional drawing area.

use super::Rect;

/// Composite `fg` over the opaque `bg` using the high byte of `fg` as
/// coverage. The result is always opaque.
#[inline]
fn blend_over(bg: u32, fg: u32) -> u32 {
    let a = (fg >> 24) & 0xFF;
    let inv = 255 - a;
    let channel = |shift: u32| {
        let b = (bg >> shift) & 0xFF;
        let f = (fg >> shift) & 0xFF;
        ((f * a + b * inv + 127) / 255) << shift
    };
    0xFF000000 | channel(16) | channel(8) | channel(0)
}

/// Pixel bounds of the drawing area, end exclusive
#[derive(Clone, Copy, Debug)]
struct Clip {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Clip,
}

impl<'a> Frame<'a> {
    /// Wrap `buffer` as a `width` x `height` surface. A buffer shorter than
    /// that (mid-resize) loses its trailing rows instead of panicking.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
            clip: Clip {
                x0: 0,
                y0: 0,
                x1: width,
                y1: height,
            },
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Restrict drawing to `rect`, intersected with the frame
    pub fn set_clip(&mut self, rect: Rect) {
        let (x0, x1) = span(rect.x, rect.width, self.width);
        let (y0, y1) = span(rect.y, rect.height, self.height);
        self.clip = Clip { x0, y0, x1, y1 };
    }

    pub fn clear_clip(&mut self) {
        self.clip = Clip {
            x0: 0,
            y0: 0,
            x1: self.width,
            y1: self.height,
        };
    }

    #[inline]
    fn inside(&self, x: usize, y: usize) -> bool {
        x >= self.clip.x0 && x < self.clip.x1 && y >= self.clip.y0 && y < self.clip.y1
    }

    /// Opaque fill, used for the letterbox background
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (x0, x1) = span(rect.x, rect.width, self.width);
        let (y0, y1) = span(rect.y, rect.height, self.height);
        let (x0, x1) = (x0.max(self.clip.x0), x1.min(self.clip.x1));
        let (y0, y1) = (y0.max(self.clip.y0), y1.min(self.clip.y1));
        if x0 >= x1 {
            return;
        }
        for y in y0..y1 {
            let row = y * self.width;
            self.buffer[row + x0..row + x1].fill(color);
        }
    }

    /// Write one image pixel
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if self.inside(x, y) {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Blend one grid pixel. Alpha 0 is skipped, alpha 255 overwrites.
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if !self.inside(x, y) {
            return;
        }
        let idx = y * self.width + x;
        match color >> 24 {
            0 => {}
            0xFF => self.buffer[idx] = color,
            _ => self.buffer[idx] = blend_over(self.buffer[idx], color),
        }
    }

    /// Blend a horizontal dash of a grid line on row `y` (x1 exclusive)
    pub fn blend_hspan(&mut self, x0: usize, x1: usize, y: usize, color: u32) {
        if y < self.clip.y0 || y >= self.clip.y1 {
            return;
        }
        for x in x0.max(self.clip.x0)..x1.min(self.clip.x1) {
            self.blend_pixel(x, y, color);
        }
    }
}

/// Clamp the float range `start..start + len` to whole pixels in `0..limit`
fn span(start: f32, len: f32, limit: usize) -> (usize, usize) {
    let lo = (start.max(0.0) as usize).min(limit);
    let hi = ((start + len).max(0.0) as usize).min(limit);
    (lo, hi.max(lo))
}
