//! Image rendering for the view layer
//!
//! Blits the viewport's image into the framebuffer with nearest-neighbor
//! sampling and draws the optional grid overlay. The grid is laid out in
//! image space and pushed through the same transform as the pixels, so it
//! follows zoom and pan without any bookkeeping of its own.

use crate::image::ImageBuffer;
use crate::theme::ViewerTheme;
use crate::view::{Frame, Rect};
use crate::viewport::{GridLines, ViewTransform, Viewport};

/// Dash pattern of the grid, in multiples of the line width
const DASH_ON: i64 = 1;
const DASH_PERIOD: i64 = 3;

/// Render the viewport into `area` of the frame.
///
/// 1. Fills the area with the theme background
/// 2. Blits the image under the current transform
/// 3. Draws the grid overlay when enabled
pub fn render_viewport(frame: &mut Frame, viewport: &Viewport, area: Rect, theme: &ViewerTheme) {
    frame.set_clip(area);
    frame.fill_rect(area, theme.background.to_argb_u32());

    if let Some(image) = viewport.image() {
        let transform = viewport.transform();
        blit_image(frame, image, transform, area);

        if viewport.show_grid() {
            let lines = GridLines::for_image(image.width(), image.height());
            draw_grid(frame, image, &lines, transform, area, theme);
        }
    }

    frame.clear_clip();
}

/// Map a device pixel index along one axis to an image pixel index
#[inline]
fn sample_index(device: usize, offset: f64, scale: f64, extent: u32) -> Option<u32> {
    let img = ((device as f64 + 0.5 + offset) / scale).floor();
    if img >= 0.0 && img < extent as f64 {
        Some(img as u32)
    } else {
        None
    }
}

/// Image-space coordinate at the center of a device pixel
#[inline]
fn image_coord(device: usize, offset: f64, scale: f64) -> f64 {
    (device as f64 + 0.5 + offset) / scale
}

#[inline]
fn dash_on(image_coord: f64, line_width: f64) -> bool {
    ((image_coord / line_width).floor() as i64).rem_euclid(DASH_PERIOD) < DASH_ON
}

fn area_extent(frame: &Frame, area: Rect) -> (usize, usize, usize, usize) {
    let ax = (area.x.max(0.0) as usize).min(frame.width());
    let ay = (area.y.max(0.0) as usize).min(frame.height());
    let aw = (area.width.max(0.0) as usize).min(frame.width() - ax);
    let ah = (area.height.max(0.0) as usize).min(frame.height() - ay);
    (ax, ay, aw, ah)
}

fn blit_image(frame: &mut Frame, image: &ImageBuffer, t: ViewTransform, area: Rect) {
    let (ax, ay, aw, ah) = area_extent(frame, area);

    // Column lookups are identical for every row
    let columns: Vec<Option<u32>> = (0..aw)
        .map(|sx| sample_index(sx, t.offset_x, t.scale, image.width()))
        .collect();

    for sy in 0..ah {
        let Some(iy) = sample_index(sy, t.offset_y, t.scale, image.height()) else {
            continue;
        };
        for (sx, ix) in columns.iter().enumerate() {
            if let Some(ix) = *ix {
                if let Some(argb) = image.argb_at(ix, iy) {
                    frame.set_pixel(ax + sx, ay + sy, argb);
                }
            }
        }
    }
}

/// Device span `[start, end)` covered by a line centered at `center`
fn line_span(center: f64, thickness: usize, limit: usize) -> (usize, usize) {
    let start = (center - thickness as f64 / 2.0).round();
    let end = start + thickness as f64;
    let start = start.clamp(0.0, limit as f64) as usize;
    let end = end.clamp(0.0, limit as f64) as usize;
    (start, end)
}

fn draw_grid(
    frame: &mut Frame,
    image: &ImageBuffer,
    lines: &GridLines,
    t: ViewTransform,
    area: Rect,
    theme: &ViewerTheme,
) {
    let (ax, ay, aw, ah) = area_extent(frame, area);
    let color = theme.grid.to_argb_u32();
    let line_width = theme.grid_line_width;
    let thickness = ((line_width * t.scale).round() as usize).max(1);

    // Rows/columns inside the image along with whether the dash is on there
    let rows: Vec<(usize, bool)> = (0..ah)
        .filter(|&sy| sample_index(sy, t.offset_y, t.scale, image.height()).is_some())
        .map(|sy| (sy, dash_on(image_coord(sy, t.offset_y, t.scale), line_width)))
        .collect();
    let cols: Vec<(usize, bool)> = (0..aw)
        .filter(|&sx| sample_index(sx, t.offset_x, t.scale, image.width()).is_some())
        .map(|sx| (sx, dash_on(image_coord(sx, t.offset_x, t.scale), line_width)))
        .collect();

    for &x in &lines.vertical {
        let (x0, x1) = line_span(x * t.scale - t.offset_x, thickness, aw);
        if x0 >= x1 {
            continue;
        }
        for &(sy, on) in &rows {
            if on {
                frame.blend_hspan(ax + x0, ax + x1, ay + sy, color);
            }
        }
    }

    for &y in &lines.horizontal {
        let (y0, y1) = line_span(y * t.scale - t.offset_y, thickness, ah);
        for sy in y0..y1 {
            for &(sx, on) in &cols {
                if on {
                    frame.blend_pixel(ax + sx, ay + sy, color);
                }
            }
        }
    }
}
