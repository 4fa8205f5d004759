//! Viewport controller
//!
//! Owns the displayed image and the transform that maps it into the window.
//! Zoom is tracked as a count of discrete steps above the fit-to-window
//! baseline; step 0 always means "exactly fit", and returning to it snaps
//! back to a freshly computed fit instead of undoing multiplications.
//!
//! Coordinates:
//! - image space: pixels of the source image, origin top-left
//! - viewport space: device pixels of the drawing area, origin top-left
//!
//! `viewport = image * scale - offset`, so `offset` is how far the view has
//! been scrolled.

use std::fmt;
use std::path::Path;

use crate::image::render::render_viewport;
use crate::image::{save_image, ImageBuffer, ImageFormat, SaveFormat, SurfaceError};
use crate::theme::ViewerTheme;
use crate::view::{Frame, Rect};

/// Scale multiplier for one forward wheel step
pub const ZOOM_IN_FACTOR: f64 = 1.25;
/// Scale multiplier for one backward wheel step
pub const ZOOM_OUT_FACTOR: f64 = 0.8;
/// Forward steps above fit before further zoom-in is ignored
pub const MAX_ZOOM_STEPS: u32 = 100;
/// Number of cells per axis in the grid overlay
pub const GRID_DIVISIONS: u32 = 10;

/// A point in viewport or image space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing area in device pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Scale plus pan offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewTransform {
    #[inline]
    pub fn image_to_viewport(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale - self.offset_x,
            p.y * self.scale - self.offset_y,
        )
    }

    #[inline]
    pub fn viewport_to_image(&self, p: Point) -> Point {
        Point::new(
            (p.x + self.offset_x) / self.scale,
            (p.y + self.offset_y) / self.scale,
        )
    }

    /// Multiply the scale by `factor` keeping `anchor` (viewport space) fixed
    fn zoom_about(&mut self, factor: f64, anchor: Point) {
        let fixed = self.viewport_to_image(anchor);
        self.scale *= factor;
        self.offset_x = fixed.x * self.scale - anchor.x;
        self.offset_y = fixed.y * self.scale - anchor.y;
    }
}

/// Pointer buttons the controller distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    Other,
}

/// Transient pointer bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last pointer position of an active middle-button pan
    pub pan_anchor: Option<Point>,
    /// Left button currently held
    pub left_down: bool,
    /// Where the left button was last pressed. Kept for drag-out, which
    /// has no behavior yet.
    pub press_position: Option<Point>,
}

/// Notifications for the status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    ImageLoaded { width: u32, height: u32 },
}

impl fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerEvent::ImageLoaded { width, height } => {
                write!(f, "Image size: {}x{}", width, height)
            }
        }
    }
}

/// Grid line positions in image space
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    /// x coordinates of vertical lines
    pub vertical: Vec<f64>,
    /// y coordinates of horizontal lines
    pub horizontal: Vec<f64>,
}

impl GridLines {
    /// Interior lines splitting `width` x `height` into `GRID_DIVISIONS` cells
    /// per axis. Axes are divided independently, so cells need not be square.
    pub fn for_image(width: u32, height: u32) -> Self {
        let step_x = width as f64 / GRID_DIVISIONS as f64;
        let step_y = height as f64 / GRID_DIVISIONS as f64;
        Self {
            vertical: (1..GRID_DIVISIONS).map(|k| k as f64 * step_x).collect(),
            horizontal: (1..GRID_DIVISIONS).map(|k| k as f64 * step_y).collect(),
        }
    }
}

/// The viewport controller. Empty until the first `load_image`.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    image: Option<ImageBuffer>,
    bounds: ViewportSize,
    transform: ViewTransform,
    zoom_steps: u32,
    show_grid: bool,
    pointer: PointerState,
    events: Vec<ViewerEvent>,
}

impl Viewport {
    pub fn new(bounds: ViewportSize) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    // === Queries ===

    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&ImageBuffer> {
        self.image.as_ref()
    }

    pub fn bounds(&self) -> ViewportSize {
        self.bounds
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn zoom_steps(&self) -> u32 {
        self.zoom_steps
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn is_panning(&self) -> bool {
        self.pointer.pan_anchor.is_some()
    }

    /// Grid lines for the current image, None when Empty
    pub fn grid_lines(&self) -> Option<GridLines> {
        self.image
            .as_ref()
            .map(|img| GridLines::for_image(img.width(), img.height()))
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Show `buffer`, discarding the previous image and its zoom/pan
    pub fn load_image(&mut self, buffer: ImageBuffer) {
        let (width, height) = (buffer.width(), buffer.height());
        self.image = Some(buffer);
        self.pointer = PointerState::default();
        self.transform = ViewTransform::default();
        self.zoom_steps = 0;
        self.fit_to_window();
        self.events.push(ViewerEvent::ImageLoaded { width, height });
        tracing::debug!(
            width,
            height,
            scale = self.transform.scale,
            "viewport loaded image"
        );
    }

    /// Scale the image to fit the viewport, anchored top-left, and reset
    /// the zoom step counter. Returns false when nothing could be fitted.
    pub fn fit_to_window(&mut self) -> bool {
        let Some(image) = &self.image else {
            return false;
        };
        if image.width() == 0 || image.height() == 0 || self.bounds.is_empty() {
            return false;
        }

        let scale_x = self.bounds.width as f64 / image.width() as f64;
        let scale_y = self.bounds.height as f64 / image.height() as f64;
        self.transform = ViewTransform {
            scale: scale_x.min(scale_y),
            offset_x: 0.0,
            offset_y: 0.0,
        };
        self.zoom_steps = 0;
        true
    }

    /// Handle a wheel notch. Positive `delta` zooms in around `cursor`,
    /// negative zooms out; zooming out never goes below the fit baseline and
    /// zooming in stops at `MAX_ZOOM_STEPS`. Ignored while the viewport has
    /// no area. Returns true when the transform changed.
    pub fn on_wheel(&mut self, delta: f64, cursor: Point) -> bool {
        if !self.has_image() || self.bounds.is_empty() || delta == 0.0 || delta.is_nan() {
            return false;
        }

        if delta > 0.0 {
            if self.zoom_steps >= MAX_ZOOM_STEPS {
                return false;
            }
            self.transform.zoom_about(ZOOM_IN_FACTOR, cursor);
            self.zoom_steps += 1;
        } else {
            match self.zoom_steps {
                0 => return false,
                1 => {
                    self.zoom_steps = 0;
                    self.fit_to_window();
                }
                _ => {
                    self.transform.zoom_about(ZOOM_OUT_FACTOR, cursor);
                    self.zoom_steps -= 1;
                }
            }
        }

        tracing::debug!(
            steps = self.zoom_steps,
            scale = self.transform.scale,
            "zoom"
        );
        true
    }

    /// Middle button starts panning; left button only records where it was
    /// pressed.
    pub fn on_pointer_down(&mut self, button: PointerButton, position: Point) {
        if !self.has_image() {
            return;
        }
        match button {
            PointerButton::Middle => self.pointer.pan_anchor = Some(position),
            PointerButton::Left => {
                self.pointer.left_down = true;
                self.pointer.press_position = Some(position);
            }
            PointerButton::Right | PointerButton::Other => {}
        }
    }

    /// Scroll the view by the pointer movement since the last event while
    /// panning. Returns true when the view moved.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        let Some(anchor) = self.pointer.pan_anchor else {
            return false;
        };
        self.transform.offset_x += anchor.x - position.x;
        self.transform.offset_y += anchor.y - position.y;
        self.pointer.pan_anchor = Some(position);
        anchor != position
    }

    /// Any release ends panning and clears the left-button flag
    pub fn on_pointer_up(&mut self, _button: PointerButton) {
        self.pointer.pan_anchor = None;
        self.pointer.left_down = false;
    }

    /// Record the new drawing-area size and re-fit, dropping manual zoom/pan
    pub fn on_resize(&mut self, bounds: ViewportSize) {
        self.bounds = bounds;
        self.fit_to_window();
    }

    /// Flip the grid overlay. Returns the new state; no-op while Empty.
    pub fn toggle_grid(&mut self) -> bool {
        if self.has_image() {
            self.show_grid = !self.show_grid;
        }
        self.show_grid
    }

    /// Draw the image and overlay into `area` of `frame`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &ViewerTheme) {
        render_viewport(frame, self, area, theme);
    }

    /// Write the displayed image to `path`
    pub fn save_current_image(
        &self,
        path: &Path,
        policy: SaveFormat,
    ) -> Result<ImageFormat, SurfaceError> {
        let image = self.image.as_ref().ok_or(SurfaceError::NoImage)?;
        save_image(image, path, policy)
    }
}
