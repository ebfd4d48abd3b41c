//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between screen coordinates (pointer pixels) and world
//! coordinates (annotation space). Zoom and pan return a new viewport rather
//! than mutating in place so callers can compare before and after.

use labelkit_core::constants;

use crate::model::Point;

/// The viewport transformation state (scale and pan position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f64,
    position: Point,
}

impl Viewport {
    /// Creates a viewport. A non-positive or non-finite scale falls back to
    /// the initial scale so conversions never divide by zero.
    pub fn new(scale: f64, position: Point) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            constants::INITIAL_SCALE
        };
        Self { scale, position }
    }

    /// Gets the current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen offset of the world origin.
    pub fn position(&self) -> Point {
        self.position
    }

    /// The scale as a rounded percentage, for toolbar display.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Converts screen coordinates to world coordinates.
    ///
    /// ```text
    /// world = (screen - position) / scale
    /// ```
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.position.x) / self.scale,
            (screen.y - self.position.y) / self.scale,
        )
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// ```text
    /// screen = world * scale + position
    /// ```
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.position.x,
            world.y * self.scale + self.position.y,
        )
    }

    /// Converts a screen-pixel distance to world units at the current scale.
    pub fn screen_distance_to_world(&self, distance: f64) -> f64 {
        distance / self.scale
    }

    /// Zooms around `screen` so the world point under it stays put.
    ///
    /// ```text
    /// new_scale = clamp(scale * (1 - wheel_delta * speed), min, max)
    /// position' = screen - (screen - position) * (new_scale / scale)
    /// ```
    ///
    /// Negative wheel deltas zoom in.
    pub fn zoom_at(
        &self,
        screen: Point,
        wheel_delta: f64,
        speed: f64,
        min_scale: f64,
        max_scale: f64,
    ) -> Viewport {
        if !valid_scale_range(min_scale, max_scale) {
            return *self;
        }
        let factor = 1.0 - wheel_delta * speed;
        let new_scale = (self.scale * factor).clamp(min_scale, max_scale);
        if !new_scale.is_finite() || new_scale <= 0.0 {
            return *self;
        }

        let ratio = new_scale / self.scale;
        Viewport {
            scale: new_scale,
            position: Point::new(
                screen.x - (screen.x - self.position.x) * ratio,
                screen.y - (screen.y - self.position.y) * ratio,
            ),
        }
    }

    /// Translates the position by raw screen pixels.
    pub fn pan(&self, dx: f64, dy: f64) -> Viewport {
        Viewport {
            scale: self.scale,
            position: self.position.offset(dx, dy),
        }
    }

    /// Returns this viewport with its position replaced.
    pub fn with_position(&self, position: Point) -> Viewport {
        Viewport {
            scale: self.scale,
            position,
        }
    }

    /// Fits the world rectangle `min..max` into a canvas with padding.
    ///
    /// # Arguments
    /// * `min`, `max` - Corners of the rectangle (world coordinates)
    /// * `canvas_width`, `canvas_height` - Canvas size in pixels
    /// * `padding` - Fraction of the canvas reserved on each edge (0.0 - 0.5)
    ///
    /// The rectangle is centred and the scale clamped to the given bounds.
    /// Returns `None` for an empty rectangle or canvas.
    #[allow(clippy::too_many_arguments)]
    pub fn fit_to_bounds(
        min: Point,
        max: Point,
        canvas_width: f64,
        canvas_height: f64,
        padding: f64,
        min_scale: f64,
        max_scale: f64,
    ) -> Option<Viewport> {
        let width = max.x - min.x;
        let height = max.y - min.y;
        if !(width > 0.0 && height > 0.0 && canvas_width > 0.0 && canvas_height > 0.0) {
            return None;
        }
        if !valid_scale_range(min_scale, max_scale) {
            return None;
        }

        let padding_factor = (1.0 - padding * 2.0).max(0.0);
        let scale_x = canvas_width * padding_factor / width;
        let scale_y = canvas_height * padding_factor / height;
        let scale = scale_x.min(scale_y).clamp(min_scale, max_scale);
        if !(scale > 0.0) {
            return None;
        }

        let position = Point::new(
            (canvas_width - width * scale) / 2.0 - min.x * scale,
            (canvas_height - height * scale) / 2.0 - min.y * scale,
        );
        Some(Viewport { scale, position })
    }
}

fn valid_scale_range(min_scale: f64, max_scale: f64) -> bool {
    min_scale > 0.0 && max_scale >= min_scale
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(constants::INITIAL_SCALE, Point::default())
    }
}

/// Where an image is drawn inside the canvas, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Letterboxes an image into the canvas, preserving its aspect ratio.
///
/// Images wider (relative to height) than the canvas fill its width and are
/// centred vertically; the rest fill its height and are centred horizontally.
pub fn fit_image(
    image_width: f64,
    image_height: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> Option<ImagePlacement> {
    if !(image_width > 0.0 && image_height > 0.0 && canvas_width > 0.0 && canvas_height > 0.0) {
        return None;
    }

    let image_ratio = image_width / image_height;
    let canvas_ratio = canvas_width / canvas_height;

    if image_ratio > canvas_ratio {
        let height = canvas_width / image_ratio;
        Some(ImagePlacement {
            x: 0.0,
            y: (canvas_height - height) / 2.0,
            width: canvas_width,
            height,
        })
    } else {
        let width = canvas_height * image_ratio;
        Some(ImagePlacement {
            x: (canvas_width - width) / 2.0,
            y: 0.0,
            width,
            height: canvas_height,
        })
    }
}
