//! Canvas for drawing and editing polygon annotations.
//!
//! The canvas is the interaction state machine. It owns the polygon
//! collection, the open polygon being drawn, the selection, the viewport and
//! the gesture in progress. Every mutation goes through its methods, which
//! queue [`EditorEvent`]s for the owner to publish.

mod operations;
mod types;

pub use types::{ImageSize, InputEvent, KeyAction, Modifiers};

pub(crate) use types::DragState;

use labelkit_core::{constants, EditorEvent, PolygonId, Tool};
use labelkit_settings::{EditorConfig, LabelPreset};

use crate::model::{Point, Polygon};
use crate::selection_manager::{HitTolerance, SelectionManager};
use crate::shape_store::ShapeStore;
use crate::viewport::{fit_image, Viewport};

/// Canvas state managing polygons and drawing operations.
#[derive(Debug)]
pub struct Canvas {
    shape_store: ShapeStore,
    selection_manager: SelectionManager,
    viewport: Viewport,
    tool: Tool,
    open: Option<Polygon>,
    drag: Option<DragState>,
    config: EditorConfig,
    active_label: LabelPreset,
    image: Option<ImageSize>,
    events: Vec<EditorEvent>,
}

impl Canvas {
    /// Creates a canvas with default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Creates a canvas using the given configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        let viewport = Viewport::new(config.viewport.initial_scale, Point::default());
        let active_label = config.labels.default_preset();
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            viewport,
            tool: Tool::default(),
            open: None,
            drag: None,
            config,
            active_label,
            image: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Gets the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current zoom as a rounded percentage.
    pub fn zoom_percent(&self) -> u32 {
        self.viewport.zoom_percent()
    }

    /// The completed polygons in draw order.
    pub fn shapes(&self) -> &ShapeStore {
        &self.shape_store
    }

    /// Returns the number of completed polygons.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    pub fn get_polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.shape_store.get(id)
    }

    pub fn selected_id(&self) -> Option<PolygonId> {
        self.selection_manager.selected_id()
    }

    /// True while an open polygon exists.
    pub fn is_drawing(&self) -> bool {
        self.open.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The polygon being drawn, if any.
    pub fn open_polygon(&self) -> Option<&Polygon> {
        self.open.as_ref()
    }

    /// Vertices of the open polygon (empty when not drawing).
    pub fn current_points(&self) -> &[Point] {
        self.open.as_ref().map(|p| p.points()).unwrap_or(&[])
    }

    /// Label and colour given to the next polygon.
    pub fn active_label(&self) -> &LabelPreset {
        &self.active_label
    }

    pub fn set_active_label(&mut self, preset: LabelPreset) {
        tracing::debug!("Active label set to '{}' ({})", preset.label, preset.color);
        self.active_label = preset;
    }

    pub fn image(&self) -> Option<ImageSize> {
        self.image
    }

    /// Records the size of the image under the annotations.
    pub fn set_image(&mut self, image: Option<ImageSize>) {
        self.image = image;
        self.request_redraw();
    }

    /// World bounds of the image, or of every polygon when no image is set.
    pub fn content_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if let Some(image) = self.image {
            return Some((0.0, 0.0, image.width, image.height));
        }
        self.shape_store
            .iter()
            .filter_map(|p| p.bounds())
            .reduce(|(ax1, ay1, ax2, ay2), (bx1, by1, bx2, by2)| {
                (ax1.min(bx1), ay1.min(by1), ax2.max(bx2), ay2.max(by2))
            })
    }

    /// Fits the content into a canvas of the given pixel size.
    ///
    /// Returns false when there is nothing to fit.
    pub fn fit_to_view(&mut self, canvas_width: f64, canvas_height: f64) -> bool {
        let Some((min_x, min_y, max_x, max_y)) = self.content_bounds() else {
            return false;
        };
        let limits = &self.config.viewport;
        let Some(fitted) = Viewport::fit_to_bounds(
            Point::new(min_x, min_y),
            Point::new(max_x, max_y),
            canvas_width,
            canvas_height,
            constants::VIEW_PADDING,
            limits.min_scale,
            limits.max_scale,
        ) else {
            return false;
        };
        self.viewport = fitted;
        self.viewport_changed();
        true
    }

    /// Letterboxes the image so it fills the canvas, centred on the short axis.
    ///
    /// Returns false when no image is set or either size is empty.
    pub fn fit_image_to_view(&mut self, canvas_width: f64, canvas_height: f64) -> bool {
        let Some(image) = self.image else {
            return false;
        };
        let Some(placement) = fit_image(image.width, image.height, canvas_width, canvas_height)
        else {
            return false;
        };
        let limits = &self.config.viewport;
        let scale = (placement.width / image.width)
            .max(limits.min_scale)
            .min(limits.max_scale);
        let position = Point::new(
            placement.x + (placement.width - image.width * scale) / 2.0,
            placement.y + (placement.height - image.height * scale) / 2.0,
        );
        self.viewport = Viewport::new(scale, position);
        self.viewport_changed();
        true
    }

    /// Drains queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hit tolerances in world units at the current scale.
    pub fn hit_tolerance(&self) -> HitTolerance {
        HitTolerance::from_screen(
            self.config.hit_testing.point_radius,
            self.config.hit_testing.line_distance,
            self.viewport.scale(),
        )
    }

    /// Replaces the collection, e.g. after loading a file. Any drawing or
    /// gesture in progress is abandoned. Polygon ids are kept; new ids
    /// continue above the largest one.
    pub fn replace_polygons(&mut self, polygons: Vec<Polygon>) {
        self.drag = None;
        if let Some(open) = self.open.take() {
            open.destroy();
        }
        self.selection_manager.deselect_all(&mut self.shape_store);
        for old in self.shape_store.clear() {
            old.destroy();
        }
        for mut polygon in polygons {
            polygon.set_selected(false);
            self.shape_store.insert(polygon);
        }
        self.push_event(EditorEvent::SelectionChanged { id: None });
        self.request_redraw();
    }

    /// The id the next new polygon will receive.
    pub fn next_id(&self) -> u64 {
        self.shape_store.next_id()
    }

    pub(crate) fn take_polygon(&mut self, id: PolygonId) -> Option<(usize, Polygon)> {
        let (index, mut polygon) = self.shape_store.remove(id)?;
        if self.selection_manager.forget(id) {
            self.push_event(EditorEvent::SelectionChanged { id: None });
        }
        polygon.set_selected(false);
        self.push_event(EditorEvent::PolygonRemoved { id });
        self.request_redraw();
        Some((index, polygon))
    }

    pub(crate) fn restore_polygon(&mut self, index: usize, mut polygon: Polygon) {
        polygon.set_selected(false);
        if self.shape_store.insert_at(index, polygon) {
            self.request_redraw();
        }
    }

    pub(crate) fn replace_points(&mut self, id: PolygonId, points: Vec<Point>) {
        if let Some(polygon) = self.shape_store.get_mut(id) {
            if polygon.set_points(points) {
                self.request_redraw();
            }
        }
    }

    fn push_event(&mut self, event: EditorEvent) {
        self.events.push(event);
    }

    fn request_redraw(&mut self) {
        if self.events.last() != Some(&EditorEvent::RedrawRequested) {
            self.events.push(EditorEvent::RedrawRequested);
        }
    }

    fn viewport_changed(&mut self) {
        let position = self.viewport.position();
        self.push_event(EditorEvent::ViewportChanged {
            scale: self.viewport.scale(),
            x: position.x,
            y: position.y,
        });
        self.request_redraw();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
