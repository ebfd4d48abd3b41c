use labelkit_core::constants::MIN_POLYGON_POINTS;
use labelkit_core::{LabelColor, PolygonId};
use lyon::math::point;
use lyon::path::Path;

use super::Point;
use crate::geometry;

/// What part of a polygon a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Within the point radius of this vertex.
    Vertex(usize),
    /// Within the line distance of the edge starting at this vertex.
    Edge(usize),
    /// Inside the filled region.
    Interior,
}

/// What a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Every vertex.
    Shape,
    /// The single vertex at this index.
    Vertex(usize),
}

/// An armed drag on one polygon.
///
/// Obtained from [`Polygon::start_drag`], [`Polygon::start_point_drag`] or
/// [`Polygon::insert_point_on_line`] and consumed by [`Polygon::end_drag`],
/// so moving a polygon without starting a drag cannot be expressed.
#[derive(Debug)]
pub struct DragHandle {
    polygon: PolygonId,
    target: DragTarget,
    start_points: Vec<Point>,
    before: Vec<Point>,
}

impl DragHandle {
    pub fn polygon(&self) -> PolygonId {
        self.polygon
    }

    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// The vertex positions every `move_by` offsets from.
    pub fn start_points(&self) -> &[Point] {
        &self.start_points
    }
}

/// A labelled polygon annotation.
#[derive(Debug, Clone)]
pub struct Polygon {
    id: PolygonId,
    points: Vec<Point>,
    label: String,
    color: LabelColor,
    is_complete: bool,
    is_selected: bool,
    graphics: Path,
    revision: u64,
}

impl Polygon {
    /// Creates an open polygon with no vertices.
    pub fn new(id: PolygonId, label: impl Into<String>, color: LabelColor) -> Self {
        let mut polygon = Self {
            id,
            points: Vec::new(),
            label: label.into(),
            color,
            is_complete: false,
            is_selected: false,
            graphics: Path::new(),
            revision: 0,
        };
        polygon.redraw();
        polygon
    }

    /// Rebuilds a polygon from stored data.
    ///
    /// `is_complete` is only honoured when there are at least three points.
    pub fn from_parts(
        id: PolygonId,
        label: impl Into<String>,
        color: LabelColor,
        points: Vec<Point>,
        is_complete: bool,
    ) -> Self {
        let mut polygon = Self::new(id, label, color);
        polygon.is_complete = is_complete && points.len() >= MIN_POLYGON_POINTS;
        polygon.points = points;
        polygon.redraw();
        polygon
    }

    pub fn id(&self) -> PolygonId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> LabelColor {
        self.color
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// The cached outline path.
    pub fn path(&self) -> &Path {
        &self.graphics
    }

    /// Incremented every time the cached path is rebuilt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        geometry::bounds_of(&self.points)
    }

    /// Appends a vertex. Refused once the polygon is complete.
    pub fn add_point(&mut self, p: Point) -> bool {
        if self.is_complete {
            return false;
        }
        self.points.push(p);
        self.redraw();
        true
    }

    /// Closes the polygon. Refused with fewer than three vertices.
    pub fn complete(&mut self) -> bool {
        if self.is_complete {
            return true;
        }
        if self.points.len() < MIN_POLYGON_POINTS {
            return false;
        }
        self.is_complete = true;
        self.redraw();
        true
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
        self.redraw();
    }

    /// Replaces every vertex, e.g. when a command is undone.
    ///
    /// A complete polygon refuses a list shorter than three points.
    pub fn set_points(&mut self, points: Vec<Point>) -> bool {
        if self.is_complete && points.len() < MIN_POLYGON_POINTS {
            return false;
        }
        self.points = points;
        self.redraw();
        true
    }

    /// Arms a whole-shape drag.
    pub fn start_drag(&self) -> DragHandle {
        DragHandle {
            polygon: self.id,
            target: DragTarget::Shape,
            start_points: self.points.clone(),
            before: self.points.clone(),
        }
    }

    /// Arms a drag of the first vertex within `radius` of `p`.
    pub fn start_point_drag(&self, p: Point, radius: f64) -> Option<DragHandle> {
        let index = geometry::nearest_vertex_index(&p, &self.points, radius)?;
        Some(DragHandle {
            polygon: self.id,
            target: DragTarget::Vertex(index),
            start_points: self.points.clone(),
            before: self.points.clone(),
        })
    }

    /// Inserts `p` on the first edge closer than `threshold` and arms a drag
    /// of the new vertex.
    pub fn insert_point_on_line(&mut self, p: Point, threshold: f64) -> Option<DragHandle> {
        let (points, index) = geometry::insert_vertex_on_edge(&self.points, p, threshold)?;
        let before = std::mem::replace(&mut self.points, points);
        self.redraw();
        tracing::debug!("Inserted vertex {} into polygon {}", index, self.id);
        Some(DragHandle {
            polygon: self.id,
            target: DragTarget::Vertex(index),
            start_points: self.points.clone(),
            before,
        })
    }

    /// Offsets the dragged vertices by `(dx, dy)` from the drag snapshot.
    ///
    /// Returns false when the handle does not belong to this polygon or the
    /// vertex list changed since the drag started.
    pub fn move_by(&mut self, handle: &DragHandle, dx: f64, dy: f64) -> bool {
        if handle.polygon != self.id || handle.start_points.len() != self.points.len() {
            return false;
        }
        match handle.target {
            DragTarget::Shape => {
                for (live, start) in self.points.iter_mut().zip(&handle.start_points) {
                    *live = start.offset(dx, dy);
                }
            }
            DragTarget::Vertex(index) => match handle.start_points.get(index) {
                Some(start) => self.points[index] = start.offset(dx, dy),
                None => return false,
            },
        }
        self.redraw();
        true
    }

    /// Finishes a drag and returns the vertices as they were before the
    /// gesture began (before any vertex insertion).
    pub fn end_drag(&self, handle: DragHandle) -> Vec<Point> {
        tracing::debug!("Drag on polygon {} ended", handle.polygon);
        handle.before
    }

    /// Classifies a hit at `p`: vertices first, then edges (complete
    /// polygons only), then the interior.
    pub fn hit_test(&self, p: &Point, point_radius: f64, line_distance: f64) -> Option<HitKind> {
        if let Some(index) = geometry::nearest_vertex_index(p, &self.points, point_radius) {
            return Some(HitKind::Vertex(index));
        }
        if self.is_complete {
            if let Some(edge) = geometry::nearest_edge_index(p, &self.points, line_distance, true)
            {
                return Some(HitKind::Edge(edge));
            }
        }
        if geometry::point_in_polygon(p, &self.points) {
            return Some(HitKind::Interior);
        }
        None
    }

    pub fn contains_point(&self, p: &Point, point_radius: f64, line_distance: f64) -> bool {
        self.hit_test(p, point_radius, line_distance).is_some()
    }

    /// Releases the cached path.
    pub fn destroy(self) {
        tracing::debug!(
            "Polygon {} destroyed after {} redraws",
            self.id,
            self.revision
        );
    }

    fn redraw(&mut self) {
        let mut builder = Path::builder();
        if let Some((first, rest)) = self.points.split_first() {
            builder.begin(point(first.x as f32, first.y as f32));
            for p in rest {
                builder.line_to(point(p.x as f32, p.y as f32));
            }
            builder.end(self.is_complete);
        }
        self.graphics = builder.build();
        self.revision += 1;
    }
}
