//! Geometry kernel.
//!
//! Pure functions over world-space points. Every function is total: degenerate
//! input produces a defined answer instead of an error.

use crate::model::Point;

/// Even-odd ray cast of `point` against the closed ring `vertices`.
///
/// The ring is implicitly closed (the last vertex connects back to the
/// first). Fewer than three vertices never contain anything.
pub fn point_in_polygon(point: &Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Distance from `point` to the closed segment `a..b`.
///
/// A zero-length segment is treated as the single point `a`.
pub fn distance_point_to_segment(point: &Point, a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return point.distance_to(a);
    }

    let t = (((point.x - a.x) * dx + (point.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let projection = Point::new(a.x + t * dx, a.y + t * dy);
    point.distance_to(&projection)
}

/// Index of the first vertex within `radius` of `point`.
pub fn nearest_vertex_index(point: &Point, vertices: &[Point], radius: f64) -> Option<usize> {
    vertices
        .iter()
        .position(|v| v.distance_to(point) <= radius)
}

/// Index of the first edge within `threshold` of `point`.
///
/// Edge `i` runs from `vertices[i]` to `vertices[i + 1]`. When `closed` is
/// set the ring edge from the last vertex back to the first is included.
pub fn nearest_edge_index(
    point: &Point,
    vertices: &[Point],
    threshold: f64,
    closed: bool,
) -> Option<usize> {
    let n = vertices.len();
    if n < 2 {
        return None;
    }
    let edge_count = if closed && n >= 3 { n } else { n - 1 };
    (0..edge_count).find(|&i| {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % n];
        distance_point_to_segment(point, a, b) < threshold
    })
}

/// Inserts `point` after the start vertex of the first edge closer than
/// `threshold`, scanning every edge of the closed ring.
///
/// Returns the new vertex list and the index of the inserted vertex.
pub fn insert_vertex_on_edge(
    vertices: &[Point],
    point: Point,
    threshold: f64,
) -> Option<(Vec<Point>, usize)> {
    let edge = nearest_edge_index(&point, vertices, threshold, true)?;
    let index = edge + 1;
    let mut result = Vec::with_capacity(vertices.len() + 1);
    result.extend_from_slice(&vertices[..index]);
    result.push(point);
    result.extend_from_slice(&vertices[index..]);
    Some((result, index))
}

/// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of a point set.
pub fn bounds_of(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    Some(points.iter().skip(1).fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}
