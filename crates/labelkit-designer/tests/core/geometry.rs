use labelkit_designer::geometry::{
    distance_point_to_segment, insert_vertex_on_edge, nearest_vertex_index, point_in_polygon,
};
use labelkit_designer::Point;
use proptest::prelude::*;
use std::f64::consts::PI;

/// Winding-number containment; agrees with even-odd on simple polygons.
fn reference_contains(p: &Point, vertices: &[Point]) -> bool {
    let is_left = |a: &Point, b: &Point| (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    let mut winding = 0i32;
    for i in 0..vertices.len() {
        let a = &vertices[i];
        let b = &vertices[(i + 1) % vertices.len()];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && is_left(a, b) < 0.0 {
            winding -= 1;
        }
    }
    winding != 0
}

/// Star-shaped (so simple) polygons around (50, 50), convex or not.
fn simple_polygon() -> impl Strategy<Value = Vec<Point>> {
    (3usize..12).prop_flat_map(|n| {
        prop::collection::vec((0.0f64..0.8, 5.0f64..45.0), n).prop_map(move |samples| {
            let step = 2.0 * PI / n as f64;
            samples
                .iter()
                .enumerate()
                .map(|(i, (jitter, radius))| {
                    let angle = step * (i as f64 + jitter);
                    Point::new(50.0 + radius * angle.cos(), 50.0 + radius * angle.sin())
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn point_in_polygon_matches_reference(vertices in simple_polygon()) {
        for gx in 0..40 {
            for gy in 0..40 {
                let p = Point::new(gx as f64 * 2.5 + 0.123, gy as f64 * 2.5 + 0.0789);
                prop_assert_eq!(
                    point_in_polygon(&p, &vertices),
                    reference_contains(&p, &vertices),
                    "disagreement at ({}, {})", p.x, p.y
                );
            }
        }
    }

    #[test]
    fn distance_is_zero_on_segment(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
        t in 0.0f64..=1.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let p = Point::new(ax + t * (bx - ax), ay + t * (by - ay));
        prop_assert!(distance_point_to_segment(&p, &a, &b) < 1e-9);
    }

    #[test]
    fn distance_grows_moving_away(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        len in 1.0f64..100.0, angle in 0.0f64..(2.0 * PI),
        t in 0.0f64..=1.0,
    ) {
        let a = Point::new(ax, ay);
        let (dx, dy) = (angle.cos(), angle.sin());
        let b = Point::new(ax + dx * len, ay + dy * len);
        let foot = Point::new(ax + dx * len * t, ay + dy * len * t);
        let mut previous = 0.0;
        for k in 1..20 {
            let offset = k as f64 * 0.5;
            let p = Point::new(foot.x - dy * offset, foot.y + dx * offset);
            let d = distance_point_to_segment(&p, &a, &b);
            prop_assert!(d + 1e-9 >= previous);
            prop_assert!(d > 0.0);
            previous = d;
        }
    }
}

#[test]
fn test_degenerate_segment_distance_is_to_endpoint() {
    let a = Point::new(3.0, 4.0);
    assert_eq!(distance_point_to_segment(&Point::new(0.0, 0.0), &a, &a), 5.0);
}

#[test]
fn test_wrap_around_edge_counts() {
    // Only the closing edge separates these two points horizontally.
    let tri = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(0.0, 10.0),
    ];
    assert!(point_in_polygon(&Point::new(1.0, 5.0), &tri));
    assert!(!point_in_polygon(&Point::new(-1.0, 5.0), &tri));
}

#[test]
fn test_nearest_vertex_is_stable() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
    assert_eq!(nearest_vertex_index(&Point::new(0.1, 0.0), &pts, 1.0), Some(0));
}

#[test]
fn test_insert_uses_first_qualifying_edge() {
    // Two coincident edges: the earlier one wins.
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
    ];
    let (out, index) = insert_vertex_on_edge(&pts, Point::new(5.0, 0.1), 1.0).unwrap();
    assert_eq!(index, 1);
    assert_eq!(out[1], Point::new(5.0, 0.1));
}
