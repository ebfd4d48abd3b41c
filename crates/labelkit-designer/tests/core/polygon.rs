use labelkit_core::{LabelColor, PolygonId};
use labelkit_designer::{DragTarget, HitKind, Point, Polygon};
use proptest::prelude::*;

fn polygon_from(points: Vec<Point>) -> Polygon {
    Polygon::from_parts(
        PolygonId(1),
        "object",
        LabelColor::from_rgb(255, 0, 0),
        points,
        true,
    )
}

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 3..10)
        .prop_map(|pts| pts.into_iter().map(Point::from).collect())
}

fn deltas_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..8)
}

proptest! {
    #[test]
    fn shape_drag_ends_where_final_delta_says(
        points in points_strategy(),
        intermediate in deltas_strategy(),
        dx in -100.0f64..100.0,
        dy in -100.0f64..100.0,
    ) {
        let mut stepped = polygon_from(points.clone());
        let handle = stepped.start_drag();
        for (ix, iy) in &intermediate {
            stepped.move_by(&handle, *ix, *iy);
        }
        stepped.move_by(&handle, dx, dy);
        stepped.end_drag(handle);

        let mut direct = polygon_from(points);
        let handle = direct.start_drag();
        direct.move_by(&handle, dx, dy);
        direct.end_drag(handle);

        prop_assert_eq!(stepped.points(), direct.points());
    }

    #[test]
    fn point_drag_ends_where_final_delta_says(
        points in points_strategy(),
        intermediate in deltas_strategy(),
        dx in -100.0f64..100.0,
        dy in -100.0f64..100.0,
    ) {
        let target = points[0];
        let mut stepped = polygon_from(points.clone());
        let handle = stepped.start_point_drag(target, 0.001).unwrap();
        for (ix, iy) in &intermediate {
            stepped.move_by(&handle, *ix, *iy);
        }
        stepped.move_by(&handle, dx, dy);

        let mut expected = points;
        let index = match handle.target() {
            DragTarget::Vertex(index) => index,
            DragTarget::Shape => unreachable!(),
        };
        expected[index] = Point::new(expected[index].x + dx, expected[index].y + dy);
        prop_assert_eq!(stepped.points(), expected.as_slice());
    }
}

#[test]
fn test_drag_snapshot_is_not_live_points() {
    let mut poly = polygon_from(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]);
    let handle = poly.start_drag();
    poly.move_by(&handle, 5.0, 0.0);
    poly.move_by(&handle, 5.0, 0.0);
    assert_eq!(poly.points()[0], Point::new(5.0, 0.0));
    assert_eq!(handle.start_points()[0], Point::new(0.0, 0.0));
}

#[test]
fn test_insert_then_drag_same_gesture() {
    let mut poly = polygon_from(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    let handle = poly.insert_point_on_line(Point::new(10.0, 5.0), 1.0).unwrap();
    poly.move_by(&handle, 4.0, 0.0);
    assert_eq!(poly.points()[2], Point::new(14.0, 5.0));
    let before = poly.end_drag(handle);
    assert_eq!(before.len(), 4);
    assert_eq!(poly.points().len(), 5);
}

#[test]
fn test_stale_handle_after_vertex_change_is_refused() {
    let mut poly = polygon_from(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ]);
    let handle = poly.start_drag();
    poly.set_points(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    assert!(!poly.move_by(&handle, 1.0, 1.0));
}

#[test]
fn test_vertex_hit_beats_interior() {
    let poly = polygon_from(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]);
    assert_eq!(
        poly.hit_test(&Point::new(9.5, 9.5), 1.0, 0.25),
        Some(HitKind::Vertex(2))
    );
}

#[test]
fn test_path_closes_only_when_complete() {
    use lyon::path::Event;

    let mut poly = Polygon::new(PolygonId(5), "a", LabelColor::from_rgb(0, 0, 0));
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)] {
        poly.add_point(Point::new(x, y));
    }
    let closed = |p: &Polygon| {
        p.path()
            .iter()
            .any(|e| matches!(e, Event::End { close: true, .. }))
    };
    assert!(!closed(&poly));
    poly.complete();
    assert!(closed(&poly));
}
