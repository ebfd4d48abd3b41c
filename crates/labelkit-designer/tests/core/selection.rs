use labelkit_core::{EditorEvent, EventBusConfig, PolygonId, Tool};
use labelkit_designer::{DesignerState, InputEvent};
use labelkit_settings::EditorConfig;

fn click(state: &mut DesignerState, x: f64, y: f64) {
    state.handle_input(&InputEvent::PointerDown { x, y, alt: false });
}

fn draw_rect(state: &mut DesignerState, x: f64, y: f64, w: f64, h: f64) -> PolygonId {
    state.set_tool(Tool::Polygon);
    click(state, x, y);
    click(state, x + w, y);
    click(state, x + w, y + h);
    click(state, x, y + h);
    click(state, x, y);
    state.canvas().shapes().draw_order_iter().last().unwrap()
}

/// A is drawn first, B later and overlapping it.
fn overlapping() -> (DesignerState, PolygonId, PolygonId) {
    let mut state = DesignerState::new();
    let a = draw_rect(&mut state, 0.0, 0.0, 100.0, 100.0);
    let b = draw_rect(&mut state, 50.0, 50.0, 100.0, 100.0);
    state.set_tool(Tool::Edit);
    (state, a, b)
}

#[test]
fn test_last_drawn_wins_in_overlap() {
    let (mut state, _a, b) = overlapping();
    click(&mut state, 75.0, 75.0);
    assert_eq!(state.canvas().selected_id(), Some(b));
}

#[test]
fn test_selected_polygon_wins_in_overlap() {
    let (mut state, a, _b) = overlapping();
    click(&mut state, 25.0, 25.0);
    assert_eq!(state.canvas().selected_id(), Some(a));

    click(&mut state, 75.0, 75.0);
    assert_eq!(state.canvas().selected_id(), Some(a));
}

#[test]
fn test_leaving_selected_shape_falls_back_to_topmost() {
    let (mut state, a, b) = overlapping();
    click(&mut state, 25.0, 25.0);
    assert_eq!(state.canvas().selected_id(), Some(a));

    click(&mut state, 140.0, 140.0);
    assert_eq!(state.canvas().selected_id(), Some(b));
    assert!(!state.canvas().get_polygon(a).unwrap().is_selected());
    assert!(state.canvas().get_polygon(b).unwrap().is_selected());
}

#[test]
fn test_click_on_empty_space_deselects() {
    let (mut state, a, _b) = overlapping();
    click(&mut state, 25.0, 25.0);
    click(&mut state, 500.0, 500.0);
    assert_eq!(state.canvas().selected_id(), None);
    assert!(!state.canvas().get_polygon(a).unwrap().is_selected());
}

#[test]
fn test_at_most_one_polygon_selected() {
    let (mut state, _a, _b) = overlapping();
    for (x, y) in [(25.0, 25.0), (75.0, 75.0), (140.0, 140.0), (5.0, 5.0)] {
        click(&mut state, x, y);
        let selected = state
            .canvas()
            .shapes()
            .iter()
            .filter(|p| p.is_selected())
            .count();
        assert!(selected <= 1);
    }
}

#[test]
fn test_edge_hit_selects() {
    let (mut state, a, _b) = overlapping();
    // 3px outside the left edge, inside the 4px line tolerance.
    click(&mut state, -3.0, 20.0);
    assert_eq!(state.canvas().selected_id(), Some(a));
}

#[test]
fn test_selection_change_is_published_once() {
    let mut state = DesignerState::with_bus_config(
        EditorConfig::default(),
        EventBusConfig {
            enable_history: true,
            max_history_size: 1000,
        },
    );
    let a = draw_rect(&mut state, 0.0, 0.0, 100.0, 100.0);
    state.set_tool(Tool::Edit);
    state.bus().clear_history();

    click(&mut state, 25.0, 25.0);
    click(&mut state, 30.0, 30.0);

    let changes: Vec<_> = state
        .bus()
        .history()
        .into_iter()
        .filter(|e| matches!(e, EditorEvent::SelectionChanged { .. }))
        .collect();
    assert_eq!(changes, vec![EditorEvent::SelectionChanged { id: Some(a) }]);
}
