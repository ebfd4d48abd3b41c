use labelkit_core::Tool;
use labelkit_designer::session::{load_session, parse_session, replay};
use labelkit_designer::DesignerState;
use tempfile::Builder;

const DRAW_AND_DRAG: &str = r#"[
    {"type": "key", "action": {"switch_tool": "polygon"}},
    {"type": "pointer_down", "x": 0.0, "y": 0.0},
    {"type": "pointer_down", "x": 100.0, "y": 0.0},
    {"type": "pointer_down", "x": 100.0, "y": 100.0},
    {"type": "pointer_down", "x": 2.0, "y": 2.0},
    {"type": "key", "action": {"switch_tool": "move"}},
    {"type": "pointer_down", "x": 60.0, "y": 30.0},
    {"type": "pointer_move", "x": 70.0, "y": 30.0},
    {"type": "pointer_move", "x": 80.0, "y": 40.0},
    {"type": "pointer_up"}
]"#;

#[test]
fn test_replay_draws_and_drags() {
    let events = parse_session(DRAW_AND_DRAG).unwrap();
    let mut state = DesignerState::new();
    replay(&mut state, &events);

    assert_eq!(state.tool(), Tool::Move);
    assert_eq!(state.canvas().shape_count(), 1);
    let polygon = state.canvas().shapes().iter().next().unwrap();
    assert_eq!(polygon.points()[0].x, 20.0);
    assert_eq!(polygon.points()[0].y, 10.0);
    assert_eq!(state.history().undo_count(), 2);
}

#[test]
fn test_replay_is_deterministic() {
    let events = parse_session(DRAW_AND_DRAG).unwrap();
    let mut first = DesignerState::new();
    let mut second = DesignerState::new();
    replay(&mut first, &events);
    replay(&mut second, &events);

    let a: Vec<_> = first.canvas().shapes().iter().map(|p| p.points().to_vec()).collect();
    let b: Vec<_> = second.canvas().shapes().iter().map(|p| p.points().to_vec()).collect();
    assert_eq!(a, b);
    assert_eq!(first.canvas().viewport(), second.canvas().viewport());
}

#[test]
fn test_keys_in_text_input_are_ignored() {
    let events = parse_session(
        r#"[
            {"type": "key", "action": {"switch_tool": "polygon"}, "in_text_input": true},
            {"type": "key", "action": "undo", "in_text_input": true}
        ]"#,
    )
    .unwrap();
    let mut state = DesignerState::new();
    replay(&mut state, &events);
    assert_eq!(state.tool(), Tool::Move);
}

#[test]
fn test_load_session_from_file() {
    let file = Builder::new().suffix(".json").tempfile().unwrap();
    std::fs::write(file.path(), DRAW_AND_DRAG).unwrap();
    let events = load_session(file.path()).unwrap();
    assert_eq!(events.len(), 10);
}
