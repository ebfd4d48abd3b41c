use labelkit_core::{PolygonId, Tool};
use labelkit_designer::{AnnotationFile, DesignerState, ImageSize, InputEvent, KeyAction};
use tempfile::TempDir;

fn click(state: &mut DesignerState, x: f64, y: f64) {
    state.handle_input(&InputEvent::PointerDown { x, y, alt: false });
}

fn draw_triangle(state: &mut DesignerState, x: f64) {
    state.set_tool(Tool::Polygon);
    click(state, x, 0.0);
    click(state, x + 50.0, 0.0);
    click(state, x + 25.0, 40.0);
    click(state, x, 0.0);
}

#[test]
fn test_save_and_load_keeps_ids_and_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scene.json");

    let mut state = DesignerState::new();
    draw_triangle(&mut state, 0.0);
    draw_triangle(&mut state, 100.0);
    draw_triangle(&mut state, 200.0);
    state.set_tool(Tool::Edit);
    click(&mut state, 125.0, 10.0);
    state.handle_input(&InputEvent::Key {
        action: KeyAction::DeleteSelected,
        in_text_input: false,
    });
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    let ids: Vec<_> = loaded.canvas().shapes().draw_order_iter().collect();
    assert_eq!(ids, vec![PolygonId(1), PolygonId(3)]);
    assert_eq!(loaded.current_file_path.as_deref(), Some(path.as_path()));

    // New polygons continue above the largest loaded id.
    draw_triangle(&mut loaded, 400.0);
    let last = loaded.canvas().shapes().draw_order_iter().last().unwrap();
    assert_eq!(last, PolygonId(4));
}

#[test]
fn test_load_clears_history_and_selection() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scene.json");

    let mut source = DesignerState::new();
    draw_triangle(&mut source, 0.0);
    source.save_to_file(&path).unwrap();

    let mut state = DesignerState::new();
    draw_triangle(&mut state, 0.0);
    draw_triangle(&mut state, 100.0);
    state.set_tool(Tool::Edit);
    click(&mut state, 25.0, 10.0);
    assert!(state.canvas().selected_id().is_some());
    assert!(state.can_undo());

    state.load_from_file(&path).unwrap();
    assert_eq!(state.canvas().shape_count(), 1);
    assert_eq!(state.canvas().selected_id(), None);
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(state.canvas().shapes().iter().all(|p| !p.is_selected()));
}

#[test]
fn test_load_abandons_open_polygon() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.json");
    AnnotationFile::new("empty").save_to_file(&path).unwrap();

    let mut state = DesignerState::new();
    state.set_tool(Tool::Polygon);
    click(&mut state, 0.0, 0.0);
    click(&mut state, 30.0, 0.0);
    assert!(state.canvas().is_drawing());

    state.load_from_file(&path).unwrap();
    assert!(!state.canvas().is_drawing());
    assert!(state.canvas().current_points().is_empty());
    assert_eq!(state.design_name, "empty");
}

#[test]
fn test_file_layout() {
    let mut state = DesignerState::new();
    state.set_image(
        ImageSize {
            width: 640.0,
            height: 480.0,
        },
        800.0,
        600.0,
    );
    state.set_tool(Tool::Polygon);
    // Screen clicks; the stored points are world coordinates.
    let vp = *state.canvas().viewport();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 0.0)] {
        let s = vp.world_to_screen(labelkit_designer::Point::new(x, y));
        click(&mut state, s.x, s.y);
    }

    let json = state.to_annotation_file().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["image"]["width"], 640.0);
    let polygon = &value["polygons"][0];
    assert_eq!(polygon["id"], 1);
    assert_eq!(polygon["label"], "object");
    assert_eq!(polygon["isComplete"], true);
    assert!(polygon["color"].as_str().unwrap().starts_with('#'));
    let first = &polygon["points"][1];
    assert!((first["x"].as_f64().unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let mut state = DesignerState::new();
    let err = state.load_from_file("/nonexistent/labels.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read annotation file"));
    assert_eq!(state.canvas().shape_count(), 0);
}

#[test]
fn test_load_invalid_json_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut state = DesignerState::new();
    let err = state.load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse annotation file"));
}

fn write_raw(path: &std::path::Path, polygons: &str) {
    let json = format!(
        r#"{{"version":"1.0","metadata":{{"name":"raw","created":"2024-01-01T00:00:00Z","modified":"2024-01-01T00:00:00Z"}},"polygons":{}}}"#,
        polygons
    );
    std::fs::write(path, json).unwrap();
}

const TRIANGLE_POINTS: &str = r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10}]"#;

#[test]
fn test_load_rejects_duplicate_ids_and_keeps_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dup.json");
    let polygon =
        format!(r##"{{"id":7,"label":"a","color":"#ff0000","points":{TRIANGLE_POINTS},"isComplete":true}}"##);
    write_raw(&path, &format!("[{polygon},{polygon}]"));

    let mut state = DesignerState::new();
    draw_triangle(&mut state, 0.0);
    state.design_name = "current".to_string();

    let err = state.load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate polygon id #7"));
    let ids: Vec<_> = state.canvas().shapes().draw_order_iter().collect();
    assert_eq!(ids, vec![PolygonId(1)]);
    assert_eq!(state.design_name, "current");
    assert!(state.current_file_path.is_none());
    assert!(state.can_undo());
}

#[test]
fn test_load_rejects_open_or_short_polygons() {
    let temp = TempDir::new().unwrap();

    let open = temp.path().join("open.json");
    write_raw(
        &open,
        &format!(r##"[{{"id":1,"label":"a","color":"#ff0000","points":{TRIANGLE_POINTS},"isComplete":false}}]"##),
    );
    let short = temp.path().join("short.json");
    write_raw(
        &short,
        r##"[{"id":1,"label":"a","color":"#ff0000","points":[{"x":0,"y":0},{"x":5,"y":5}],"isComplete":true}]"##,
    );

    let mut state = DesignerState::new();
    draw_triangle(&mut state, 100.0);
    for path in [&open, &short] {
        let err = state.load_from_file(path).unwrap_err();
        assert!(err.to_string().contains("Invalid annotation file"));
        assert_eq!(state.canvas().shape_count(), 1);
    }
}

#[test]
fn test_apply_invalid_file_changes_nothing() {
    let mut state = DesignerState::new();
    draw_triangle(&mut state, 0.0);

    let mut file = state.to_annotation_file();
    let copy = file.polygons[0].clone();
    file.polygons.push(copy);
    assert!(state.apply_annotation_file(file).is_err());
    assert_eq!(state.canvas().shape_count(), 1);
    assert!(state.is_modified);
}
