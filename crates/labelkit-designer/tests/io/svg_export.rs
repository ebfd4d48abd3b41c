use labelkit_core::Tool;
use labelkit_designer::{render_svg, DesignerState, InputEvent};
use labelkit_settings::{LabelPreset, RenderSettings};

fn click(state: &mut DesignerState, x: f64, y: f64) {
    state.handle_input(&InputEvent::PointerDown { x, y, alt: false });
}

#[test]
fn test_svg_has_one_path_per_polygon() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Polygon);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 0.0)] {
        click(&mut state, x, y);
    }
    state.set_active_label(LabelPreset::new("car & truck", "#00ff00".parse().unwrap()));
    for (x, y) in [(100.0, 0.0), (140.0, 0.0), (140.0, 40.0), (100.0, 0.0)] {
        click(&mut state, x, y);
    }

    let svg = render_svg(state.canvas(), 320, 240, &RenderSettings::default());
    assert_eq!(svg.matches("<path ").count(), 2);
    assert!(svg.contains(r#"d="M 0.00 0.00 L 40.00 0.00 L 40.00 40.00 Z""#));
    assert!(svg.contains("<title>car &amp; truck</title>"));
    assert!(svg.contains(r##"fill="#00ff00""##));
}

#[test]
fn test_svg_follows_viewport() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Polygon);
    for (x, y) in [(10.0, 10.0), (50.0, 10.0), (50.0, 50.0), (10.0, 10.0)] {
        click(&mut state, x, y);
    }
    state.handle_input(&InputEvent::Wheel {
        x: 0.0,
        y: 0.0,
        delta: -1000.0,
    });
    assert_eq!(state.canvas().viewport().scale(), 2.0);

    let svg = render_svg(state.canvas(), 200, 200, &RenderSettings::default());
    assert!(svg.contains(r#"d="M 20.00 20.00 L 100.00 20.00 L 100.00 100.00 Z""#));
}

#[test]
fn test_svg_shows_open_polygon_and_selection() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Polygon);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 0.0)] {
        click(&mut state, x, y);
    }
    state.set_tool(Tool::Edit);
    click(&mut state, 30.0, 10.0);
    state.set_tool(Tool::Polygon);
    click(&mut state, 100.0, 100.0);
    click(&mut state, 150.0, 100.0);

    let style = RenderSettings::default();
    let svg = render_svg(state.canvas(), 300, 300, &style);
    assert!(svg.contains(r#"class="open" d="M 100.00 100.00 L 150.00 100.00""#));
    assert!(svg.contains(&format!(r#"stroke="{}""#, style.selection_color)));
    // 3 markers on the completed polygon, 2 on the open one.
    assert_eq!(svg.matches("<circle").count(), 5);
}

#[test]
fn test_svg_marks_vertices_of_every_polygon() {
    let mut state = DesignerState::new();
    state.set_tool(Tool::Polygon);
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 0.0)] {
        click(&mut state, x, y);
    }
    for (x, y) in [
        (100.0, 0.0),
        (140.0, 0.0),
        (140.0, 40.0),
        (100.0, 40.0),
        (100.0, 0.0),
    ] {
        click(&mut state, x, y);
    }
    state.set_tool(Tool::Edit);
    click(&mut state, 130.0, 10.0);

    let style = RenderSettings::default();
    let svg = render_svg(state.canvas(), 300, 300, &style);
    let plain = format!(r#"r="{}" fill="{}""#, style.vertex_radius, style.vertex_color);
    let selected = format!(r#"r="{}" fill="{}""#, style.vertex_radius, style.selection_color);
    assert_eq!(svg.matches(&plain).count(), 3);
    assert_eq!(svg.matches(&selected).count(), 4);
    assert!(svg.contains(r#"<circle cx="0.00" cy="0.00""#));
}
