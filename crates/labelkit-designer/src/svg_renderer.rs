//! SVG renderer for the annotation canvas
//! Renders the canvas as it would appear on screen:
//! - Background fill
//! - Completed polygons filled with their label colour and vertex markers,
//!   selected one highlighted
//! - The open polygon as a polyline with its vertices
//! - Viewport-based coordinate transformation

use std::fmt::Write;

use labelkit_settings::RenderSettings;

use crate::canvas::Canvas;
use crate::model::{Point, Polygon};
use crate::viewport::Viewport;

/// Screen-space path data (`M x y L x y ... [Z]`) for a polygon.
pub fn polygon_path(viewport: &Viewport, polygon: &Polygon) -> String {
    let mut path = String::new();
    for (i, p) in polygon.points().iter().enumerate() {
        let s = viewport.world_to_screen(*p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{} {:.2} {:.2} ", cmd, s.x, s.y);
    }
    if polygon.is_complete() {
        path.push('Z');
    }
    path.trim_end().to_string()
}

fn vertex_markers(out: &mut String, viewport: &Viewport, points: &[Point], color: &str, radius: f64) {
    for p in points {
        let s = viewport.world_to_screen(*p);
        let _ = writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            s.x, s.y, radius, color
        );
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the whole canvas as a standalone SVG document
pub fn render_svg(canvas: &Canvas, width: u32, height: u32, style: &RenderSettings) -> String {
    let viewport = canvas.viewport();
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        style.background
    );

    if let Some(image) = canvas.image() {
        let origin = viewport.world_to_screen(Point::new(0.0, 0.0));
        let _ = writeln!(
            out,
            r#"  <rect class="image" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}"/>"#,
            origin.x,
            origin.y,
            image.width * viewport.scale(),
            image.height * viewport.scale(),
            style.selection_color
        );
    }

    for polygon in canvas.shapes().iter() {
        let color = polygon.color().to_string();
        let stroke = if polygon.is_selected() {
            style.selection_color.to_string()
        } else {
            color.clone()
        };
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"><title>{}</title></path>"#,
            polygon_path(viewport, polygon),
            color,
            style.fill_alpha,
            stroke,
            style.stroke_width,
            escape(polygon.label())
        );
        let marker = if polygon.is_selected() {
            stroke
        } else {
            style.vertex_color.to_string()
        };
        vertex_markers(
            &mut out,
            viewport,
            polygon.points(),
            &marker,
            style.vertex_radius,
        );
    }

    if let Some(open) = canvas.open_polygon() {
        let color = open.color().to_string();
        let _ = writeln!(
            out,
            r#"  <path class="open" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            polygon_path(viewport, open),
            color,
            style.stroke_width
        );
        vertex_markers(&mut out, viewport, open.points(), &color, style.vertex_radius);
    }

    out.push_str("</svg>\n");
    out
}
