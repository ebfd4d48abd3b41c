//! Canvas pointer, wheel and key handling.

use labelkit_core::{EditorEvent, PolygonId, Tool};

use super::{Canvas, DragState, KeyAction, Modifiers};
use crate::commands::EditorCommand;
use crate::model::{DragHandle, HitKind, Point, Polygon};
use crate::selection_manager::find_topmost;

impl Canvas {
    /// Handles a pointer press at a screen position.
    ///
    /// Returns the command describing any committed change to the collection.
    pub fn pointer_down(&mut self, screen: Point, modifiers: Modifiers) -> Option<EditorCommand> {
        if self.drag.is_some() {
            tracing::debug!("Pointer down during a drag ignored");
            return None;
        }

        let world = self.viewport.screen_to_world(screen);
        match self.tool {
            Tool::Move => {
                self.begin_move(screen, world, modifiers);
                None
            }
            Tool::Polygon | Tool::Bezier => self.draw_click(world),
            Tool::Edit => {
                self.select_at(world);
                None
            }
        }
    }

    /// Handles pointer motion; only has an effect while a drag is active.
    pub fn pointer_move(&mut self, screen: Point) {
        match &mut self.drag {
            Some(DragState::Shape { handle, origin }) => {
                let world = self.viewport.screen_to_world(screen);
                let (dx, dy) = (world.x - origin.x, world.y - origin.y);
                let moved = self
                    .shape_store
                    .get_mut(handle.polygon())
                    .is_some_and(|polygon| polygon.move_by(handle, dx, dy));
                if moved {
                    self.request_redraw();
                }
            }
            Some(DragState::Pan {
                origin,
                start,
                last,
            }) => {
                *last = screen;
                let position = start.offset(screen.x - origin.x, screen.y - origin.y);
                self.viewport = self.viewport.with_position(position);
                self.viewport_changed();
            }
            None => {}
        }
    }

    /// Ends the active drag, returning an edit command if vertices moved.
    pub fn pointer_up(&mut self) -> Option<EditorCommand> {
        match self.drag.take()? {
            DragState::Shape { handle, .. } => self.finish_shape_drag(handle),
            DragState::Pan { .. } => {
                tracing::debug!("Pan ended");
                None
            }
        }
    }

    /// Zooms around the pointer. Applies with every tool.
    pub fn wheel(&mut self, screen: Point, delta: f64) {
        let vp = &self.config.viewport;
        let zoomed =
            self.viewport
                .zoom_at(screen, delta, vp.zoom_speed, vp.min_scale, vp.max_scale);
        if zoomed == self.viewport {
            return;
        }
        self.viewport = zoomed;

        // Re-anchor a pan so the next move does not undo the zoom's shift.
        if let Some(DragState::Pan {
            origin,
            start,
            last,
        }) = &mut self.drag
        {
            *origin = *last;
            *start = zoomed.position();
        }

        self.viewport_changed();
    }

    /// Switches tool. Ends any drag and cancels an open polygon.
    pub fn set_tool(&mut self, tool: Tool) -> Option<EditorCommand> {
        if tool == self.tool {
            return None;
        }
        let command = self.pointer_up();
        if self.open.is_some() {
            self.cancel_drawing();
        }
        self.tool = tool;
        tracing::debug!("Tool changed to {}", tool);
        self.push_event(EditorEvent::ToolChanged { tool });
        self.request_redraw();
        command
    }

    /// Discards the open polygon. Returns false when nothing was being drawn.
    pub fn cancel_drawing(&mut self) -> bool {
        let Some(open) = self.open.take() else {
            return false;
        };
        tracing::debug!("Drawing of polygon {} cancelled", open.id());
        open.destroy();
        self.push_event(EditorEvent::DrawingCancelled);
        self.request_redraw();
        true
    }

    /// Completes the open polygon if it has at least three vertices.
    pub fn commit_drawing(&mut self) -> Option<EditorCommand> {
        let count = self.open.as_ref()?.points().len();
        if count < 3 {
            tracing::warn!("Cannot complete a polygon with {} points", count);
            return None;
        }
        self.finish_drawing()
    }

    /// Removes the selected polygon.
    pub fn delete_selected(&mut self) -> Option<EditorCommand> {
        let id = self.selection_manager.selected_id()?;
        self.remove_polygon(id)
    }

    /// Removes a polygon by id. A missing id changes nothing.
    pub fn remove_polygon(&mut self, id: PolygonId) -> Option<EditorCommand> {
        if self.is_dragging_polygon(id) {
            tracing::warn!("Polygon {} is being dragged; not removed", id);
            return None;
        }
        let (index, polygon) = self.take_polygon(id)?;
        tracing::debug!("Removed polygon {}", id);
        Some(EditorCommand::remove(index, polygon))
    }

    /// Applies a semantic key action. Undo and redo belong to the history
    /// owner and are ignored here.
    pub fn handle_key(&mut self, action: KeyAction) -> Option<EditorCommand> {
        match action {
            KeyAction::SwitchTool(tool) => self.set_tool(tool),
            KeyAction::CancelDrawing => {
                self.cancel_drawing();
                None
            }
            KeyAction::CommitDrawing => self.commit_drawing(),
            KeyAction::DeleteSelected => self.delete_selected(),
            KeyAction::Undo | KeyAction::Redo => None,
        }
    }

    fn begin_move(&mut self, screen: Point, world: Point, modifiers: Modifiers) {
        let tolerance = self.hit_tolerance();
        let selected = self.selection_manager.selected_id();
        let hit = find_topmost(&world, &self.shape_store, selected, tolerance)
            .and_then(|polygon| {
                polygon
                    .hit_test(&world, tolerance.point_radius, tolerance.line_distance)
                    .map(|kind| (polygon.id(), kind))
            });

        let Some((id, kind)) = hit else {
            tracing::debug!("Pan started at ({:.1}, {:.1})", screen.x, screen.y);
            self.drag = Some(DragState::Pan {
                origin: screen,
                start: self.viewport.position(),
                last: screen,
            });
            return;
        };

        let Some(polygon) = self.shape_store.get_mut(id) else {
            return;
        };
        let handle = match kind {
            HitKind::Vertex(_) => polygon.start_point_drag(world, tolerance.point_radius),
            HitKind::Edge(_) if modifiers.alt => {
                polygon.insert_point_on_line(world, tolerance.line_distance)
            }
            HitKind::Edge(_) | HitKind::Interior => Some(polygon.start_drag()),
        };
        let Some(handle) = handle else {
            return;
        };

        tracing::debug!(
            "Drag started on polygon {} ({:?})",
            handle.polygon(),
            handle.target()
        );
        self.drag = Some(DragState::Shape {
            handle,
            origin: world,
        });
        self.request_redraw();
    }

    fn draw_click(&mut self, world: Point) -> Option<EditorCommand> {
        let close_threshold =
            self.viewport
                .screen_distance_to_world(self.config.hit_testing.close_threshold);

        let Some(open) = self.open.as_mut() else {
            let id = self.shape_store.generate_id();
            let mut polygon =
                Polygon::new(id, self.active_label.label.clone(), self.active_label.color);
            polygon.add_point(world);
            tracing::debug!("Started polygon {}", id);
            self.open = Some(polygon);
            self.request_redraw();
            return None;
        };

        let count = open.points().len();
        let near_first = open
            .points()
            .first()
            .is_some_and(|first| first.distance_to(&world) <= close_threshold);

        if near_first && count >= 2 {
            if count < 3 {
                tracing::debug!("Close click with {} points ignored", count);
                return None;
            }
            return self.finish_drawing();
        }

        open.add_point(world);
        self.request_redraw();
        None
    }

    fn finish_drawing(&mut self) -> Option<EditorCommand> {
        let mut polygon = self.open.take()?;
        if !polygon.complete() {
            self.open = Some(polygon);
            return None;
        }
        let id = polygon.id();
        let count = polygon.points().len();
        if !self.shape_store.insert(polygon) {
            return None;
        }
        tracing::debug!("Completed polygon {} with {} points", id, count);
        self.push_event(EditorEvent::PolygonCompleted { id });
        self.request_redraw();
        Some(EditorCommand::add(id))
    }

    fn select_at(&mut self, world: Point) {
        let tolerance = self.hit_tolerance();
        let before = self.selection_manager.selected_id();
        let after = self
            .selection_manager
            .select_at(&mut self.shape_store, &world, tolerance);
        if before != after {
            tracing::debug!("Selection changed to {:?}", after);
            self.push_event(EditorEvent::SelectionChanged { id: after });
            self.request_redraw();
        }
    }

    fn finish_shape_drag(&mut self, handle: DragHandle) -> Option<EditorCommand> {
        let id = handle.polygon();
        let polygon = self.shape_store.get_mut(id)?;
        let before = polygon.end_drag(handle);
        let after = polygon.points().to_vec();
        self.request_redraw();
        if before == after {
            return None;
        }
        Some(EditorCommand::edit_points(id, before, after))
    }

    fn is_dragging_polygon(&self, id: PolygonId) -> bool {
        matches!(&self.drag, Some(DragState::Shape { handle, .. }) if handle.polygon() == id)
    }
}
