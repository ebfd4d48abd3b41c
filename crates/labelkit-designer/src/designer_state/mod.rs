//! Designer state manager for UI integration.
//! Owns the canvas, the undo history and the event bus of one editor session.
//!
//! This module is split into submodules:
//! - `history`: Undo/redo stacks
//! - `file_io`: Save/load operations

mod file_io;
mod history;

pub use history::History;

use labelkit_core::{EditorEvent, EventBus, EventBusConfig, Tool};
use labelkit_settings::{EditorConfig, LabelPreset};

use crate::canvas::{Canvas, ImageSize, InputEvent, KeyAction, Modifiers};
use crate::commands::EditorCommand;
use crate::model::Point;

/// Designer state for UI integration
pub struct DesignerState {
    canvas: Canvas,
    history: History,
    bus: EventBus,
    history_flags: (bool, bool),
    pub current_file_path: Option<std::path::PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
}

impl DesignerState {
    /// Creates a new designer state with default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Creates a designer state using the given configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        Self::with_bus(config, EventBus::new())
    }

    /// Creates a designer state that publishes into an event bus with the
    /// given configuration.
    pub fn with_bus_config(config: EditorConfig, bus_config: EventBusConfig) -> Self {
        Self::with_bus(config, EventBus::with_config(bus_config))
    }

    fn with_bus(config: EditorConfig, bus: EventBus) -> Self {
        let history = History::with_depth(config.history.max_depth);
        Self {
            canvas: Canvas::with_config(config),
            history,
            bus,
            history_flags: (false, false),
            current_file_path: None,
            is_modified: false,
            design_name: "Untitled".to_string(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The bus this session publishes to.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn tool(&self) -> Tool {
        self.canvas.tool()
    }

    /// Feeds one input event through the editor.
    pub fn handle_input(&mut self, event: &InputEvent) {
        let command = match *event {
            InputEvent::PointerDown { x, y, alt } => {
                self.canvas.pointer_down(Point::new(x, y), Modifiers { alt })
            }
            InputEvent::PointerMove { x, y } => {
                self.canvas.pointer_move(Point::new(x, y));
                None
            }
            InputEvent::PointerUp => self.canvas.pointer_up(),
            InputEvent::Wheel { x, y, delta } => {
                self.canvas.wheel(Point::new(x, y), delta);
                None
            }
            InputEvent::Key {
                action,
                in_text_input,
            } => {
                if in_text_input {
                    tracing::trace!("Key {:?} ignored inside text input", action);
                    return;
                }
                self.handle_key(action)
            }
        };

        if let Some(command) = command {
            self.record(command);
        }
        self.flush_events();
    }

    fn handle_key(&mut self, action: KeyAction) -> Option<EditorCommand> {
        match action {
            KeyAction::Undo => {
                self.undo();
                None
            }
            KeyAction::Redo => {
                self.redo();
                None
            }
            other => self.canvas.handle_key(other),
        }
    }

    /// Switches the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if let Some(command) = self.canvas.set_tool(tool) {
            self.record(command);
        }
        self.flush_events();
    }

    /// Removes the selected polygon, if any.
    pub fn delete_selected(&mut self) {
        if let Some(command) = self.canvas.delete_selected() {
            self.record(command);
        }
        self.flush_events();
    }

    pub fn set_active_label(&mut self, preset: LabelPreset) {
        self.canvas.set_active_label(preset);
    }

    /// Records the image being annotated and letterboxes it into the view.
    pub fn set_image(&mut self, image: ImageSize, canvas_width: f64, canvas_height: f64) {
        self.canvas.set_image(Some(image));
        self.canvas.fit_image_to_view(canvas_width, canvas_height);
        self.flush_events();
    }

    /// Fits the image (or all polygons) into the view.
    pub fn fit_to_view(&mut self, canvas_width: f64, canvas_height: f64) -> bool {
        let fitted = self.canvas.fit_to_view(canvas_width, canvas_height);
        self.flush_events();
        fitted
    }

    /// Reverts the last command. Refused while drawing or dragging.
    pub fn undo(&mut self) -> bool {
        if !self.history_available() {
            return false;
        }
        let Some(mut command) = self.history.pop_undo() else {
            return false;
        };
        tracing::debug!("Undo '{}'", command.name());
        command.undo(&mut self.canvas);
        self.history.push_redo(command);
        self.is_modified = true;
        self.flush_events();
        true
    }

    /// Re-applies the last undone command. Refused while drawing or dragging.
    pub fn redo(&mut self) -> bool {
        if !self.history_available() {
            return false;
        }
        let Some(mut command) = self.history.pop_redo() else {
            return false;
        };
        tracing::debug!("Redo '{}'", command.name());
        command.apply(&mut self.canvas);
        self.history.push_undo(command);
        self.is_modified = true;
        self.flush_events();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn history_available(&self) -> bool {
        if self.canvas.is_drawing() || self.canvas.is_dragging() {
            tracing::warn!("Undo/redo unavailable while drawing or dragging");
            return false;
        }
        true
    }

    fn record(&mut self, command: EditorCommand) {
        self.history.record(command);
        self.is_modified = true;
    }

    /// Publishes the canvas's queued events, then any history change.
    fn flush_events(&mut self) {
        for event in self.canvas.take_events() {
            self.bus.publish(event);
        }
        let flags = (self.history.can_undo(), self.history.can_redo());
        if flags != self.history_flags {
            self.history_flags = flags;
            self.bus.publish(EditorEvent::HistoryChanged {
                can_undo: flags.0,
                can_redo: flags.1,
            });
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("design_name", &self.design_name)
            .field("tool", &self.canvas.tool())
            .field("polygons", &self.canvas.shape_count())
            .field("undo", &self.history.undo_count())
            .field("redo", &self.history.redo_count())
            .finish()
    }
}
