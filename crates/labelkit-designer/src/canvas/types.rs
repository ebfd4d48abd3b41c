//! Canvas type definitions: InputEvent, KeyAction, Modifiers, ImageSize, DragState.

use labelkit_core::Tool;
use serde::{Deserialize, Serialize};

use crate::model::{DragHandle, Point};

/// Semantic keyboard actions. Key bindings themselves live in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    SwitchTool(Tool),
    CancelDrawing,
    CommitDrawing,
    DeleteSelected,
    Undo,
    Redo,
}

/// One input event in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        alt: bool,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    Wheel {
        x: f64,
        y: f64,
        delta: f64,
    },
    Key {
        action: KeyAction,
        /// Set when keyboard focus is inside a text field; such keys are ignored.
        #[serde(default)]
        in_text_input: bool,
    },
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Insert a vertex when pressing on an edge with the move tool.
    pub alt: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self { alt: true }
    }
}

/// Pixel size of the image being annotated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug)]
pub(crate) enum DragState {
    /// Moving a polygon or one of its vertices.
    Shape {
        handle: DragHandle,
        /// World point under the pointer at pointer-down.
        origin: Point,
    },
    /// Panning the viewport.
    Pan {
        /// Screen point at which the pan is anchored.
        origin: Point,
        /// Viewport position when the pan was anchored.
        start: Point,
        /// Most recent pointer position, used to re-anchor after a zoom.
        last: Point,
    },
}
