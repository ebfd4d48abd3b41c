//! # LabelKit Designer
//!
//! The polygon annotation editing engine: everything between raw pointer and
//! key events and the polygon collection a UI renders.
//!
//! ## Core Components
//!
//! - **Geometry**: point-in-polygon, point-to-segment distance, vertex and
//!   edge hit search, vertex insertion
//! - **Polygon**: labelled shape with drag handles and a cached outline path
//! - **Viewport**: screen/world conversion, anchored zoom, pan, fitting
//! - **Selection**: topmost hit with selection precedence
//! - **Canvas**: the interaction state machine driven by pointer/key input
//! - **History**: reversible commands with bounded undo/redo
//! - **Export**: JSON annotation files and SVG snapshots
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (one editor session)
//!   ├── Canvas (tool, open polygon, drag, viewport)
//!   │     ├── ShapeStore (completed polygons, draw order)
//!   │     └── SelectionManager
//!   ├── History (EditorCommand undo/redo)
//!   └── EventBus (redraw and state-change notifications)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_designer::{DesignerState, InputEvent, KeyAction};
//! use labelkit_core::Tool;
//!
//! let mut state = DesignerState::new();
//! state.handle_input(&InputEvent::Key {
//!     action: KeyAction::SwitchTool(Tool::Polygon),
//!     in_text_input: false,
//! });
//! for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (1.0, 1.0)] {
//!     state.handle_input(&InputEvent::PointerDown { x, y, alt: false });
//! }
//! assert_eq!(state.canvas().shape_count(), 1);
//! ```

pub mod canvas;
pub mod commands;
pub mod designer_state;
pub mod geometry;
pub mod model;
pub mod selection_manager;
pub mod serialization;
pub mod session;
pub mod shape_store;
pub mod svg_renderer;
pub mod viewport;

pub use canvas::{Canvas, ImageSize, InputEvent, KeyAction, Modifiers};
pub use commands::EditorCommand;
pub use designer_state::{DesignerState, History};
pub use model::{DragHandle, DragTarget, HitKind, LabelColor, Point, Polygon};
pub use selection_manager::{find_topmost, HitTolerance, SelectionManager};
pub use serialization::{AnnotationFile, PolygonData};
pub use shape_store::ShapeStore;
pub use svg_renderer::render_svg;
pub use viewport::{fit_image, ImagePlacement, Viewport};
