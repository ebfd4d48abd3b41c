//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so a session can be logged.

use serde::{Deserialize, Serialize};

use crate::types::{PolygonId, Tool};

/// Root event enum for everything an editor reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Visible state changed; the presentation layer should render a frame.
    RedrawRequested,
    /// The active tool changed.
    ToolChanged { tool: Tool },
    /// The selected polygon changed (`None` when cleared).
    SelectionChanged { id: Option<PolygonId> },
    /// Scale or position of the viewport changed.
    ViewportChanged { scale: f64, x: f64, y: f64 },
    /// An open polygon was closed and added to the collection.
    PolygonCompleted { id: PolygonId },
    /// A polygon left the collection.
    PolygonRemoved { id: PolygonId },
    /// The open polygon was discarded.
    DrawingCancelled,
    /// Undo/redo availability changed.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::RedrawRequested => EventCategory::Render,
            EditorEvent::ToolChanged { .. } => EventCategory::Tool,
            EditorEvent::SelectionChanged { .. } => EventCategory::Selection,
            EditorEvent::ViewportChanged { .. } => EventCategory::Viewport,
            EditorEvent::PolygonCompleted { .. }
            | EditorEvent::PolygonRemoved { .. }
            | EditorEvent::DrawingCancelled => EventCategory::Shapes,
            EditorEvent::HistoryChanged { .. } => EventCategory::History,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::RedrawRequested => "Redraw requested".to_string(),
            EditorEvent::ToolChanged { tool } => format!("Tool changed to {}", tool),
            EditorEvent::SelectionChanged { id: Some(id) } => format!("Selected polygon {}", id),
            EditorEvent::SelectionChanged { id: None } => "Selection cleared".to_string(),
            EditorEvent::ViewportChanged { scale, x, y } => {
                format!("Viewport {:.0}% at ({:.1}, {:.1})", scale * 100.0, x, y)
            }
            EditorEvent::PolygonCompleted { id } => format!("Polygon {} completed", id),
            EditorEvent::PolygonRemoved { id } => format!("Polygon {} removed", id),
            EditorEvent::DrawingCancelled => "Drawing cancelled".to_string(),
            EditorEvent::HistoryChanged { can_undo, can_redo } => {
                format!("History: undo={} redo={}", can_undo, can_redo)
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Redraw requests.
    Render,
    /// Tool mode changes.
    Tool,
    /// Selection changes.
    Selection,
    /// Pan/zoom changes.
    Viewport,
    /// Polygon collection changes.
    Shapes,
    /// Undo/redo availability.
    History,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Render => write!(f, "Render"),
            EventCategory::Tool => write!(f, "Tool"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::Shapes => write!(f, "Shapes"),
            EventCategory::History => write!(f, "History"),
        }
    }
}
