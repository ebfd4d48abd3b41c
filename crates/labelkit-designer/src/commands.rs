//! Reversible edits to the polygon collection.
//!
//! The canvas performs an edit first and then hands back the command that
//! describes it, already in its applied state. `undo` and `apply` flip it
//! back and forth.

use labelkit_core::PolygonId;

use crate::canvas::Canvas;
use crate::model::{Point, Polygon};

#[derive(Debug, Clone)]
pub struct AddPolygon {
    pub id: PolygonId,
    /// Z-index recorded when undone.
    pub index: usize,
    pub polygon: Option<Polygon>, // None when on canvas, Some when undone
}

#[derive(Debug, Clone)]
pub struct RemovePolygon {
    pub id: PolygonId,
    /// Z-index the polygon is restored to.
    pub index: usize,
    pub polygon: Option<Polygon>, // Some when removed, None when undone (on canvas)
}

#[derive(Debug, Clone)]
pub struct EditPoints {
    pub id: PolygonId,
    pub before: Vec<Point>,
    pub after: Vec<Point>,
}

#[derive(Debug, Clone)]
pub enum EditorCommand {
    AddPolygon(AddPolygon),
    RemovePolygon(RemovePolygon),
    EditPoints(EditPoints),
}

impl EditorCommand {
    pub fn add(id: PolygonId) -> Self {
        EditorCommand::AddPolygon(AddPolygon {
            id,
            index: usize::MAX,
            polygon: None,
        })
    }

    pub fn remove(index: usize, polygon: Polygon) -> Self {
        EditorCommand::RemovePolygon(RemovePolygon {
            id: polygon.id(),
            index,
            polygon: Some(polygon),
        })
    }

    pub fn edit_points(id: PolygonId, before: Vec<Point>, after: Vec<Point>) -> Self {
        EditorCommand::EditPoints(EditPoints { id, before, after })
    }

    /// The polygon this command touches.
    pub fn target(&self) -> PolygonId {
        match self {
            EditorCommand::AddPolygon(cmd) => cmd.id,
            EditorCommand::RemovePolygon(cmd) => cmd.id,
            EditorCommand::EditPoints(cmd) => cmd.id,
        }
    }

    /// Re-applies an undone command.
    pub fn apply(&mut self, canvas: &mut Canvas) {
        match self {
            EditorCommand::AddPolygon(cmd) => {
                if let Some(polygon) = cmd.polygon.take() {
                    canvas.restore_polygon(cmd.index, polygon);
                }
            }
            EditorCommand::RemovePolygon(cmd) => {
                if let Some((index, polygon)) = canvas.take_polygon(cmd.id) {
                    cmd.index = index;
                    cmd.polygon = Some(polygon);
                }
            }
            EditorCommand::EditPoints(cmd) => {
                canvas.replace_points(cmd.id, cmd.after.clone());
            }
        }
    }

    /// Reverts the command.
    pub fn undo(&mut self, canvas: &mut Canvas) {
        match self {
            EditorCommand::AddPolygon(cmd) => {
                if let Some((index, polygon)) = canvas.take_polygon(cmd.id) {
                    cmd.index = index;
                    cmd.polygon = Some(polygon);
                }
            }
            EditorCommand::RemovePolygon(cmd) => {
                if let Some(polygon) = cmd.polygon.take() {
                    canvas.restore_polygon(cmd.index, polygon);
                }
            }
            EditorCommand::EditPoints(cmd) => {
                canvas.replace_points(cmd.id, cmd.before.clone());
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EditorCommand::AddPolygon(_) => "Add Polygon",
            EditorCommand::RemovePolygon(_) => "Remove Polygon",
            EditorCommand::EditPoints(_) => "Edit Points",
        }
    }
}
