use labelkit_core::PolygonId;

use crate::model::{Point, Polygon};
use crate::shape_store::ShapeStore;

/// World-space hit tolerances for one hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTolerance {
    pub point_radius: f64,
    pub line_distance: f64,
}

impl HitTolerance {
    /// Converts screen-pixel tolerances to world units at `scale`.
    pub fn from_screen(point_radius: f64, line_distance: f64, scale: f64) -> Self {
        Self {
            point_radius: point_radius / scale,
            line_distance: line_distance / scale,
        }
    }
}

/// Finds the polygon a world point lands on.
///
/// The selected polygon wins whenever it is hit, even when a later shape
/// overlaps it. Otherwise the last-drawn hit polygon wins.
pub fn find_topmost<'a>(
    point: &Point,
    store: &'a ShapeStore,
    selected_id: Option<PolygonId>,
    tolerance: HitTolerance,
) -> Option<&'a Polygon> {
    let hits = |p: &&Polygon| p.contains_point(point, tolerance.point_radius, tolerance.line_distance);

    if let Some(selected) = selected_id.and_then(|id| store.get(id)) {
        if hits(&selected) {
            return Some(selected);
        }
    }

    store
        .iter()
        .rev()
        .filter(|p| Some(p.id()) != selected_id)
        .find(hits)
}

/// Tracks the selected polygon.
///
/// The manager owns the selected id and keeps each polygon's `is_selected`
/// flag in step with it.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<PolygonId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<PolygonId> {
        self.selected_id
    }

    /// Selects `id` and deselects the previous polygon.
    ///
    /// Returns true when the selection changed.
    pub fn select(&mut self, store: &mut ShapeStore, id: PolygonId) -> bool {
        if self.selected_id == Some(id) {
            return false;
        }
        let Some(polygon) = store.get_mut(id) else {
            return false;
        };
        polygon.set_selected(true);
        if let Some(previous) = self.selected_id.replace(id) {
            if let Some(polygon) = store.get_mut(previous) {
                polygon.set_selected(false);
            }
        }
        true
    }

    /// Clears the selection. Returns true if something was selected.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) -> bool {
        match self.selected_id.take() {
            Some(previous) => {
                if let Some(polygon) = store.get_mut(previous) {
                    polygon.set_selected(false);
                }
                true
            }
            None => false,
        }
    }

    /// Drops the selection without touching the store, for a polygon that
    /// has already left it.
    pub fn forget(&mut self, id: PolygonId) -> bool {
        if self.selected_id == Some(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }

    /// Selects the topmost polygon at `point`, or clears the selection on a
    /// miss. Returns the new selection.
    pub fn select_at(
        &mut self,
        store: &mut ShapeStore,
        point: &Point,
        tolerance: HitTolerance,
    ) -> Option<PolygonId> {
        let hit = find_topmost(point, store, self.selected_id, tolerance).map(|p| p.id());
        match hit {
            Some(id) => {
                self.select(store, id);
            }
            None => {
                self.deselect_all(store);
            }
        }
        self.selected_id
    }
}
