//! Ordered storage for completed polygons.
//!
//! Insertion order is draw order: later entries are drawn on top.

use labelkit_core::PolygonId;

use crate::model::Polygon;

/// Owns every polygon in the collection and hands out ids.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<Polygon>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> PolygonId {
        let id = PolygonId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The id the next call to `generate_id` returns.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains(&self, id: PolygonId) -> bool {
        self.index_of(id).is_some()
    }

    /// Z-index of a polygon.
    pub fn index_of(&self, id: PolygonId) -> Option<usize> {
        self.shapes.iter().position(|p| p.id() == id)
    }

    pub fn get(&self, id: PolygonId) -> Option<&Polygon> {
        self.shapes.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: PolygonId) -> Option<&mut Polygon> {
        self.shapes.iter_mut().find(|p| p.id() == id)
    }

    /// Adds a polygon on top. Returns false if the id is already present.
    pub fn insert(&mut self, polygon: Polygon) -> bool {
        let index = self.shapes.len();
        self.insert_at(index, polygon)
    }

    /// Adds a polygon at a z-index, clamped to the end of the collection.
    pub fn insert_at(&mut self, index: usize, polygon: Polygon) -> bool {
        if self.contains(polygon.id()) {
            tracing::warn!("Polygon {} already in store", polygon.id());
            return false;
        }
        if polygon.id().0 >= self.next_id {
            self.next_id = polygon.id().0 + 1;
        }
        let index = index.min(self.shapes.len());
        self.shapes.insert(index, polygon);
        true
    }

    /// Removes a polygon, returning it with the z-index it occupied.
    pub fn remove(&mut self, id: PolygonId) -> Option<(usize, Polygon)> {
        let index = self.index_of(id)?;
        Some((index, self.shapes.remove(index)))
    }

    /// Removes every polygon.
    pub fn clear(&mut self) -> Vec<Polygon> {
        std::mem::take(&mut self.shapes)
    }

    /// Polygons in draw order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Polygon> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Polygon> {
        self.shapes.iter_mut()
    }

    /// Ids in draw order (bottom first).
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = PolygonId> + '_ {
        self.shapes.iter().map(|p| p.id())
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
