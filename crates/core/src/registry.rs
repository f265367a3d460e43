//! Shape registry - the collection of placed shapes
//!
//! Owns every placed [`Shape`] and the id counter. Ids start at 0 and are
//! never reused: deleting a shape does not rewind the counter, only
//! [`ShapeRegistry::remove_all`] does.
//!
//! Anchors are not chosen here. [`ShapeRegistry::create`] hands out an
//! unanchored [`NewShape`]; the placement engine decides where it goes.

use crate::types::{Coord, Pattern, ShapeId};

/// A placed shape: id, pattern and the grid coordinate of its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub id: ShapeId,
    pub pattern: Pattern,
    pub anchor: Coord,
}

impl Shape {
    /// Absolute grid cells covered by the shape, with their glyphs
    pub fn footprint(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.footprint_at(self.anchor)
    }

    /// Cells the shape would cover if anchored at `anchor`
    pub fn footprint_at(&self, anchor: Coord) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.pattern
            .filled_cells()
            .map(move |(i, j, ch)| (anchor.offset(i as i32, j as i32), ch))
    }

    /// Glyph drawn at an absolute grid cell, if the shape covers it
    pub fn glyph_at(&self, at: Coord) -> Option<char> {
        let local = at.minus(self.anchor);
        if local.row < 0 || local.col < 0 {
            return None;
        }
        self.pattern.glyph_at(local.row as usize, local.col as usize)
    }
}

/// A freshly created shape that has an id but no position yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShape {
    id: ShapeId,
    pattern: Pattern,
}

impl NewShape {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Fix the shape at an anchor chosen by the placement engine
    pub fn anchored_at(self, anchor: Coord) -> Shape {
        Shape {
            id: self.id,
            pattern: self.pattern,
            anchor,
        }
    }
}

/// Placed shapes in creation order, plus the next id to hand out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
    next_id: ShapeId,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next sequential id to a pattern.
    ///
    /// Returns `None` once the id space is used up; ids are never wrapped.
    pub fn create(&mut self, pattern: Pattern) -> Option<NewShape> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(NewShape { id, pattern })
    }

    pub fn add(&mut self, shape: Shape) {
        debug_assert!(self.find(shape.id).is_none(), "duplicate shape id {}", shape.id);
        self.shapes.push(shape);
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let idx = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(idx))
    }

    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn next_id(&self) -> ShapeId {
        self.next_id
    }

    /// Drop every shape and rewind the id counter to 0
    pub fn remove_all(&mut self) {
        self.shapes.clear();
        self.next_id = 0;
    }

    /// Replace the whole registry (used when loading a document)
    pub fn restore(&mut self, shapes: Vec<Shape>, next_id: ShapeId) {
        self.shapes = shapes;
        self.next_id = next_id;
    }
}
