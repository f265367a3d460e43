//! GridCanvas: the visual state of every grid cell.
//!
//! The canvas is the terminal side of the editor's [`RenderSink`]. It holds one
//! [`VisualCell`] per grid coordinate, allocated once at construction and
//! indexed directly by (row, col); the editor's notifications update it in
//! place and [`crate::GridView`] paints it.

use crate::core::{RenderSink, Shape};
use crate::types::{Coord, GridSize};

/// What a single grid cell looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualCell {
    /// Pattern glyph of the occupying shape
    pub glyph: Option<char>,
    /// Part of the selected shape
    pub active: bool,
    /// Marked by the template overlay
    pub overlay: bool,
}

#[derive(Debug, Clone)]
pub struct GridCanvas {
    size: GridSize,
    cells: Vec<VisualCell>,
}

impl GridCanvas {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![VisualCell::default(); size.area()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if !self.size.contains(at) {
            return None;
        }
        Some(at.row as usize * self.size.width as usize + at.col as usize)
    }

    pub fn get(&self, at: Coord) -> Option<VisualCell> {
        self.index(at).map(|i| self.cells[i])
    }

    fn cell_mut(&mut self, at: Coord) -> Option<&mut VisualCell> {
        let i = self.index(at)?;
        Some(&mut self.cells[i])
    }

    fn paint(&mut self, shape: &Shape) {
        for (at, ch) in shape.footprint() {
            if let Some(cell) = self.cell_mut(at) {
                cell.glyph = Some(ch);
            }
        }
    }

    fn erase_at(&mut self, shape: &Shape, anchor: Coord) {
        for (at, _) in shape.footprint_at(anchor) {
            if let Some(cell) = self.cell_mut(at) {
                cell.glyph = None;
                cell.active = false;
            }
        }
    }

    fn reset(&mut self) {
        self.cells.fill(VisualCell::default());
    }
}

impl RenderSink for GridCanvas {
    fn on_shape_placed(&mut self, shape: &Shape) {
        self.paint(shape);
    }

    fn on_shape_cleared(&mut self, shape: &Shape) {
        self.erase_at(shape, shape.anchor);
    }

    fn on_shape_moved(&mut self, shape: &Shape, from: Coord) {
        self.erase_at(shape, from);
        self.paint(shape);
    }

    fn on_overlay_set(&mut self, marks: &[Coord]) {
        for &at in marks {
            if let Some(cell) = self.cell_mut(at) {
                cell.overlay = true;
            }
        }
    }

    fn on_overlay_cleared(&mut self) {
        for cell in &mut self.cells {
            cell.overlay = false;
        }
    }

    fn on_full_redraw(&mut self, shapes: &[Shape], overlay: &[Coord]) {
        self.reset();
        for shape in shapes {
            self.paint(shape);
        }
        self.on_overlay_set(overlay);
    }

    fn on_selection_changed(&mut self, active: Option<&Shape>) {
        for cell in &mut self.cells {
            cell.active = false;
        }
        if let Some(shape) = active {
            for (at, _) in shape.footprint() {
                if let Some(cell) = self.cell_mut(at) {
                    cell.active = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pattern;

    fn shape(id: u32, text: &str, anchor: Coord) -> Shape {
        Shape {
            id,
            pattern: Pattern::parse(text).unwrap(),
            anchor,
        }
    }

    #[test]
    fn move_erases_old_cells_and_paints_new() {
        let mut canvas = GridCanvas::new(GridSize::new(5, 5));
        let mut s = shape(0, "ab", Coord::new(0, 0));
        canvas.on_shape_placed(&s);
        canvas.on_selection_changed(Some(&s));

        s.anchor = Coord::new(2, 1);
        canvas.on_shape_moved(&s, Coord::new(0, 0));
        canvas.on_selection_changed(None);

        assert_eq!(canvas.get(Coord::new(0, 0)), Some(VisualCell::default()));
        assert_eq!(canvas.get(Coord::new(2, 1)).unwrap().glyph, Some('A'));
        assert_eq!(canvas.get(Coord::new(2, 2)).unwrap().glyph, Some('B'));
        assert!(!canvas.get(Coord::new(2, 2)).unwrap().active);
    }

    #[test]
    fn overlay_is_independent_of_glyphs() {
        let mut canvas = GridCanvas::new(GridSize::new(3, 1));
        let s = shape(0, "a", Coord::ORIGIN);
        canvas.on_overlay_set(&[Coord::ORIGIN, Coord::new(0, 2)]);
        canvas.on_shape_placed(&s);
        canvas.on_shape_cleared(&s);
        assert!(canvas.get(Coord::ORIGIN).unwrap().overlay);
        canvas.on_overlay_cleared();
        assert!(!canvas.get(Coord::new(0, 2)).unwrap().overlay);
    }

    #[test]
    fn full_redraw_replaces_everything() {
        let mut canvas = GridCanvas::new(GridSize::new(3, 1));
        canvas.on_shape_placed(&shape(0, "aaa", Coord::ORIGIN));
        canvas.on_full_redraw(&[shape(4, "z", Coord::new(0, 1))], &[Coord::new(0, 2)]);
        assert_eq!(canvas.get(Coord::ORIGIN).unwrap().glyph, None);
        assert_eq!(canvas.get(Coord::new(0, 1)).unwrap().glyph, Some('Z'));
        assert!(canvas.get(Coord::new(0, 2)).unwrap().overlay);
    }
}
