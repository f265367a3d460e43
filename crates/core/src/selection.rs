//! Selection state machine.
//!
//! Two states: [`Selection::Idle`] and [`Selection::Active`]. The grab offset
//! only exists inside `Active`, so id and offset are always set and cleared
//! together.

use crate::types::{Coord, ShapeId};

/// Current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Active {
        id: ShapeId,
        /// Clicked cell relative to the shape's anchor
        offset: Coord,
    },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn active_id(&self) -> Option<ShapeId> {
        match self {
            Selection::Active { id, .. } => Some(*id),
            Selection::Idle => None,
        }
    }

    pub fn offset(&self) -> Option<Coord> {
        match self {
            Selection::Active { offset, .. } => Some(*offset),
            Selection::Idle => None,
        }
    }
}

/// What a click asks the editor to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A shape became active
    Select { id: ShapeId, offset: Coord },
    /// The active shape was clicked again
    Deselect { id: ShapeId },
    /// An empty cell was clicked while a shape was active
    AttemptMove { id: ShapeId, offset: Coord },
    /// Empty cell clicked with nothing selected
    None,
}

/// Tracks at most one active shape and its grab offset
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Selection {
        self.state
    }

    pub fn active(&self) -> Option<ShapeId> {
        self.state.active_id()
    }

    pub fn clear(&mut self) {
        self.state = Selection::Idle;
    }

    /// Feed a click at `at`.
    ///
    /// `hit` is the shape under the cell and its anchor, or `None` for an
    /// empty cell. A move attempt returns to Idle right away: the selection is
    /// dropped whether or not the move succeeds.
    pub fn press(&mut self, hit: Option<(ShapeId, Coord)>, at: Coord) -> Transition {
        match (self.state, hit) {
            (Selection::Active { id: active, .. }, Some((id, _))) if active == id => {
                self.state = Selection::Idle;
                Transition::Deselect { id }
            }
            (_, Some((id, anchor))) => {
                let offset = at.minus(anchor);
                self.state = Selection::Active { id, offset };
                Transition::Select { id, offset }
            }
            (Selection::Active { id, offset }, None) => {
                self.state = Selection::Idle;
                Transition::AttemptMove { id, offset }
            }
            (Selection::Idle, None) => Transition::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_shape_while_idle_records_offset() {
        let mut sel = SelectionController::new();
        let t = sel.press(Some((2, Coord::new(5, 5))), Coord::new(6, 7));
        assert_eq!(t, Transition::Select { id: 2, offset: Coord::new(1, 2) });
        assert_eq!(
            sel.state(),
            Selection::Active { id: 2, offset: Coord::new(1, 2) }
        );
    }

    #[test]
    fn clicking_same_shape_toggles_off() {
        let mut sel = SelectionController::new();
        sel.press(Some((2, Coord::ORIGIN)), Coord::ORIGIN);
        let t = sel.press(Some((2, Coord::ORIGIN)), Coord::new(0, 1));
        assert_eq!(t, Transition::Deselect { id: 2 });
        assert!(sel.state().is_idle());
    }

    #[test]
    fn clicking_other_shape_switches_directly() {
        let mut sel = SelectionController::new();
        sel.press(Some((1, Coord::ORIGIN)), Coord::ORIGIN);
        let t = sel.press(Some((3, Coord::new(4, 4))), Coord::new(4, 5));
        assert_eq!(t, Transition::Select { id: 3, offset: Coord::new(0, 1) });
        assert_eq!(sel.active(), Some(3));
    }

    #[test]
    fn empty_click_while_active_attempts_move_and_goes_idle() {
        let mut sel = SelectionController::new();
        sel.press(Some((1, Coord::ORIGIN)), Coord::new(1, 0));
        let t = sel.press(None, Coord::new(9, 9));
        assert_eq!(t, Transition::AttemptMove { id: 1, offset: Coord::new(1, 0) });
        assert!(sel.state().is_idle());
        assert_eq!(sel.state().offset(), None);
    }

    #[test]
    fn empty_click_while_idle_is_noop() {
        let mut sel = SelectionController::new();
        assert_eq!(sel.press(None, Coord::ORIGIN), Transition::None);
        assert!(sel.state().is_idle());
    }
}
