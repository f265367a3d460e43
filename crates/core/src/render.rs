//! Render adapter interface.
//!
//! The editor calls into a [`RenderSink`] after each mutation. The sink turns
//! these notifications into visible updates; the core never reads visual state
//! back.

use crate::registry::Shape;
use crate::types::Coord;

/// Notifications sent by the editor to the rendering layer.
///
/// Every method defaults to a no-op so adapters only implement what they draw.
pub trait RenderSink {
    /// A new shape was stamped onto the grid
    fn on_shape_placed(&mut self, _shape: &Shape) {}

    /// A shape's footprint was removed from the grid
    fn on_shape_cleared(&mut self, _shape: &Shape) {}

    /// A shape moved; `shape.anchor` is the new position
    fn on_shape_moved(&mut self, _shape: &Shape, _from: Coord) {}

    /// Overlay marks were added
    fn on_overlay_set(&mut self, _marks: &[Coord]) {}

    /// Every overlay mark was removed
    fn on_overlay_cleared(&mut self) {}

    /// Everything changed; redraw from scratch
    fn on_full_redraw(&mut self, _shapes: &[Shape], _overlay: &[Coord]) {}

    /// The active shape changed (`None` when the selection was dropped)
    fn on_selection_changed(&mut self, _active: Option<&Shape>) {}
}

/// A sink that draws nothing (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {}

/// Owned copy of a render notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    ShapePlaced(Shape),
    ShapeCleared(Shape),
    ShapeMoved { shape: Shape, from: Coord },
    OverlaySet(Vec<Coord>),
    OverlayCleared,
    FullRedraw { shapes: Vec<Shape>, overlay: Vec<Coord> },
    SelectionChanged(Option<Shape>),
}

/// A sink that records every notification, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<RenderEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take recorded events, leaving the log empty
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }
}

impl RenderSink for RecordingSink {
    fn on_shape_placed(&mut self, shape: &Shape) {
        self.events.push(RenderEvent::ShapePlaced(shape.clone()));
    }

    fn on_shape_cleared(&mut self, shape: &Shape) {
        self.events.push(RenderEvent::ShapeCleared(shape.clone()));
    }

    fn on_shape_moved(&mut self, shape: &Shape, from: Coord) {
        self.events.push(RenderEvent::ShapeMoved {
            shape: shape.clone(),
            from,
        });
    }

    fn on_overlay_set(&mut self, marks: &[Coord]) {
        self.events.push(RenderEvent::OverlaySet(marks.to_vec()));
    }

    fn on_overlay_cleared(&mut self) {
        self.events.push(RenderEvent::OverlayCleared);
    }

    fn on_full_redraw(&mut self, shapes: &[Shape], overlay: &[Coord]) {
        self.events.push(RenderEvent::FullRedraw {
            shapes: shapes.to_vec(),
            overlay: overlay.to_vec(),
        });
    }

    fn on_selection_changed(&mut self, active: Option<&Shape>) {
        self.events.push(RenderEvent::SelectionChanged(active.cloned()));
    }
}
