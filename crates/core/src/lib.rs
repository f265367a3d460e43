//! Core editor logic module - pure, deterministic, and testable
//!
//! This module contains the grid occupancy model, the shape registry, the
//! placement/collision engine, selection handling and the persistence codec.
//! It has **no dependencies** on terminals, files or async runtimes, making it:
//!
//! - **Deterministic**: the same sequence of operations always yields the same grid
//! - **Testable**: every operation is a plain method call on an owned state container
//! - **Portable**: the render adapter is a trait, so it runs headless or in a terminal
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy matrix mapping cells to shape ids
//! - [`registry`]: placed shapes and the monotonic id counter
//! - [`placement`]: collision tests, first-fit search and validate-then-commit moves
//! - [`selection`]: the Idle/Active click state machine with grab offsets
//! - [`render`]: the [`RenderSink`] trait the core calls into after each mutation
//! - [`codec`]: JSON document encoding and validated decoding
//! - [`editor`]: the [`Editor`] state container tying everything together
//!
//! # Example
//!
//! ```
//! use polygrid_core::{ClickOutcome, Editor};
//! use polygrid_types::{Coord, GridSize};
//!
//! let mut editor = Editor::headless(GridSize::default());
//! let first = editor.confirm_shape("aa\naa").unwrap();
//! let second = editor.confirm_shape("aa\naa").unwrap();
//! assert_eq!(editor.shape(second).unwrap().anchor, Coord::new(0, 2));
//!
//! // Grab the first shape by its bottom-right cell and drop it further right.
//! editor.click(1, 1).unwrap();
//! let outcome = editor.click(1, 5).unwrap();
//! assert_eq!(outcome, ClickOutcome::Moved { id: first, from: Coord::new(0, 0), to: Coord::new(0, 4) });
//! assert!(editor.selection().is_idle());
//! ```

pub mod codec;
pub mod editor;
pub mod error;
pub mod grid;
pub mod placement;
pub mod registry;
pub mod render;
pub mod selection;
pub mod snapshot;

pub use polygrid_types as types;

// Re-export commonly used types for convenience
pub use codec::{decode, encode, DocumentStyle};
pub use editor::{ClickOutcome, Editor};
pub use error::{CodecError, EditorError};
pub use grid::Grid;
pub use placement::{find_empty_space, is_space_empty};
pub use registry::{NewShape, Shape, ShapeRegistry};
pub use render::{NullSink, RecordingSink, RenderEvent, RenderSink};
pub use selection::{Selection, SelectionController, Transition};
pub use snapshot::EditorSnapshot;
