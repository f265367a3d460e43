//! Terminal rendering for the grid editor.
//!
//! The editor core talks to a [`RenderSink`](crate::core::RenderSink); this crate
//! provides the terminal one. [`GridCanvas`] keeps the per-cell visual state
//! current as the editor reports changes, [`GridView`] lays that state out into a
//! [`FrameBuffer`] together with a side panel, and [`TerminalRenderer`] flushes
//! frames to the terminal with diffing.
//!
//! There are no ratatui widgets here; every cell of the frame is placed explicitly,
//! two terminal columns per grid cell.

pub mod canvas;
pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use polygrid_core as core;
pub use polygrid_types as types;

pub use canvas::{GridCanvas, VisualCell};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use grid_view::{GridView, PanelView, StatusLevel, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
