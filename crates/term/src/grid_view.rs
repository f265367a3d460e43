//! GridView: maps a [`GridCanvas`] plus editor status into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{GridCanvas, VisualCell};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Coord, ShapeId};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Warn,
    Error,
}

/// Everything the side panel shows besides the grid itself
#[derive(Debug, Clone, Default)]
pub struct PanelView<'a> {
    pub pattern: &'a str,
    pub shape_count: usize,
    pub next_id: ShapeId,
    pub selected: Option<(ShapeId, Coord)>,
    pub overlay_marks: usize,
    pub cursor: Option<Coord>,
    pub busy: bool,
    pub status: Option<(StatusLevel, &'a str)>,
}

/// A lightweight terminal renderer for the editor.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

const GRID_LEFT: u16 = 1;
const PANEL_GAP: u16 = 2;
const PANEL_MIN_W: u16 = 24;
const PATTERN_LINES: usize = 8;

const BG: Rgb = Rgb::new(30, 30, 40);
const OVERLAY_BG: Rgb = Rgb::new(40, 70, 110);
const ACTIVE_BG: Rgb = Rgb::new(150, 120, 30);

const KEY_HELP: [&str; 8] = [
    "^P place    ^T template",
    "^K clear    ^O clear overlay",
    "Del delete  click select/move",
    "arrows + ^G click at cursor",
    "^S save     ^L load (local)",
    "^E export   ^R import (file)",
    "Enter newline  Backspace",
    "Esc quit",
];

impl GridView {
    /// Frame size (grid plus border) in terminal cells
    fn frame_size(&self, canvas: &GridCanvas) -> (u16, u16) {
        let size = canvas.size();
        (
            size.width * self.cell_w + 2,
            size.height * self.cell_h + 2,
        )
    }

    /// Top-left corner of the grid frame.
    ///
    /// The frame is pinned to the top so mouse rows map to grid rows without
    /// depending on the terminal height.
    fn origin(&self) -> (u16, u16) {
        (GRID_LEFT, 0)
    }

    /// Grid cell under a terminal position, if any
    pub fn cell_at(&self, canvas: &GridCanvas, x: u16, y: u16) -> Option<Coord> {
        let (start_x, start_y) = self.origin();
        let px = x.checked_sub(start_x + 1)?;
        let py = y.checked_sub(start_y + 1)?;
        let at = Coord::new((py / self.cell_h) as i32, (px / self.cell_w) as i32);
        canvas.size().contains(at).then_some(at)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, canvas: &GridCanvas, panel: &PanelView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(GlyphStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(canvas);
        let (start_x, start_y) = self.origin();
        let border = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let size = canvas.size();
        for row in 0..size.height as i32 {
            for col in 0..size.width as i32 {
                let at = Coord::new(row, col);
                let cell = canvas.get(at).unwrap_or_default();
                let under_cursor = panel.cursor == Some(at);
                self.draw_cell(fb, start_x, start_y, at, cell, under_cursor);
            }
        }

        self.draw_side_panel(fb, panel, viewport, start_x + frame_w + PANEL_GAP, start_y);

        if let Some((level, text)) = panel.status {
            let y = (start_y + frame_h).min(viewport.height.saturating_sub(1));
            let fg = match level {
                StatusLevel::Info => Rgb::new(140, 220, 140),
                StatusLevel::Warn => Rgb::new(240, 200, 80),
                StatusLevel::Error => Rgb::new(240, 90, 90),
            };
            fb.put_str(start_x, y, text, GlyphStyle::new(fg, Rgb::new(0, 0, 0)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &GridCanvas, panel: &PanelView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, panel, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, at: Coord, cell: VisualCell, under_cursor: bool) {
        let bg = if cell.active {
            ACTIVE_BG
        } else if cell.overlay {
            OVERLAY_BG
        } else {
            BG
        };

        let (ch, mut style) = match cell.glyph {
            Some(ch) => (ch, GlyphStyle::new(glyph_color(ch), bg).bold()),
            None => ('·', GlyphStyle::new(Rgb::new(90, 90, 100), bg).dim()),
        };
        if under_cursor {
            std::mem::swap(&mut style.fg, &mut style.bg);
            style.dim = false;
        }

        let px = start_x + 1 + at.col as u16 * self.cell_w;
        let py = start_y + 1 + at.row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, panel: &PanelView<'_>, viewport: Viewport, panel_x: u16, start_y: u16) {
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = GlyphStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SHAPES", label);
        fb.put_u32(panel_x + 8, y, panel.shape_count as u32, value);
        fb.put_str(panel_x + 13, y, "NEXT", label);
        fb.put_u32(panel_x + 18, y, panel.next_id, value);
        y += 2;

        fb.put_str(panel_x, y, "SELECTED", label);
        y += 1;
        match panel.selected {
            Some((id, anchor)) => {
                let x = fb.put_str(panel_x, y, "#", value);
                let x = fb.put_u32(x, y, id, value);
                fb.put_str(x + 1, y, &format!("at {}", anchor), value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        fb.put_str(panel_x, y, "OVERLAY", label);
        fb.put_u32(panel_x + 9, y, panel.overlay_marks as u32, value);
        y += 1;
        if let Some(cursor) = panel.cursor {
            fb.put_str(panel_x, y, "CURSOR", label);
            fb.put_str(panel_x + 9, y, &cursor.to_string(), value);
        }
        y += 2;

        fb.put_str(panel_x, y, "PATTERN", label);
        if panel.busy {
            fb.put_str(panel_x + 9, y, "loading...", dim);
        }
        y += 1;
        let lines: Vec<&str> = panel.pattern.split('\n').collect();
        let skip = lines.len().saturating_sub(PATTERN_LINES);
        for (i, line) in lines.iter().skip(skip).enumerate() {
            let x = fb.put_str(panel_x, y, "> ", dim);
            let x = fb.put_str(x, y, line, value);
            if skip + i + 1 == lines.len() {
                fb.put_char(x, y, '_', dim);
            }
            y += 1;
        }
        y += 1;

        for help in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y += 1;
        }
    }
}

/// Stable per-letter color so equal glyphs look alike
fn glyph_color(ch: char) -> Rgb {
    const PALETTE: [Rgb; 7] = [
        Rgb::new(80, 220, 220),
        Rgb::new(240, 220, 80),
        Rgb::new(200, 120, 220),
        Rgb::new(100, 220, 120),
        Rgb::new(220, 80, 80),
        Rgb::new(80, 120, 220),
        Rgb::new(255, 165, 0),
    ];
    PALETTE[ch as usize % PALETTE.len()]
}
