//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping: given a
//! terminal click, [`GameView::hit_test`] finds the board cell under it using
//! the same layout the renderer drew.
//!
//! Layout (centered in the viewport):
//!
//! ```text
//!        Tic-Tac Toe          <- title
//!
//!   ┌─────────┬─────────┬──   <- frame, 3x3 cells separated by grid lines
//!   │         │         │
//!   ├─────────┼─────────┼──
//!   ...
//!   └─────────┴─────────┴──
//!
//!     It is X's turn.         <- status message
//!   click: move  R: restart   <- hint
//! ```

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Canvas, CellPos, CellValue, BOARD_SIZE};

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

/// Where each part of the screen lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the board frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub title_y: u16,
    pub status_y: u16,
    pub hint_y: u16,
}

impl BoardLayout {
    /// The clickable canvas: everything inside the outer border.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(
            self.frame_w.saturating_sub(2) as u32,
            self.frame_h.saturating_sub(2) as u32,
        )
    }

    pub fn canvas_origin(&self) -> (u16, u16) {
        (self.frame_x + 1, self.frame_y + 1)
    }
}

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
const GRID: CellStyle = CellStyle::fg(Rgb::new(170, 170, 180)).on(BOARD_BG);
const X_FG: Rgb = Rgb::new(225, 60, 60);
const O_FG: Rgb = Rgb::new(70, 120, 235);
const WIN_BG: Rgb = Rgb::new(70, 62, 20);
const TITLE: CellStyle = CellStyle::fg(Rgb::new(235, 235, 235)).bold();
const STATUS: CellStyle = CellStyle::fg(Rgb::new(210, 210, 210));
const STATUS_OVER: CellStyle = CellStyle::fg(Rgb::new(250, 210, 90)).bold();
const HINT: CellStyle = CellStyle::fg(Rgb::new(130, 130, 140)).dim();

/// Rows used above and below the frame (title, gap / gap, status, hint).
const ROWS_ABOVE: u16 = 2;
const ROWS_BELOW: u16 = 3;

/// A lightweight terminal renderer for the Tic-Tac-Toe board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

pub const DEFAULT_CELL_W: u16 = 11;
pub const DEFAULT_CELL_H: u16 = 5;
pub const MIN_CELL_W: u16 = 3;
pub const MIN_CELL_H: u16 = 3;
/// Largest cell size; keeps the frame well inside `u16` coordinates.
pub const MAX_CELL_W: u16 = 64;
pub const MAX_CELL_H: u16 = 32;

impl Default for GameView {
    fn default() -> Self {
        // ~2:1 columns to rows keeps cells roughly square on typical fonts.
        Self::new(DEFAULT_CELL_W, DEFAULT_CELL_H)
    }
}

impl GameView {
    /// Cell sizes are clamped to `MIN_CELL_*..=MAX_CELL_*`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_W, MAX_CELL_W),
            cell_h: cell_h.clamp(MIN_CELL_H, MAX_CELL_H),
        }
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let n = BOARD_SIZE as u16;
        let frame_w = n * self.cell_w + n + 1;
        let frame_h = n * self.cell_h + n + 1;
        let total_h = ROWS_ABOVE + frame_h + ROWS_BELOW;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = top + ROWS_ABOVE;
        let below = frame_y + frame_h;

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            title_y: top,
            status_y: below + 1,
            hint_y: below + 2,
        }
    }

    /// Map a terminal click to the board cell under it.
    ///
    /// Clicks on the outer border or outside the frame map to `None`; clicks on
    /// an inner grid line belong to a neighbouring cell.
    pub fn hit_test(&self, viewport: Viewport, column: u16, row: u16) -> Option<CellPos> {
        let layout = self.layout(viewport);
        let (ox, oy) = layout.canvas_origin();
        let x = column.checked_sub(ox)?;
        let y = row.checked_sub(oy)?;
        layout.canvas().cell_at(x as u32, y as u32)
    }

    /// Render into an existing framebuffer (no allocation once sized).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);

        fb.put_str_centered(
            layout.frame_x,
            layout.frame_w,
            layout.title_y,
            "Tic-Tac Toe",
            TITLE,
        );

        fb.fill_rect(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            CellStyle::default().on(BOARD_BG),
        );
        self.draw_grid(fb, &layout);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let winning = snap.is_winning_cell(row, col);
                self.draw_cell(fb, &layout, row, col, snap.board[row][col], winning);
            }
        }

        let status_style = if snap.game_over() {
            STATUS_OVER
        } else {
            STATUS
        };
        fb.put_str_centered(
            layout.frame_x,
            layout.frame_w,
            layout.status_y,
            snap.message,
            status_style,
        );
        self.draw_hint(fb, &layout, snap.round);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of cell (row, col)'s interior.
    fn cell_origin(&self, layout: &BoardLayout, row: usize, col: usize) -> (u16, u16) {
        let x = layout.frame_x + 1 + col as u16 * (self.cell_w + 1);
        let y = layout.frame_y + 1 + row as u16 * (self.cell_h + 1);
        (x, y)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &BoardLayout) {
        let (x0, y0) = (layout.frame_x, layout.frame_y);
        let (w, h) = (layout.frame_w, layout.frame_h);
        let n = BOARD_SIZE as u16;

        // Horizontal lines (top, separators, bottom).
        for i in 0..=n {
            let y = y0 + i * (self.cell_h + 1);
            fb.hline(x0, y, w, '─', GRID);
        }
        // Vertical lines.
        for i in 0..=n {
            let x = x0 + i * (self.cell_w + 1);
            fb.vline(x, y0, h, '│', GRID);
        }
        // Junctions.
        for i in 0..=n {
            for j in 0..=n {
                let x = x0 + j * (self.cell_w + 1);
                let y = y0 + i * (self.cell_h + 1);
                let ch = match (i, j) {
                    (0, 0) => '┌',
                    (0, j) if j == n => '┐',
                    (i, 0) if i == n => '└',
                    (i, j) if i == n && j == n => '┘',
                    (0, _) => '┬',
                    (i, _) if i == n => '┴',
                    (_, 0) => '├',
                    (_, j) if j == n => '┤',
                    _ => '┼',
                };
                fb.put_char(x, y, ch, GRID);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: usize,
        col: usize,
        value: CellValue,
        winning: bool,
    ) {
        let (x, y) = self.cell_origin(layout, row, col);
        let bg = if winning { WIN_BG } else { BOARD_BG };
        if winning {
            let fill = CellStyle::default().on(bg);
            fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', fill);
        }

        match value {
            CellValue::Empty => {}
            CellValue::PlayerX => {
                let style = CellStyle::fg(X_FG).on(bg).bold();
                self.draw_cross(fb, x, y, style);
            }
            CellValue::PlayerO => {
                let style = CellStyle::fg(O_FG).on(bg).bold();
                self.draw_ring(fb, x, y, style);
            }
        }
    }

    /// Glyph area: the cell interior minus one column of padding per side.
    fn glyph_area(&self, x: u16, y: u16) -> (u16, u16, u16, u16) {
        if self.cell_w >= 5 {
            (x + 1, y, self.cell_w - 2, self.cell_h)
        } else {
            (x, y, self.cell_w, self.cell_h)
        }
    }

    fn draw_cross(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let (gx, gy, gw, gh) = self.glyph_area(x, y);
        for r in 0..gh {
            let d = r * (gw - 1) / (gh - 1);
            let (a, b) = (d, gw - 1 - d);
            if a == b {
                fb.put_char(gx + a, gy + r, '╳', style);
            } else {
                fb.put_char(gx + a, gy + r, '╲', style);
                fb.put_char(gx + b, gy + r, '╱', style);
            }
        }
    }

    fn draw_ring(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        let (gx, gy, gw, gh) = self.glyph_area(x, y);
        let (right, bottom) = (gx + gw - 1, gy + gh - 1);
        fb.hline(gx + 1, gy, gw - 2, '─', style);
        fb.hline(gx + 1, bottom, gw - 2, '─', style);
        fb.vline(gx, gy + 1, gh - 2, '│', style);
        fb.vline(right, gy + 1, gh - 2, '│', style);
        fb.put_char(gx, gy, '╭', style);
        fb.put_char(right, gy, '╮', style);
        fb.put_char(gx, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
    }

    fn draw_hint(&self, fb: &mut FrameBuffer, layout: &BoardLayout, round: u32) {
        const HINT_TEXT: &str = "click: move  R: restart  Q: quit  round ";
        let shown = round.wrapping_add(1);
        let len = HINT_TEXT.chars().count() as u16 + digits(shown);
        let x = layout.frame_x + layout.frame_w.saturating_sub(len) / 2;
        fb.put_str(x, layout.hint_y, HINT_TEXT, HINT);
        fb.put_u32(x + HINT_TEXT.chars().count() as u16, layout.hint_y, shown, HINT);
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
