//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a fixed 3x3 grid:
//!
//! - **Rows**: indexed 0-2 (top to bottom)
//! - **Columns**: indexed 0-2 (left to right)
//!
//! # Canvas Mapping
//!
//! Pointer clicks arrive as pixel coordinates on a `width x height` canvas
//! (600x600 by default). [`Canvas::cell_at`] maps them onto the grid:
//!
//! | Axis | Formula |
//! |------|---------|
//! | row | `floor(y / (height / 3))` |
//! | col | `floor(x / (width / 3))` |
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Canvas, CellPos, CellValue, Player};
//!
//! let player = Player::X;
//! assert_eq!(player.other(), Player::O);
//! assert_eq!(CellValue::from(player), CellValue::PlayerX);
//!
//! let canvas = Canvas::default();
//! assert_eq!(canvas.cell_at(450, 10), CellPos::new(0, 2));
//! ```

use std::fmt;

/// Board edge length in cells.
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 600;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// One of the two players. X always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one.
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::X.other(), Player::O);
    /// assert_eq!(Player::O.other(), Player::X);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    #[default]
    Empty,
    PlayerX,
    PlayerO,
}

impl CellValue {
    /// The owning player, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            CellValue::Empty => None,
            CellValue::PlayerX => Some(Player::X),
            CellValue::PlayerO => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }
}

impl From<Player> for CellValue {
    fn from(player: Player) -> Self {
        match player {
            Player::X => CellValue::PlayerX,
            Player::O => CellValue::PlayerO,
        }
    }
}

/// Outcome of evaluating a board.
///
/// Always derived from the board contents, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    WonBy(Player),
    Draw,
}

impl GameStatus {
    /// `true` for `WonBy(_)` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A validated (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    /// Build a position, returning `None` if either index is outside `0..3`.
    ///
    /// ```
    /// use tui_tictactoe_types::CellPos;
    ///
    /// assert!(CellPos::new(2, 2).is_some());
    /// assert!(CellPos::new(3, 0).is_none());
    /// ```
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Self { row, col })
    }

    /// Row-major index into a flat 9-cell array.
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Pixel canvas the board is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a canvas-relative point to the cell under it.
    ///
    /// Uses integer arithmetic equivalent to `floor(y / (height / 3))`, so
    /// canvases whose sides are not multiples of 3 still split evenly and
    /// the last pixel row/column belongs to the last cell. Points outside the
    /// canvas (or a degenerate zero-sized canvas) map to `None`.
    ///
    /// ```
    /// use tui_tictactoe_types::{Canvas, CellPos};
    ///
    /// let canvas = Canvas::new(600, 600);
    /// assert_eq!(canvas.cell_at(0, 0), CellPos::new(0, 0));
    /// assert_eq!(canvas.cell_at(199, 200), CellPos::new(1, 0));
    /// assert_eq!(canvas.cell_at(599, 599), CellPos::new(2, 2));
    /// assert_eq!(canvas.cell_at(600, 0), None);
    /// ```
    pub fn cell_at(&self, x: u32, y: u32) -> Option<CellPos> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let n = BOARD_SIZE as u64;
        let row = (y as u64 * n) / self.height as u64;
        let col = (x as u64 * n) / self.width as u64;
        CellPos::new(row as usize, col as usize)
    }
}

/// Actions that can be applied to a game session.
///
/// Produced by the input layer (mouse hit-test or key press) and consumed by
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current player's token at the given cell.
    Move { row: usize, col: usize },
    /// Start a new round (only honoured once the current round is over).
    Restart,
}

impl From<CellPos> for GameAction {
    fn from(pos: CellPos) -> Self {
        GameAction::Move {
            row: pos.row,
            col: pos.col,
        }
    }
}
