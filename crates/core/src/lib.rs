//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the turn state machine.
//! It has **zero dependencies** on UI or I/O (only `tracing` for
//! diagnostics), making it:
//!
//! - **Deterministic**: the same sequence of requests always yields the same game
//! - **Testable**: every rule and transition runs headlessly
//! - **Portable**: can sit behind a terminal, GUI, or test harness
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid of cell values (place / query / clear)
//! - [`rules`]: win-line table and status classification
//! - [`session`]: turn alternation, terminal states, reset, status message
//! - [`snapshot`]: plain data handed to the presentation layer
//!
//! # Game Rules
//!
//! - X always opens a round; turns strictly alternate on accepted moves
//! - A move on an occupied cell, or after the round is over, is ignored
//! - Three in a row (row, column or diagonal) wins; a winner beats a full board
//! - A full board with no winner is a draw
//! - Reset only takes effect once the round is over
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameSession, SessionState};
//! use tui_tictactoe_types::{GameStatus, Player};
//!
//! let mut game = GameSession::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.request_move(row, col);
//! }
//!
//! assert_eq!(game.status(), GameStatus::WonBy(Player::X));
//! assert_eq!(game.state(), SessionState::Won { winner: Player::X });
//!
//! // The round is over: further moves are ignored until reset.
//! assert!(!game.request_move(2, 2));
//! assert!(game.reset());
//! assert_eq!(game.message(), "It is X's turn.");
//! ```

pub mod board;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use rules::{is_won, status, winning_line, WIN_LINES};
pub use session::{GameSession, SessionState};
pub use snapshot::GameSnapshot;
