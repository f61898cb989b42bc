//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s and click
//! coordinates. Pixel-to-cell translation is left to the view, which knows
//! where the board is drawn.

pub mod map;
pub mod mouse;

pub use tui_tictactoe_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{click_position, Click};
