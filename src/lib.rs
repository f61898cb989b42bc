//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates under stable paths
//! (`tui_tictactoe::{core,input,term,types}`) and hosts the runtime
//! configuration shared by the binary.

pub mod config;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
