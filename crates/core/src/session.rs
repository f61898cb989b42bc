//! Game session module - turn and round state machine
//!
//! The session owns a [`Board`] by value and asks [`crate::rules`] for the
//! outcome after every accepted move.
//!
//! ```text
//!   InProgress(X) --move--> InProgress(O) --move--> ... --+--> Won(p)
//!        ^                                                +--> Draw
//!        |                                                      |
//!        +------------------------- reset ----------------------+
//! ```
//!
//! Every rejected request (occupied cell, move after the round ended, reset
//! while the round is still running) is a silent no-op: nothing observable
//! changes. Methods return `bool` so callers can tell whether a redraw is
//! needed, nothing more.

use tracing::{debug, info};

use crate::board::Board;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{CellPos, GameAction, GameStatus, Player};

/// Turn/round state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress { turn: Player },
    Won { winner: Player },
    Draw,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::InProgress { .. })
    }
}

/// Message shown while `player` is to move.
pub fn turn_message(player: Player) -> &'static str {
    match player {
        Player::X => "It is X's turn.",
        Player::O => "It is O's turn.",
    }
}

/// Message shown after `player` completes a line.
pub fn win_message(player: Player) -> &'static str {
    match player {
        Player::X => "X won! The game is over. Press R to restart.",
        Player::O => "O won! The game is over. Press R to restart.",
    }
}

pub const DRAW_MESSAGE: &str = "Draw! The game is over. Press R to restart.";

/// A single local two-player game.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    state: SessionState,
    /// Player whose token went down last (or who moves next while in progress).
    turn: Player,
    message: &'static str,
    /// Monotonic round id (increments on every effective reset).
    round: u32,
    /// Accepted moves in the current round.
    move_count: u32,
}

impl GameSession {
    /// Create a new session: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: SessionState::InProgress { turn: Player::X },
            turn: Player::X,
            message: turn_message(Player::X),
            round: 0,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The turn indicator.
    ///
    /// While a round is running this is the player to move. Once the round
    /// ends it stays on the player who made the last move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn game_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Outcome derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Try to place the current player's token at (row, col).
    ///
    /// Returns true if the move was accepted.
    pub fn request_move(&mut self, row: usize, col: usize) -> bool {
        let SessionState::InProgress { turn } = self.state else {
            debug!(row, col, "move ignored: round is over");
            return false;
        };

        if !self.board.is_empty(row, col) {
            debug!(row, col, player = %turn, "move ignored: cell not available");
            return false;
        }

        if !self.board.place(row, col, turn) {
            return false;
        }
        self.move_count += 1;
        debug!(row, col, player = %turn, moves = self.move_count, "move accepted");

        match rules::status(&self.board) {
            GameStatus::WonBy(winner) if winner == turn => {
                self.state = SessionState::Won { winner: turn };
                self.message = win_message(turn);
                info!(winner = %turn, round = self.round, moves = self.move_count, "round won");
            }
            _ if self.board.is_full() => {
                self.state = SessionState::Draw;
                self.message = DRAW_MESSAGE;
                info!(round = self.round, "round drawn");
            }
            _ => {
                let next = turn.other();
                self.turn = next;
                self.state = SessionState::InProgress { turn: next };
                self.message = turn_message(next);
            }
        }

        true
    }

    pub fn request_move_at(&mut self, pos: CellPos) -> bool {
        self.request_move(pos.row, pos.col)
    }

    /// Start a new round, but only once the current one is over.
    ///
    /// Returns true if the board was reset.
    pub fn reset(&mut self) -> bool {
        if !self.state.is_terminal() {
            debug!("reset ignored: round still in progress");
            return false;
        }

        self.board.clear();
        self.state = SessionState::InProgress { turn: Player::X };
        self.turn = Player::X;
        self.message = turn_message(Player::X);
        self.move_count = 0;
        self.round = self.round.wrapping_add(1);
        info!(round = self.round, "new round");
        true
    }

    /// Apply an action from the input layer.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move { row, col } => self.request_move(row, col),
            GameAction::Restart => self.reset(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.turn = self.turn;
        out.status = self.status();
        out.winning_line = match self.state {
            SessionState::Won { winner } => rules::line_won_by(&self.board, winner),
            _ => None,
        };
        out.message = self.message;
        out.round = self.round;
        out.move_count = self.move_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
