use crate::types::{CellPos, CellValue, GameStatus, Player, BOARD_SIZE};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[CellValue; BOARD_SIZE]; BOARD_SIZE],
    pub turn: Player,
    pub status: GameStatus,
    pub winning_line: Option<[CellPos; 3]>,
    pub message: &'static str,
    pub round: u32,
    pub move_count: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[CellValue::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.turn = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.message = "";
        self.round = 0;
        self.move_count = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether `(row, col)` is part of the highlighted winning line.
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.iter().any(|p| p.row == row && p.col == col))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[CellValue::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            message: "",
            round: 0,
            move_count: 0,
        };
        s.clear();
        s
    }
}
