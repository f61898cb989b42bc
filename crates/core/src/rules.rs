//! Rule engine - win and draw evaluation
//!
//! Pure functions of board state. The eight winning lines live in a static
//! table so every line is checked the same way: three distinct cells, all
//! owned by the same player.
//!
//! When both players somehow own a line (impossible under alternating play),
//! X is reported.

use crate::board::Board;
use crate::types::{CellPos, CellValue, GameStatus, Player};

const fn pos(row: usize, col: usize) -> CellPos {
    CellPos { row, col }
}

/// The eight lines: three rows, three columns, then the two diagonals.
pub const WIN_LINES: [[CellPos; 3]; 8] = [
    // Rows
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    // Columns
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    // Diagonals
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

fn owns_line(board: &Board, line: &[CellPos; 3], target: CellValue) -> bool {
    line.iter().all(|p| board.value_at(p.row, p.col) == target)
}

/// First line fully owned by `player`, in table order.
pub fn line_won_by(board: &Board, player: Player) -> Option<[CellPos; 3]> {
    let target = CellValue::from(player);
    WIN_LINES
        .iter()
        .find(|line| owns_line(board, line, target))
        .copied()
}

/// Check if `player` owns all three cells of at least one line
pub fn is_won(board: &Board, player: Player) -> bool {
    line_won_by(board, player).is_some()
}

/// Winner and the line that won, checking X before O.
pub fn winning_line(board: &Board) -> Option<(Player, [CellPos; 3])> {
    [Player::X, Player::O]
        .into_iter()
        .find_map(|p| line_won_by(board, p).map(|line| (p, line)))
}

/// Classify the board.
///
/// A winner takes precedence over a full board.
pub fn status(board: &Board) -> GameStatus {
    if is_won(board, Player::X) {
        GameStatus::WonBy(Player::X)
    } else if is_won(board, Player::O) {
        GameStatus::WonBy(Player::O)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue::{Empty as E, PlayerO as O, PlayerX as X};

    #[test]
    fn lines_use_three_distinct_cells() {
        for line in WIN_LINES {
            assert_ne!(line[0], line[1]);
            assert_ne!(line[1], line[2]);
            assert_ne!(line[0], line[2]);
        }
    }

    #[test]
    fn every_cell_is_on_some_line() {
        for row in 0..3 {
            for col in 0..3 {
                let p = pos(row, col);
                assert!(WIN_LINES.iter().any(|line| line.contains(&p)));
            }
        }
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert!(!is_won(&board, Player::X));
        assert!(!is_won(&board, Player::O));
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn winner_beats_full_board() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert_eq!(status(&board), GameStatus::WonBy(Player::X));
    }

    #[test]
    fn x_reported_when_both_own_a_line() {
        let board = Board::from_rows([[X, X, X], [O, O, O], [E, E, E]]);
        assert_eq!(status(&board), GameStatus::WonBy(Player::X));
        assert_eq!(
            winning_line(&board),
            Some((Player::X, [pos(0, 0), pos(0, 1), pos(0, 2)]))
        );
    }

    #[test]
    fn anti_diagonal_for_o() {
        let board = Board::from_rows([[X, X, O], [E, O, X], [O, E, E]]);
        assert_eq!(status(&board), GameStatus::WonBy(Player::O));
        assert_eq!(
            line_won_by(&board, Player::O),
            Some([pos(0, 2), pos(1, 1), pos(2, 0)])
        );
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        assert_eq!(status(&board), GameStatus::Draw);
    }
}
