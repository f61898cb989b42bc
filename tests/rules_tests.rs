//! Rule engine tests

use tui_tictactoe::core::{is_won, rules, status, winning_line, Board, WIN_LINES};
use tui_tictactoe::types::CellValue::{Empty as E, PlayerO as O, PlayerX as X};
use tui_tictactoe::types::{GameStatus, Player};

fn board_with(line: &[tui_tictactoe::types::CellPos; 3], player: Player) -> Board {
    let mut board = Board::new();
    for p in line {
        assert!(board.place(p.row, p.col, player));
    }
    board
}

#[test]
fn every_line_wins_for_both_players() {
    for line in WIN_LINES.iter() {
        for player in [Player::X, Player::O] {
            let board = board_with(line, player);
            assert!(is_won(&board, player), "{player} should win on {line:?}");
            assert!(!is_won(&board, player.other()));
            assert_eq!(status(&board), GameStatus::WonBy(player));
            assert_eq!(winning_line(&board), Some((player, *line)));
        }
    }
}

#[test]
fn no_line_is_won_by_a_mixed_triple() {
    for line in WIN_LINES.iter() {
        let mut board = Board::new();
        board.place(line[0].row, line[0].col, Player::X);
        board.place(line[1].row, line[1].col, Player::O);
        board.place(line[2].row, line[2].col, Player::X);
        assert!(!is_won(&board, Player::X));
        assert!(!is_won(&board, Player::O));
    }
}

#[test]
fn classify_empty_board() {
    assert_eq!(status(&Board::new()), GameStatus::InProgress);
}

#[test]
fn classify_draw() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(status(&board), GameStatus::Draw);
    assert_eq!(winning_line(&board), None);
}

#[test]
fn classify_in_progress_with_pieces() {
    let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
    assert_eq!(status(&board), GameStatus::InProgress);
}

#[test]
fn winner_on_full_board_beats_draw() {
    let board = Board::from_rows([[O, X, X], [X, O, O], [X, X, O]]);
    assert!(board.is_full());
    assert_eq!(status(&board), GameStatus::WonBy(Player::O));
}

#[test]
fn line_lookup_returns_table_order() {
    // X owns both row 0 and column 0; the row comes first in the table.
    let board = Board::from_rows([[X, X, X], [X, O, O], [X, O, O]]);
    assert_eq!(rules::line_won_by(&board, Player::X), Some(WIN_LINES[0]));
}

#[test]
fn pattern_xoxoxooxo_is_a_draw() {
    // Row-major X,O,X,O,X,O,O,X,O.
    let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
    assert!(!is_won(&board, Player::X));
    assert!(!is_won(&board, Player::O));
    assert_eq!(status(&board), GameStatus::Draw);
}
