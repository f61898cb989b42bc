//! Board tests

use tui_tictactoe::core::Board;
use tui_tictactoe::types::{CellValue, Player, BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert!(board.is_empty(row, col), "({row}, {col}) should be empty");
            assert_eq!(board.value_at(row, col), CellValue::Empty);
        }
    }
    assert!(!board.is_full());
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_board_place_and_read() {
    let mut board = Board::new();

    assert!(board.place(1, 2, Player::X));
    assert_eq!(board.value_at(1, 2), CellValue::PlayerX);
    assert!(!board.is_empty(1, 2));

    assert!(board.place(2, 0, Player::O));
    assert_eq!(board.value_at(2, 0), CellValue::PlayerO);

    // Untouched neighbours stay empty.
    assert!(board.is_empty(1, 1));
    assert!(board.is_empty(0, 2));
}

#[test]
fn test_board_place_on_occupied_is_refused() {
    let mut board = Board::new();
    assert!(board.place(0, 0, Player::X));
    assert!(!board.place(0, 0, Player::O));
    assert_eq!(board.value_at(0, 0), CellValue::PlayerX);
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.place(3, 0, Player::X));
    assert!(!board.place(0, 3, Player::X));
    assert!(!board.is_empty(3, 3));
    assert_eq!(board.value_at(5, 1), CellValue::Empty);
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_is_full_needs_all_nine() {
    let mut board = Board::new();
    let mut player = Player::X;

    for i in 0..9 {
        assert!(!board.is_full(), "full after only {i} cells");
        assert!(board.place(i / 3, i % 3, player));
        player = player.other();
    }
    assert!(board.is_full());
    assert_eq!(board.occupied(), 9);
}

#[test]
fn test_board_is_full_checks_every_cell() {
    // Last empty cell in the middle, not at the end of the scan.
    let mut board = Board::new();
    for i in (0..9).filter(|&i| i != 4) {
        board.place(i / 3, i % 3, Player::O);
    }
    assert!(!board.is_full());
    board.place(1, 1, Player::X);
    assert!(board.is_full());
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.place(0, 0, Player::X);
    board.place(2, 2, Player::O);

    board.clear();

    assert_eq!(board, Board::new());
    assert!(board.cells().iter().all(|c| c.is_empty()));
}
