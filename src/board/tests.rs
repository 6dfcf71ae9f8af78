use super::*;
use crate::config::{GameConfig, WIN_SCORE};
use crate::error::InvalidMove;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(10, 10);
    assert_eq!(pos.to_index(20), 210);

    let pos2 = Pos::from_index(210, 20);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 20));
    assert!(Pos::is_valid(19, 19, 20));
    assert!(!Pos::is_valid(-1, 0, 20));
    assert!(!Pos::is_valid(0, -1, 20));
    assert!(!Pos::is_valid(20, 0, 20));
    assert!(!Pos::is_valid(0, 20, 20));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 4, 20), Ok(Pos::new(3, 4)));
    assert_eq!(
        Pos::try_new(3, 20, 20),
        Err(InvalidMove::OutOfBounds {
            row: 3,
            col: 20,
            size: 20
        })
    );
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 19);
    assert_eq!(pos.offset(1, -1, 2, 20), Some(Pos::new(2, 17)));
    assert_eq!(pos.offset(0, 1, 1, 20), None);
    assert_eq!(pos.offset(-1, 0, 1, 20), None);
}

#[test]
fn test_new_board_all_empty() {
    let board = Board::default();
    assert_eq!(board.size(), 20);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.stones(Stone::Empty).count(), 400);
    assert!(!board.is_win(Stone::Black));
    assert!(!board.is_win(Stone::White));
}

#[test]
fn test_update_moves_cell_out_of_empty_set() {
    let mut board = Board::default();
    let pos = Pos::new(7, 8);
    board.update(pos, Stone::White).unwrap();

    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert!(!board.stones(Stone::Empty).contains(pos));
    assert_eq!(board.last_placed(Stone::White), Some(pos));
    assert_eq!(board.last_placed(Stone::Black), None);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_update_occupied_cell_fails() {
    let mut board = Board::default();
    let pos = Pos::new(7, 8);
    board.update(pos, Stone::White).unwrap();
    let before = board.clone();

    let err = board.update(pos, Stone::Black).unwrap_err();
    assert_eq!(
        err,
        InvalidMove::Occupied {
            pos,
            occupant: Stone::White
        }
    );
    assert_eq!(board, before);
}

#[test]
fn test_update_out_of_bounds_fails() {
    let mut board = Board::default();
    let err = board.update(Pos::new(20, 3), Stone::Black).unwrap_err();
    assert!(matches!(err, InvalidMove::OutOfBounds { row: 20, col: 3, .. }));
}

#[test]
fn test_update_empty_stone_fails() {
    let mut board = Board::default();
    assert_eq!(
        board.update(Pos::new(1, 1), Stone::Empty),
        Err(InvalidMove::EmptyStone)
    );
    assert!(board.is_empty(Pos::new(1, 1)));
}

#[test]
fn test_rollback_restores_occupancy() {
    let mut board = Board::default();
    let before = board.clone();
    let pos = Pos::new(3, 3);

    board.update(pos, Stone::Black).unwrap();
    board.rollback(pos, Stone::Black).unwrap();

    assert_eq!(board, before);
}

#[test]
fn test_rollback_wrong_color_fails() {
    let mut board = Board::default();
    let pos = Pos::new(3, 3);
    board.update(pos, Stone::Black).unwrap();

    assert_eq!(
        board.rollback(pos, Stone::White),
        Err(InvalidMove::NotOwned {
            pos,
            color: Stone::White
        })
    );
    assert_eq!(board.get(pos), Stone::Black);
}

#[test]
fn test_five_in_row_wins() {
    let mut board = Board::default();
    for col in 5..10 {
        board.update(Pos::new(5, col), Stone::White).unwrap();
    }
    assert!(board.is_win(Stone::White));
    assert!(!board.is_win(Stone::Black));
}

#[test]
fn test_blocked_four_does_not_win() {
    let mut board = Board::default();
    board.update(Pos::new(9, 4), Stone::Black).unwrap();
    for row in 5..9 {
        board.update(Pos::new(row, 4), Stone::White).unwrap();
    }
    assert!(!board.is_win(Stone::White));
}

#[test]
fn test_vertical_win_at_board_edge() {
    let mut board = Board::default();
    for row in (15..20).rev() {
        board.update(Pos::new(row, 0), Stone::Black).unwrap();
    }
    assert!(board.is_win(Stone::Black));
}

#[test]
fn test_small_board_config() {
    let config = GameConfig::new(5, 5, WIN_SCORE).unwrap();
    let mut board = Board::new(config);
    for i in 0..5u8 {
        board.update(Pos::new(i, 4 - i), Stone::White).unwrap();
    }
    assert!(board.is_win(Stone::White));
}

#[test]
fn test_full_board() {
    let config = GameConfig::new(5, 5, WIN_SCORE).unwrap();
    let mut board = Board::new(config);
    for idx in 0..25 {
        let color = if idx % 2 == 0 { Stone::Black } else { Stone::White };
        board.update(Pos::from_index(idx, 5), color).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count(), 25);
}

#[test]
fn test_renderable_grid_and_display() {
    let config = GameConfig::new(5, 5, WIN_SCORE).unwrap();
    let mut board = Board::new(config);
    board.update(Pos::new(0, 0), Stone::White).unwrap();
    board.update(Pos::new(4, 4), Stone::Black).unwrap();

    let grid = board.renderable_grid();
    assert_eq!(grid.len(), 5);
    assert_eq!(grid[0][0], Stone::White);
    assert_eq!(grid[4][4], Stone::Black);
    assert_eq!(grid[2][2], Stone::Empty);

    let text = board.to_string();
    assert_eq!(text.lines().next(), Some("X . . . ."));
    assert_eq!(text.lines().last(), Some(". . . . O"));
}
