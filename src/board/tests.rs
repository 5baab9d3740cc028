use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(3, 7);
    assert_eq!(pos.x, 3);
    assert_eq!(pos.y, 7);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);

    // x is the column, y the row
    assert_eq!(Pos::new(14, 0).to_index(), 14);
    assert_eq!(Pos::new(0, 14).to_index(), 210);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_checked_and_offset() {
    assert_eq!(Pos::checked(2, 3), Some(Pos::new(2, 3)));
    assert_eq!(Pos::checked(15, 3), None);
    assert_eq!(Pos::checked(2, -1), None);

    let origin = Pos::new(0, 0);
    assert_eq!(origin.offset(1, 1, 4), Some(Pos::new(4, 4)));
    assert_eq!(origin.offset(1, -1, 1), None);
    assert_eq!(Pos::new(14, 14).offset(1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(Board::new().size(), 15);
}

#[test]
fn test_board_place_and_remove() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    let pos = Pos::new(4, 9);
    board.place_stone(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(!board.is_empty(pos));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert!(board.is_board_empty());
}

#[test]
fn test_board_stones_iter() {
    let mut board = Board::new();
    board.place_stone(Pos::new(5, 1), Stone::Black);
    board.place_stone(Pos::new(0, 2), Stone::White);

    let stones: Vec<_> = board.stones().collect();
    assert_eq!(
        stones,
        vec![(Pos::new(5, 1), Stone::Black), (Pos::new(0, 2), Stone::White)]
    );
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        board.place_stone(Pos::from_index(idx), Stone::Black);
    }
    assert!(board.is_full());
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}
