use super::*;
use crate::notation::parse_move;

fn mv(text: &str) -> Move {
    parse_move(text).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.piece_at(3 * 8 + 3), Some(Side::Light));
    assert_eq!(b.piece_at(3 * 8 + 4), Some(Side::Dark));
    assert_eq!(b.piece_at(4 * 8 + 3), Some(Side::Dark));
    assert_eq!(b.piece_at(4 * 8 + 4), Some(Side::Light));
    assert_eq!(b.counts(), DiscCounts { dark: 2, light: 2 });
}

#[test]
fn test_opening_legal_moves() {
    let b = Board::startpos();
    let moves = b.legal_moves(Side::Dark);
    let expected: Vec<Move> = ["d3", "c4", "f5", "e6"].iter().map(|t| mv(t)).collect();
    // Scan order is row-major, which is also the order listed here.
    assert_eq!(moves, expected);

    let light = b.legal_moves(Side::Light);
    assert_eq!(light.len(), 4);
}

#[test]
fn test_apply_d3_flips_one_disc() {
    let mut b = Board::startpos();
    assert!(b.apply_move(mv("d3"), Side::Dark));
    assert_eq!(b.counts(), DiscCounts { dark: 4, light: 1 });
    assert_eq!(b.piece_at(3 * 8 + 3), Some(Side::Dark));
    assert!(!b.legal_moves(Side::Dark).contains(&mv("d3")));
}

#[test]
fn test_illegal_move_leaves_board_unchanged() {
    let mut b = Board::startpos();
    let before = b.clone();

    // Occupied square.
    assert!(!b.apply_move(mv("d4"), Side::Dark));
    assert_eq!(b, before);

    // Empty square with nothing to flip.
    assert!(!b.apply_move(mv("a1"), Side::Dark));
    assert_eq!(b, before);

    // Legal for Light, not for Dark.
    assert!(!b.apply_move(mv("c5"), Side::Dark));
    assert_eq!(b, before);

    // Off-board index.
    assert!(!b.apply_move(Move::Place(64), Side::Dark));
    assert_eq!(b, before);
}

#[test]
fn test_pass_is_noop() {
    let mut b = Board::startpos();
    let before = b.clone();
    assert!(b.apply_move(Move::Pass, Side::Dark));
    assert_eq!(b, before);
}

#[test]
fn test_flips_multiple_directions() {
    // Only runs closed by a dark disc flip.
    let mut b = Board::from_diagram(
        "........
         ...O.O..
         ...X..X.
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    // e1: the f2 run is closed by g3, the d2 run is open at c3.
    assert!(b.apply_move(mv("e1"), Side::Dark));
    assert_eq!(b.piece_at(13), Some(Side::Dark));
    assert_eq!(b.piece_at(11), Some(Side::Light));

    // d1 flips d2 toward d3.
    assert!(b.apply_move(mv("d1"), Side::Dark));
    assert_eq!(b.piece_at(11), Some(Side::Dark));
    assert_eq!(b.counts(), DiscCounts { dark: 6, light: 0 });
}

#[test]
fn test_terminal_when_nobody_can_move() {
    let full_dark = Board::from_diagram(&"XXXXXXXX/".repeat(8)).unwrap();
    assert!(full_dark.is_terminal());
    assert!(full_dark.legal_moves(Side::Light).is_empty());

    // Two isolated discs with no run to close: still terminal.
    let b = Board::from_diagram(
        "X.......
         ........
         ........
         ........
         ........
         ........
         ........
         .......O",
    )
    .unwrap();
    assert!(b.is_terminal());

    assert!(!Board::startpos().is_terminal());
}

#[test]
fn test_one_side_stuck_is_not_terminal() {
    // Dark cannot move, Light can capture at c1.
    let b = Board::from_diagram(
        "OX...... ........ ........ ........ ........ ........ ........ ........",
    )
    .unwrap();
    assert!(b.legal_moves(Side::Dark).is_empty());
    assert_eq!(b.legal_moves(Side::Light), vec![mv("c1")]);
    assert!(!b.is_terminal());
}

#[test]
fn test_matrix_export() {
    let m = Board::startpos().to_matrix();
    assert_eq!(m[3][3], -1);
    assert_eq!(m[3][4], 1);
    assert_eq!(m[4][3], 1);
    assert_eq!(m[4][4], -1);
    assert_eq!(m.iter().flatten().filter(|&&v| v == 0).count(), 60);
}

#[test]
fn test_replay_and_side_to_move() {
    let (b, side) = Board::replay(&["d3", "c3"]).unwrap();
    assert_eq!(side, Side::Dark);
    assert_eq!(b.counts(), DiscCounts { dark: 3, light: 3 });

    let (_, side) = Board::replay(&["d3", "pass"]).unwrap();
    assert_eq!(side, Side::Dark);
}

#[test]
fn test_replay_errors() {
    let err = Board::replay(&["d3", "d3"]).unwrap_err();
    assert!(matches!(err, ReplayError::Illegal { index: 1, side: Side::Light, .. }));

    let err = Board::replay(&["d3", "x"]).unwrap_err();
    assert!(matches!(err, ReplayError::Notation { index: 1, .. }));
}

#[test]
fn test_diagram_round_trip_and_errors() {
    let b = Board::startpos();
    let text = b.to_string();
    assert!(text.contains("4 . . . O X . . ."));

    assert_eq!(
        Board::from_diagram("XXXXXXXX"),
        Err(BoardError::RowCount(1))
    );
    assert!(matches!(
        Board::from_diagram(&"XXXXXXX?/".repeat(8)),
        Err(BoardError::Cell { row: 0, ch: '?' })
    ));
}

#[test]
fn test_off_board_squares() {
    let mut b = Board::startpos();
    assert_eq!(b.piece_at(64), None);
    assert_eq!(b.piece_at(u8::MAX), None);

    b.set_piece(64, Some(Side::Dark));
    assert_eq!(b, Board::startpos());

    assert!(!b.is_legal(64, Side::Dark));
    assert!(!b.apply_move(Move::Place(64), Side::Dark));
}
