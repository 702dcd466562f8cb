//! Start Position
//!
//! Tests that a new game set holds the standard 32 pieces on their starting squares.

use chess_set_core::coretypes::{Color::*, PieceKind::*, NUM_FILES};
use chess_set_core::*;

#[test]
fn thirty_two_pieces_sixteen_per_color() {
    let set = GameSet::new();
    assert_eq!(set.pieces().len(), 32);
    assert_eq!(set.pieces_of(White).count(), 16);
    assert_eq!(set.pieces_of(Black).count(), 16);
    assert!(set.pieces().iter().all(|piece| piece.position().is_some()));
}

#[test]
fn pawn_ranks() {
    let set = GameSet::new();
    for file in 0..NUM_FILES {
        let white = set.piece_at(Coord::new(file, 1)).unwrap();
        let black = set.piece_at(Coord::new(file, 6)).unwrap();
        assert_eq!((*white.color(), *white.piece_kind()), (White, Pawn));
        assert_eq!((*black.color(), *black.piece_kind()), (Black, Pawn));
    }
}

#[test]
fn kings() {
    let set = GameSet::new();
    let white_king = set.piece_at(Coord::new(4, 0)).unwrap();
    let black_king = set.piece_at(Coord::new(4, 7)).unwrap();
    assert_eq!(white_king.to_string(), "White King");
    assert_eq!(black_king.to_string(), "Black King");
}

#[test]
fn back_ranks_mirror() {
    let set = GameSet::new();
    for (file, kind) in (0..NUM_FILES).zip(PieceKind::BACK_RANK) {
        let white = set.piece_at(Coord::new(file, 0)).unwrap();
        let black = set.piece_at(Coord::new(file, 7)).unwrap();
        assert_eq!(*white.piece_kind(), kind);
        assert_eq!(*black.piece_kind(), kind);
        assert_eq!(*white.color(), White);
        assert_eq!(*black.color(), Black);
    }
}

#[test]
fn middle_ranks_empty() {
    let set = GameSet::new();
    let empty = Coord::iter().filter(|coord| (2..6).contains(&coord.rank()));
    for coord in empty {
        assert_eq!(set.piece_at(coord), None, "{coord}");
    }
}

#[test]
fn every_piece_on_distinct_square() {
    let set = GameSet::new();
    let mut squares: Vec<Coord> = set.pieces().iter().filter_map(Piece::position).collect();
    squares.sort();
    squares.dedup();
    assert_eq!(squares.len(), 32);
}
