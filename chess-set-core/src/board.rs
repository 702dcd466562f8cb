//! Board occupancy and text diagram.
//!
//! The Board holds no pieces of its own. Occupancy is derived on demand by
//! scanning the piece collection it is given, in collection order.

use std::io::{self, Write};

use log::trace;

use crate::coretypes::{Coord, NUM_FILES, NUM_RANKS};
use crate::piece::Piece;

/// Classic 8x8 board. Squares are addressed by [`Coord`], a1 = (0, 0), h8 = (7, 7).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Board;

impl Board {
    pub const FILES: i8 = NUM_FILES;
    pub const RANKS: i8 = NUM_RANKS;

    const HEADER: &'static str = "  a b c d e f g h";
    const RANK_SEP: &'static str = "  ---------------";

    pub const fn new() -> Self {
        Board
    }

    /// Returns the index of the first piece in `pieces` standing on `coord`.
    ///
    /// If several pieces report the same square, the first one in collection
    /// order wins; nothing prevents such a state from being built.
    pub fn position_of(&self, pieces: &[Piece], coord: Coord) -> Option<usize> {
        let found = pieces.iter().position(|piece| piece.is_at(coord));
        trace!("occupancy {coord}: {found:?}");
        found
    }

    /// Returns the first piece in `pieces` standing on `coord`, if any.
    pub fn piece_at<'a>(&self, pieces: &'a [Piece], coord: Coord) -> Option<&'a Piece> {
        self.position_of(pieces, coord).map(|idx| &pieces[idx])
    }

    /// Returns the board diagram, one line per rank from rank 8 down to rank 1.
    ///
    /// ```text
    ///   a b c d e f g h
    ///   ---------------
    /// 8|r|k|b|q|k|b|k|r|
    /// ...
    /// 1|R|K|B|Q|K|B|K|R|
    ///   ---------------
    /// ```
    pub fn render(&self, pieces: &[Piece]) -> String {
        // 2 rules, 1 header and 8 ranks of 19 chars, each with a newline.
        let mut diagram = String::with_capacity(3 * 18 + 8 * 19);

        diagram.push_str(Self::HEADER);
        diagram.push('\n');
        diagram.push_str(Self::RANK_SEP);
        diagram.push('\n');
        for rank in (0..Self::RANKS).rev() {
            diagram.push_str(&(rank + 1).to_string());
            diagram.push('|');
            for file in 0..Self::FILES {
                diagram.push(match self.piece_at(pieces, Coord::new(file, rank)) {
                    Some(piece) => piece.symbol(),
                    None => '.',
                });
                diagram.push('|');
            }
            diagram.push('\n');
        }
        diagram.push_str(Self::RANK_SEP);
        diagram.push('\n');

        diagram
    }

    /// Writes the board diagram to `out`.
    pub fn draw<W: Write>(&self, pieces: &[Piece], out: &mut W) -> io::Result<()> {
        out.write_all(self.render(pieces).as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color::*, PieceKind::*};

    #[test]
    fn empty_collection_has_no_occupants() {
        let board = Board::new();
        assert!(Coord::iter().all(|coord| board.piece_at(&[], coord).is_none()));
    }

    #[test]
    fn lookup_finds_placed_piece() {
        let board = Board::new();
        let pieces = [
            Piece::placed(White, King, Coord::new(4, 0)),
            Piece::new(Black, Queen),
            Piece::placed(Black, King, Coord::new(4, 7)),
        ];
        assert_eq!(board.position_of(&pieces, Coord::new(4, 7)), Some(2));
        assert_eq!(board.piece_at(&pieces, Coord::new(4, 0)), Some(&pieces[0]));
        assert_eq!(board.piece_at(&pieces, Coord::new(3, 0)), None);
    }

    #[test]
    fn duplicate_occupancy_returns_first_in_order() {
        let board = Board::new();
        let square = Coord::new(3, 3);
        let pieces = [
            Piece::placed(White, Rook, square),
            Piece::placed(Black, Rook, square),
        ];
        assert_eq!(board.position_of(&pieces, square), Some(0));
    }

    #[test]
    fn render_single_piece() {
        let board = Board::new();
        let pieces = [Piece::placed(Black, Queen, Coord::new(0, 7))];
        let diagram = board.render(&pieces);
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "  ---------------");
        assert_eq!(lines[2], "8|q|.|.|.|.|.|.|.|");
        assert_eq!(lines[9], "1|.|.|.|.|.|.|.|.|");
        assert_eq!(lines[10], "  ---------------");
    }

    #[test]
    fn draw_writes_render() {
        let board = Board::new();
        let pieces = [Piece::placed(White, Pawn, Coord::new(4, 3))];
        let mut out: Vec<u8> = Vec::new();
        board.draw(&pieces, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), board.render(&pieces));
    }
}
