//! Game set structure.

use std::fmt::{self, Display};

use log::{debug, trace};

use crate::board::Board;
use crate::coretypes::{Color, Coord, PieceKind, NUM_FILES};
use crate::error::{self, ErrorKind};
use crate::notation::from_notation;
use crate::piece::Piece;
use crate::piecelist::PieceList;

/// GameSet owns one board and the full collection of 32 pieces.
/// Pieces are created once in the standard starting layout and are only ever
/// repositioned afterwards, never added or removed.
///
/// Collection order is White then Black, back rank then pawns, a-file to h-file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameSet {
    board: Board,
    pieces: PieceList,
}

impl GameSet {
    /// Create a new set in the standard chess start position.
    pub fn new() -> Self {
        Self::start_position()
    }

    /// Create a new set in the standard chess start position.
    pub fn start_position() -> Self {
        let mut pieces = PieceList::new();

        for color in Color::iter() {
            for (file, piece_kind) in (0..NUM_FILES).zip(PieceKind::BACK_RANK) {
                let coord = Coord::new(file, color.back_rank());
                pieces.push(Piece::placed(color, piece_kind, coord));
            }
            for file in 0..NUM_FILES {
                let coord = Coord::new(file, color.pawn_rank());
                pieces.push(Piece::placed(color, PieceKind::Pawn, coord));
            }
        }
        debug_assert!(pieces.is_full());
        trace!("game set created with {} pieces", pieces.len());

        Self {
            board: Board::new(),
            pieces,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All pieces in collection order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Mutable access to the pieces. The slice can not grow or shrink, but
    /// positions can be overwritten freely with [`Piece::set_position`].
    pub fn pieces_mut(&mut self) -> &mut [Piece] {
        &mut self.pieces
    }

    /// Iterates the pieces of one color in collection order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.color == color)
    }

    /// Returns the first piece standing on `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.board.piece_at(&self.pieces, coord)
    }

    /// Returns the first piece standing on the square named by `notation`, if any.
    pub fn piece_at_notation(&self, notation: &str) -> error::Result<Option<&Piece>> {
        Ok(self.piece_at(from_notation(notation)?))
    }

    /// Moves the piece on `from` to `to` on behalf of `color`.
    ///
    /// Fails without mutation if either square is malformed, no piece stands
    /// on `from`, the piece there is not of `color`, or `to` is off the board.
    /// The destination is not checked for occupancy.
    pub fn try_move_piece(&mut self, color: Color, from: &str, to: &str) -> error::Result<()> {
        let result = self.apply_move(color, from, to);
        match result {
            Ok(()) => debug!("{color} moved {from} -> {to}"),
            Err(ref err) => debug!("{color} move {from} -> {to} rejected: {err}"),
        }
        result
    }

    /// Boolean form of [`GameSet::try_move_piece`]: true if the move was committed.
    pub fn move_piece(&mut self, color: Color, from: &str, to: &str) -> bool {
        self.try_move_piece(color, from, to).is_ok()
    }

    fn apply_move(&mut self, color: Color, from: &str, to: &str) -> error::Result<()> {
        let from_coord = from_notation(from)?;
        let to_coord = from_notation(to)?;

        let idx = self
            .board
            .position_of(&self.pieces, from_coord)
            .ok_or((ErrorKind::SquareUnoccupied, format!("no piece on {from}")))?;

        let piece = &mut self.pieces[idx];
        if piece.color != color {
            return Err((
                ErrorKind::WrongOwner,
                format!("{piece} on {from} does not belong to {color}"),
            )
                .into());
        }
        piece.move_to(to_coord)
    }

    /// Returns the board diagram for the current piece positions.
    pub fn render(&self) -> String {
        self.board.render(&self.pieces)
    }
}

/// Defaults to the standard chess start position.
impl Default for GameSet {
    fn default() -> Self {
        Self::start_position()
    }
}

impl Display for GameSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}
