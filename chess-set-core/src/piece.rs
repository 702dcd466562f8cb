//! A single chess piece and its current square.

use std::fmt::{self, Display};

use log::trace;

use crate::coretypes::{Color, Coord, PieceKind};
use crate::error::{self, ErrorKind};

/// A piece has a fixed color and kind, and a position which is either unset
/// (off the board) or an on-board coordinate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) piece_kind: PieceKind,
    pub(crate) position: Option<Coord>,
}

impl Piece {
    /// Creates a piece that is not yet on the board.
    pub const fn new(color: Color, piece_kind: PieceKind) -> Self {
        Piece {
            color,
            piece_kind,
            position: None,
        }
    }

    /// Creates a piece standing on `position`.
    pub const fn placed(color: Color, piece_kind: PieceKind, position: Coord) -> Self {
        Piece {
            color,
            piece_kind,
            position: Some(position),
        }
    }

    /// Immutable Getters.
    pub const fn color(&self) -> &Color {
        &self.color
    }
    pub const fn piece_kind(&self) -> &PieceKind {
        &self.piece_kind
    }
    pub const fn position(&self) -> Option<Coord> {
        self.position
    }

    /// Returns true if this piece currently reports `coord` as its position.
    pub fn is_at(&self, coord: Coord) -> bool {
        self.position == Some(coord)
    }

    /// Moves the piece to `to` if it lies on the board.
    /// Nothing but the board bounds is checked. On error the position is unchanged.
    pub fn move_to(&mut self, to: Coord) -> error::Result<()> {
        if !to.is_on_board() {
            return Err((ErrorKind::OutOfBounds, format!("{self} cannot move to {to}")).into());
        }
        trace!("{self} moves to {to}");
        self.position = Some(to);
        Ok(())
    }

    /// Overwrites the position without any check.
    /// This can put two pieces on one square, or a piece off the board.
    pub fn set_position(&mut self, position: Option<Coord>) {
        self.position = position;
    }

    /// Board diagram character: the kind's initial, lower case for Black.
    pub const fn symbol(&self) -> char {
        match self.color {
            Color::White => self.piece_kind.initial(),
            Color::Black => self.piece_kind.initial().to_ascii_lowercase(),
        }
    }
}

/// Displays as "<Color> <PieceKind>", for example "White Pawn".
impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.color, self.piece_kind)
    }
}
