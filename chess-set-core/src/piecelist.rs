//! PieceList type used by the game set.
//!
//! A set is created with all of its pieces and never gains or loses one, so
//! the collection is a fixed capacity array of exactly `NUM_PIECES`.

use arrayvec::ArrayVec;

use crate::coretypes::NUM_PIECES;
use crate::piece::Piece;

/// PieceList holds at most `NUM_PIECES`, the pieces of one full chess set.
pub type PieceList = ArrayVec<Piece, NUM_PIECES>;
