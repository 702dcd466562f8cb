//! Chess set core.
//!
//! A placement and notation substrate for a chess board: 32 pieces in the
//! standard start layout, a board that answers occupancy queries by scanning
//! them, and a move request that checks the piece owner and the board bounds.
//! No other chess rule is enforced.

pub mod board;
pub mod coretypes;
pub mod error;
pub mod gameset;
pub mod notation;
pub mod piece;
pub mod piecelist;
pub mod player;

pub use board::Board;
pub use coretypes::{Color, Coord, PieceKind};
pub use error::{Error, ErrorKind};
pub use gameset::GameSet;
pub use piece::Piece;
pub use player::Player;
