//! The fundamental and simple types of `chess_set_core`.

use std::fmt::{self, Display};
use std::mem::replace;
use std::ops::Not;
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_FILES: i8 = 8; // a, b, c, d, e, f, g, h
pub const NUM_RANKS: i8 = 8; // 1, 2, 3, 4, 5, 6, 7, 8
pub const NUM_SQUARES: usize = NUM_FILES as usize * NUM_RANKS as usize;

// 8 back rank pieces and 8 pawns per side.
pub const NUM_PIECES_PER_COLOR: usize = 16;
pub const NUM_PIECES: usize = 2 * NUM_PIECES_PER_COLOR;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Color can represent the color of a piece, or a player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// Coord
/// A zero-based (file, rank) pair. File 0 is the a-file, rank 0 is the first rank.
/// A Coord is a plain value and may lie off the board; only coordinates
/// satisfying `is_on_board` may be committed as a piece position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coord {
    pub(crate) file: i8,
    pub(crate) rank: i8,
}

//////////////////////
/// Implementations //
//////////////////////

impl Color {
    pub const fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }

    /// Rank holding this color's rooks, knights, bishops, queen and king at the start.
    pub const fn back_rank(&self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => NUM_RANKS - 1,
        }
    }

    /// Rank holding this color's pawns at the start.
    pub const fn pawn_rank(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => NUM_RANKS - 2,
        }
    }

    pub const fn iter() -> ColorIterator {
        ColorIterator::new()
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color ::= "white" | "w" | "black" | "b", any case.
impl FromStr for Color {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err((ErrorKind::ParseColorMalformed, format!("{s:?} is not white|black")).into()),
        }
    }
}

pub struct ColorIterator {
    maybe_color: Option<Color>,
}

impl ColorIterator {
    pub const fn new() -> Self {
        Self {
            maybe_color: Some(Color::White),
        }
    }
}

impl Iterator for ColorIterator {
    type Item = Color;
    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.maybe_color {
            Some(Color::White) => Some(Color::Black),
            Some(Color::Black) | None => None,
        };
        replace(&mut self.maybe_color, value)
    }
}

impl PieceKind {
    /// Order of pieces on a back rank in the starting position, from the a-file to the h-file.
    #[rustfmt::skip]
    pub const BACK_RANK: [PieceKind; NUM_FILES as usize] = [
        PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
        PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }

    /// First letter of the piece kind's name, upper case.
    /// Note that King and Knight share the initial 'K'.
    pub const fn initial(&self) -> char {
        match self {
            PieceKind::King | PieceKind::Knight => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Pawn => 'P',
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// PieceKind ::= full name of the kind, any case.
impl FromStr for PieceKind {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        use PieceKind::*;
        match s.trim().to_ascii_lowercase().as_str() {
            "king" => Ok(King),
            "queen" => Ok(Queen),
            "rook" => Ok(Rook),
            "bishop" => Ok(Bishop),
            "knight" => Ok(Knight),
            "pawn" => Ok(Pawn),
            _ => Err((ErrorKind::ParsePieceKindMalformed, format!("{s:?} is not a piece kind")).into()),
        }
    }
}

pub struct CoordIterator {
    idx: usize,
}

impl Coord {
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Returns 0-based file, where 0 is the a-file.
    pub const fn file(&self) -> i8 {
        self.file
    }

    /// Returns 0-based rank, where 0 is the first rank.
    pub const fn rank(&self) -> i8 {
        self.rank
    }

    /// Returns true if both file and rank are within 0..=7.
    pub const fn is_on_board(&self) -> bool {
        0 <= self.file && self.file < NUM_FILES && 0 <= self.rank && self.rank < NUM_RANKS
    }

    /// Iterates every on-board coordinate, rank by rank from a1 to h8.
    pub const fn iter() -> CoordIterator {
        CoordIterator { idx: 0 }
    }
}

impl From<(i8, i8)> for Coord {
    fn from((file, rank): (i8, i8)) -> Self {
        Self::new(file, rank)
    }
}

impl Iterator for CoordIterator {
    type Item = Coord;
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= NUM_SQUARES {
            return None;
        }
        let file = (self.idx % NUM_FILES as usize) as i8;
        let rank = (self.idx / NUM_FILES as usize) as i8;
        self.idx += 1;
        Some(Coord::new(file, rank))
    }
}
