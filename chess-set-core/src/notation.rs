//! Algebraic square notation.
//!
//! Converts between zero-based `(file, rank)` pairs and two character square
//! names such as `e4`. Parsing only checks the shape of the string; a letter
//! past `h` or a digit of `0` or `9` yields an off-board [`Coord`], which is
//! rejected later when a piece tries to move there.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::coretypes::Coord;
use crate::error::{self, ErrorKind};

/// Returns the notation of a square, `(4, 3) -> "e4"`.
///
/// Off-board input does not panic. The letter at `'a' + file` is used when it
/// is a valid char (otherwise `'?'`), followed by `rank + 1` in decimal, so
/// `(0, 8)` becomes `"a9"`.
pub fn to_notation(file: i8, rank: i8) -> String {
    let letter = u32::try_from(i32::from(b'a') + i32::from(file))
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?');
    format!("{}{}", letter, i32::from(rank) + 1)
}

/// Notation ::= <letter><digit>
///
/// The letter is lower-cased before conversion, so `"E2"` and `"e2"` are the same square.
pub fn from_notation(s: &str) -> error::Result<Coord> {
    let mut chars = s.chars();
    let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file_ch), Some(rank_ch), None) => (file_ch.to_ascii_lowercase(), rank_ch),
        _ => {
            return Err((
                ErrorKind::ParseNotationMalformed,
                format!("{s:?} is not two characters"),
            )
                .into())
        }
    };

    if !file_ch.is_ascii_lowercase() {
        return Err((
            ErrorKind::ParseNotationMalformed,
            format!("{s:?} does not start with a file letter"),
        )
            .into());
    }
    let digit = rank_ch.to_digit(10).ok_or((
        ErrorKind::ParseNotationMalformed,
        format!("{s:?} does not end with a rank digit"),
    ))?;

    let file = (file_ch as u8 - b'a') as i8;
    let rank = digit as i8 - 1;
    Ok(Coord::new(file, rank))
}

impl FromStr for Coord {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        from_notation(s)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_notation(self.file, self.rank))
    }
}
