//! Chess set core error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Chess set core generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the chess set core.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Notation string is not a letter followed by a digit.
    ParseNotationMalformed,
    /// Color parse string malformed.
    ParseColorMalformed,
    /// Piece kind parse string malformed.
    ParsePieceKindMalformed,

    /// No piece reports the requested origin square as its position.
    SquareUnoccupied,
    /// The piece on the origin square belongs to the other color.
    WrongOwner,
    /// Destination square lies off the 8x8 board.
    OutOfBounds,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ParseNotationMalformed => "parse notation malformed",
            ErrorKind::ParseColorMalformed => "parse color malformed",
            ErrorKind::ParsePieceKindMalformed => "parse piece kind malformed",

            ErrorKind::SquareUnoccupied => "square unoccupied",
            ErrorKind::WrongOwner => "wrong owner",
            ErrorKind::OutOfBounds => "out of bounds",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the chess set core.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// Returns the kind of this error, regardless of attached message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) | Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_survives_message() {
        let simple = Error::from(ErrorKind::WrongOwner);
        let message = Error::from((ErrorKind::OutOfBounds, "a9"));
        assert_eq!(simple.kind(), ErrorKind::WrongOwner);
        assert_eq!(message.kind(), ErrorKind::OutOfBounds);
        assert_eq!(simple.to_string(), "wrong owner");
        assert_eq!(message.to_string(), "out of bounds: a9");
    }
}
