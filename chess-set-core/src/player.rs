//! A named player controlling one color.

use std::fmt::{self, Display};

use crate::coretypes::Color;
use crate::error;
use crate::gameset::GameSet;

/// A player is only a name and a color. It is handed a game set for each move.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    name: String,
    color: Color,
}

impl Player {
    pub fn new<S: Into<String>>(name: S, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Moves the piece on `from` to `to` in `game_set` as this player's color.
    pub fn try_make_move(&self, game_set: &mut GameSet, from: &str, to: &str) -> error::Result<()> {
        game_set.try_move_piece(self.color, from, to)
    }

    /// Boolean form of [`Player::try_make_move`].
    pub fn make_move(&self, game_set: &mut GameSet, from: &str, to: &str) -> bool {
        game_set.move_piece(self.color, from, to)
    }
}

/// Displays as "<name> (<Color>)".
impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
