//! The two sides of a game.

use derive_more::Display;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Player {
    #[display(fmt = "BLACK")]
    Black,
    #[display(fmt = "WHITE")]
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The character used for this player's pieces in text positions.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }

    /// Read the player token of a position header: White if it starts with 'W', Black otherwise.
    pub fn from_token(token: &str) -> Self {
        if token.starts_with(Player::White.symbol()) {
            Player::White
        } else {
            Player::Black
        }
    }
}
