use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Player::Player1 => "Player 1",
            Player::Player2 => "Player 2",
        };
        write!(f, "{}", label)
    }
}

/// Session handle issued by the server when the client joins.
///
/// Created once at startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: String,
    pub player: Player,
}

impl GameInfo {
    pub fn new(id: impl Into<String>, player: Player) -> Self {
        Self {
            id: id.into(),
            player,
        }
    }
}
