use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::error::GameError;

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Index into per-player arrays (racks, scores).
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(GameError::InvalidPlayer(other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_other_alternates() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.other().other(), Player::One);
    }

    #[test]
    fn test_try_from_number() {
        assert_eq!(Player::try_from(1).unwrap(), Player::One);
        assert_eq!(Player::try_from(2).unwrap(), Player::Two);
        assert_matches!(Player::try_from(3), Err(GameError::InvalidPlayer(3)));
        assert_matches!(Player::try_from(0), Err(GameError::InvalidPlayer(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Two.to_string(), "Player 2");
    }
}
