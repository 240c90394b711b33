use crate::game::player::Player;
use crate::game::tile::TileId;

/// Rejection reasons for controller operations.
///
/// A rejected operation never mutates the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("tile {0} is not in the active player's rack")]
    TileNotInRack(TileId),

    #[error("tile {0} is not on the board")]
    TileNotOnBoard(TileId),

    #[error("tile {0} belongs to the other player")]
    TileNotOwned(TileId),

    #[error("tile {0} was already scored and can no longer move")]
    TileAlreadyScored(TileId),

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("{0} must acknowledge the turn change first")]
    AwaitingAcknowledgment(Player),

    #[error("no turn change is waiting for acknowledgment")]
    NotAwaitingAcknowledgment,

    #[error("invalid player number {0}, expected 1 or 2")]
    InvalidPlayer(u8),
}
