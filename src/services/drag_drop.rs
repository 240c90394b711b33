//! Adapter for a drag-and-drop front end.
//!
//! A drag source hands over a `DragPayload`; the drop target reports the
//! destination cell and `handle_drop` routes it to the right operation.

use serde::{Deserialize, Serialize};

use crate::game::board::Position;
use crate::game::error::GameError;
use crate::game::game_state::GameState;
use crate::game::tile::{Tile, TileId};
use crate::scoring::letter_score;
use crate::services::game_manager::{move_tile, place_tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub tile_id: TileId,
    pub letter: char,
    /// `None` when dragged out of the rack.
    pub origin: Option<Position>,
}

impl DragPayload {
    pub fn from_rack(tile: Tile) -> Self {
        Self {
            tile_id: tile.id,
            letter: tile.letter,
            origin: None,
        }
    }

    pub fn from_board(tile: Tile, origin: Position) -> Self {
        Self {
            tile_id: tile.id,
            letter: tile.letter,
            origin: Some(origin),
        }
    }

    /// Points shown on the dragged tile.
    pub fn points(&self) -> u32 {
        letter_score(self.letter)
    }
}

pub fn handle_drop(
    state: &mut GameState,
    payload: DragPayload,
    destination: Position,
) -> Result<(), GameError> {
    match payload.origin {
        None => place_tile(state, payload.tile_id, destination.row, destination.col),
        Some(_) => move_tile(state, payload.tile_id, destination.row, destination.col),
    }
}
