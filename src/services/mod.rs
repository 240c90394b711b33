pub mod command;
pub mod drag_drop;
pub mod game_manager;
pub mod snapshot;

pub use drag_drop::{handle_drop, DragPayload};
pub use game_manager::{
    acknowledge_turn, move_tile, place_tile, return_tile_to_rack, submit_turn, TurnResult,
};
pub use snapshot::{snapshot, snapshot_json, GameSnapshot};
