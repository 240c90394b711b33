pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod letters;
pub mod player;
pub mod rack;
pub mod special_squares;
pub mod tile;

pub use board::{Board, Position, BOARD_SIZE};
pub use config::{GameConfig, ScoringMode};
pub use error::GameError;
pub use game_state::{GameState, TurnPhase};
pub use player::Player;
pub use rack::{Rack, RACK_SIZE};
pub use special_squares::SpecialSquare;
pub use tile::{PlacedTile, Tile, TileId};
