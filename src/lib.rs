//! # Scrabble Board Library
//!
//! Core of a two-player Scrabble-style game: a 15×15 board with premium
//! square decorations, per-player letter racks, and the turn state machine
//! that places tiles, scores them and refills racks.
//!
//! ## Features
//!
//! - **Game State**: board, racks, scores and the active player in one session struct
//! - **Controller**: place, move and return tiles, submit and acknowledge turns
//! - **Scoring**: letter values, full-board recount or new-tiles-only modes
//! - **Snapshots**: serializable read-only views for a rendering front end
//!
//! ## Usage
//!
//! ```rust
//! use scrabble_board::{
//!     game::{GameConfig, GameState, Player},
//!     services::{place_tile, submit_turn},
//! };
//!
//! let mut state = GameState::with_racks(GameConfig::default(), ["QUIZ", "JAM"]);
//! let q = state.rack(Player::One).tiles()[0].id;
//! place_tile(&mut state, q, 7, 7).unwrap();
//! let result = submit_turn(&mut state).unwrap();
//! assert_eq!(result.score_delta, 10);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board, racks, tiles, players and session state
pub mod game;

/// Letter values and turn scoring
pub mod scoring;

/// Controller operations, drag/drop adapter, snapshots and text commands
pub mod services;

/// In-memory turn history
pub mod recording;

/// Logger initialisation for the terminal driver
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::{GameConfig, GameError, GameState, Player, Position, ScoringMode, TileId, TurnPhase};
pub use services::{
    acknowledge_turn, handle_drop, move_tile, place_tile, return_tile_to_rack, snapshot,
    submit_turn, DragPayload, GameSnapshot, TurnResult,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Scrabble board library
#[derive(Debug, thiserror::Error)]
pub enum ScrabbleError {
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrabbleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
