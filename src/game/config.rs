use serde::{Deserialize, Serialize};

use crate::game::rack::RACK_SIZE;

/// How `submit_turn` counts the active player's tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Every tile the player owns on the board counts again on each submit.
    #[default]
    FullBoardRecount,
    /// Only tiles not counted by an earlier submit.
    NewTilesOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rack_size: usize,
    pub scoring_mode: ScoringMode,
    /// Hold the new player in `AwaitingAcknowledgment` after each submit.
    pub require_acknowledgment: bool,
    /// Fixed seed for reproducible letter draws.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rack_size: RACK_SIZE,
            scoring_mode: ScoringMode::default(),
            require_acknowledgment: true,
            seed: None,
        }
    }
}
