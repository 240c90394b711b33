//! In-memory turn history for one session.
//!
//! Nothing here is written to disk; the driver prints it on request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::board::Position;
use crate::game::player::Player;

/// One letter counted by a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLetter {
    pub position: Position,
    pub letter: char,
}

/// Record of a single submitted turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number
    pub turn: usize,
    pub player: Player,
    /// Tiles that contributed to `score_delta`
    pub letters: Vec<ScoredLetter>,
    pub score_delta: u32,
    /// Player's total after this turn
    pub total: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub turns: Vec<TurnRecord>,
}

impl GameRecord {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            started_at: Utc::now(),
            turns: Vec::new(),
        }
    }

    pub fn record_turn(&mut self, record: TurnRecord) {
        self.turns.push(record);
    }

    pub fn turns_of(&self, player: Player) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter().filter(move |turn| turn.player == player)
    }
}
