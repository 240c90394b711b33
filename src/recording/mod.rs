//! Turn history recording.
//!
//! - `game_record`: per-session list of submitted turns

pub mod game_record;

pub use game_record::{GameRecord, ScoredLetter, TurnRecord};
