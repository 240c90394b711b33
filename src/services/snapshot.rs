//! Read-only views handed to the rendering side after each mutation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::board::{Position, BOARD_SIZE};
use crate::game::game_state::{GameState, TurnPhase};
use crate::game::player::Player;
use crate::game::special_squares::{is_center, special_square_at, SpecialSquare};
use crate::game::tile::TileId;
use crate::scoring::letter_score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub id: TileId,
    pub letter: char,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedTileView {
    #[serde(flatten)]
    pub tile: TileView,
    pub owner: Player,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub special: Option<SpecialSquare>,
    pub center: bool,
    pub tile: Option<PlacedTileView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: Player,
    pub score: u32,
    pub rack: Vec<TileView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session_id: Uuid,
    pub active_player: Player,
    pub phase: TurnPhase,
    pub turns_played: usize,
    /// Row-major, `BOARD_SIZE` rows of `BOARD_SIZE` cells.
    pub board: Vec<Vec<CellView>>,
    pub players: Vec<PlayerView>,
}

pub fn snapshot(state: &GameState) -> GameSnapshot {
    let board = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let position = Position::new(row, col);
                    CellView {
                        position,
                        special: special_square_at(position),
                        center: is_center(position),
                        tile: state.board.get(position).map(|placed| PlacedTileView {
                            tile: TileView {
                                id: placed.id(),
                                letter: placed.letter(),
                                points: letter_score(placed.letter()),
                            },
                            owner: placed.owner,
                            scored: placed.scored,
                        }),
                    }
                })
                .collect()
        })
        .collect();

    let players = Player::ALL
        .iter()
        .map(|&player| PlayerView {
            player,
            score: state.score(player),
            rack: state
                .rack(player)
                .tiles()
                .iter()
                .map(|tile| TileView {
                    id: tile.id,
                    letter: tile.letter,
                    points: letter_score(tile.letter),
                })
                .collect(),
        })
        .collect();

    GameSnapshot {
        session_id: state.session_id,
        active_player: state.active_player(),
        phase: state.phase,
        turns_played: state.turns_played,
        board,
        players,
    }
}

pub fn snapshot_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&snapshot(state))
}

/// Human-readable scoreboard line, e.g. `Player 1: 10 | Player 2: 0`.
pub fn scoreboard(state: &GameState) -> String {
    let marker = |player: Player| match state.phase {
        TurnPhase::Playing(active) if active == player => " *",
        TurnPhase::AwaitingAcknowledgment(active) if active == player => " (waiting)",
        _ => "",
    };
    format!(
        "Player 1: {}{} | Player 2: {}{}",
        state.score(Player::One),
        marker(Player::One),
        state.score(Player::Two),
        marker(Player::Two)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GameConfig;
    use crate::services::game_manager::place_tile;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::with_racks(GameConfig::default(), ["QA", "Z"]);
        let q = state.rack(Player::One).tiles()[0].id;
        place_tile(&mut state, q, 0, 0).unwrap();

        let snap = snapshot(&state);

        assert_eq!(snap.board.len(), BOARD_SIZE);
        assert!(snap.board.iter().all(|row| row.len() == BOARD_SIZE));
        let corner = &snap.board[0][0];
        assert_eq!(corner.special, Some(SpecialSquare::TripleWord));
        assert_eq!(corner.tile.as_ref().map(|t| t.tile.points), Some(10));
        assert!(snap.board[7][7].center);
        assert_eq!(snap.players[0].rack.len(), 1);
        assert_eq!(snap.players[1].rack[0].letter, 'Z');
        assert_eq!(snap.active_player, Player::One);
    }

    #[test]
    fn test_snapshot_json_fields() {
        let state = GameState::with_racks(GameConfig::default(), ["K", ""]);
        let json: serde_json::Value = serde_json::from_str(&snapshot_json(&state).unwrap()).unwrap();

        assert_eq!(json["players"][0]["rack"][0]["letter"], "K");
        assert_eq!(json["players"][0]["rack"][0]["points"], 5);
        assert_eq!(json["board"][0][0]["special"], "triple-word");
        assert_eq!(json["phase"]["Playing"], "One");
    }

    #[test]
    fn test_scoreboard_marks_active_player() {
        let state = GameState::with_racks(GameConfig::default(), ["", ""]);
        assert_eq!(scoreboard(&state), "Player 1: 0 * | Player 2: 0");
    }
}
