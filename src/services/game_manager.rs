// src/services/game_manager.rs - Turn/board/rack controller

use serde::{Deserialize, Serialize};

use crate::game::board::Position;
use crate::game::error::GameError;
use crate::game::game_state::{GameState, TurnPhase};
use crate::game::player::Player;
use crate::game::tile::{PlacedTile, Tile, TileId};
use crate::recording::{ScoredLetter, TurnRecord};
use crate::scoring::{counted_tiles, letter_score};

/// Outcome of a submit, used to announce the turn change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub player: Player,
    pub next_player: Player,
    pub score_delta: u32,
    pub total: u32,
    pub tiles_drawn: usize,
    pub notification: String,
}

// ============================================================================
// GUARDS
// ============================================================================

fn ensure_playing(state: &GameState) -> Result<Player, GameError> {
    match state.phase {
        TurnPhase::Playing(player) => Ok(player),
        TurnPhase::AwaitingAcknowledgment(player) => Err(GameError::AwaitingAcknowledgment(player)),
    }
}

/// The active player may only pick up their own tiles from this turn.
fn ensure_movable(placed: &PlacedTile, player: Player) -> Result<(), GameError> {
    if placed.owner != player {
        return Err(GameError::TileNotOwned(placed.id()));
    }
    if placed.scored {
        return Err(GameError::TileAlreadyScored(placed.id()));
    }
    Ok(())
}

/// Writes a tile onto the board. Last write wins: a displaced occupant goes
/// back to its owner's rack.
fn put_on_board(
    state: &mut GameState,
    position: Position,
    placed: PlacedTile,
) -> Result<(), GameError> {
    if let Some(displaced) = state.board.put(position, placed)? {
        log::debug!(
            "{} displaces {} ({}) at {}",
            placed.tile.id,
            displaced.id(),
            displaced.letter(),
            position
        );
        state.rack_mut(displaced.owner).push(displaced.tile);
    }
    Ok(())
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Moves a tile from the active player's rack onto the board.
pub fn place_tile(
    state: &mut GameState,
    tile_id: TileId,
    row: usize,
    col: usize,
) -> Result<(), GameError> {
    let player = ensure_playing(state)?;
    let position = Position::checked(row, col)?;
    let tile = state
        .rack_mut(player)
        .take(tile_id)
        .ok_or(GameError::TileNotInRack(tile_id))?;

    let placed = state.placed_tile(tile, player);
    put_on_board(state, position, placed)?;
    log::debug!("{} places {} ({}) at {}", player, tile.id, tile.letter, position);
    Ok(())
}

/// Relocates a tile the active player placed this turn.
pub fn move_tile(
    state: &mut GameState,
    tile_id: TileId,
    row: usize,
    col: usize,
) -> Result<(), GameError> {
    let player = ensure_playing(state)?;
    let destination = Position::checked(row, col)?;
    let origin = state
        .board
        .find(tile_id)
        .ok_or(GameError::TileNotOnBoard(tile_id))?;
    let placed = state
        .board
        .get(origin)
        .copied()
        .ok_or(GameError::TileNotOnBoard(tile_id))?;
    ensure_movable(&placed, player)?;
    if origin == destination {
        return Ok(());
    }

    put_on_board(state, destination, placed)?;
    log::debug!("{} moves {} from {} to {}", player, tile_id, origin, destination);
    Ok(())
}

/// Lifts a tile off the board back into the active player's rack.
///
/// A tile that is not on the board is rejected rather than duplicated.
pub fn return_tile_to_rack(state: &mut GameState, tile_id: TileId) -> Result<Tile, GameError> {
    let player = ensure_playing(state)?;
    let position = state
        .board
        .find(tile_id)
        .ok_or(GameError::TileNotOnBoard(tile_id))?;
    let placed = state
        .board
        .get(position)
        .copied()
        .ok_or(GameError::TileNotOnBoard(tile_id))?;
    ensure_movable(&placed, player)?;

    state.board.take(position);
    state.rack_mut(player).push(placed.tile);
    log::debug!("{} returns {} ({}) from {}", player, tile_id, placed.letter(), position);
    Ok(placed.tile)
}

/// Scores the active player's tiles, passes the turn and refills the next
/// player's rack.
///
/// No word or placement legality is checked.
pub fn submit_turn(state: &mut GameState) -> Result<TurnResult, GameError> {
    let player = ensure_playing(state)?;
    let mode = state.config.scoring_mode;

    let letters: Vec<ScoredLetter> = counted_tiles(&state.board, player, mode)
        .map(|(position, placed)| ScoredLetter {
            position,
            letter: placed.letter(),
        })
        .collect();
    let score_delta: u32 = letters.iter().map(|l| letter_score(l.letter)).sum();

    let score = &mut state.scores[player.index()];
    *score = score.saturating_add(score_delta);
    let total = *score;

    for placed in state.board.cells_mut() {
        if placed.owner == player {
            placed.scored = true;
            state.scored.insert(placed.id());
        }
    }

    state.turns_played += 1;
    state.history.record_turn(TurnRecord {
        turn: state.turns_played,
        player,
        letters,
        score_delta,
        total,
        timestamp: chrono::Utc::now(),
    });

    let next_player = player.other();
    let target = state.config.rack_size;
    let rack = &mut state.racks[next_player.index()];
    let tiles_drawn = rack.refill(target, &mut state.rng, &mut state.ids);

    state.phase = if state.config.require_acknowledgment {
        TurnPhase::AwaitingAcknowledgment(next_player)
    } else {
        TurnPhase::Playing(next_player)
    };

    log::info!(
        "Turn {}: {} scores {} (total {}), {} to play, drew {} tile(s)",
        state.turns_played,
        player,
        score_delta,
        total,
        next_player,
        tiles_drawn
    );

    Ok(TurnResult {
        player,
        next_player,
        score_delta,
        total,
        tiles_drawn,
        notification: format!("{}, it's your turn!", next_player),
    })
}

/// Confirms the turn-change notice so the new player can act.
pub fn acknowledge_turn(state: &mut GameState) -> Result<Player, GameError> {
    match state.phase {
        TurnPhase::AwaitingAcknowledgment(player) => {
            state.phase = TurnPhase::Playing(player);
            log::debug!("{} acknowledged the turn change", player);
            Ok(player)
        }
        TurnPhase::Playing(_) => Err(GameError::NotAwaitingAcknowledgment),
    }
}
