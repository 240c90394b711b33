use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::game::board::{create_board_empty, Board};
use crate::game::config::GameConfig;
use crate::game::player::Player;
use crate::game::rack::Rack;
use crate::game::tile::{PlacedTile, Tile, TileId, TileIdAllocator};
use crate::recording::GameRecord;

/// Where the turn state machine currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The player may place, move, return tiles and submit.
    Playing(Player),
    /// Turn just passed to this player; nothing is accepted until acknowledged.
    AwaitingAcknowledgment(Player),
}

impl TurnPhase {
    pub fn player(self) -> Player {
        match self {
            TurnPhase::Playing(player) | TurnPhase::AwaitingAcknowledgment(player) => player,
        }
    }
}

/// All mutable state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub session_id: Uuid,
    pub config: GameConfig,
    pub board: Board,
    pub racks: [Rack; 2],
    pub scores: [u32; 2],
    pub phase: TurnPhase,
    /// Number of submits so far.
    pub turns_played: usize,
    pub history: GameRecord,
    /// Tiles counted by some submit. Survives the tile leaving the board.
    pub(crate) scored: HashSet<TileId>,
    pub(crate) ids: TileIdAllocator,
    pub(crate) rng: StdRng,
}

impl GameState {
    /// Fresh game: empty board, both racks filled with random letters,
    /// player 1 to move.
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self::empty(config);
        let target = state.config.rack_size;
        for rack in state.racks.iter_mut() {
            rack.refill(target, &mut state.rng, &mut state.ids);
        }
        state
    }

    /// Starts with the given rack letters instead of random draws.
    pub fn with_racks(config: GameConfig, letters: [&str; 2]) -> Self {
        let mut state = Self::empty(config);
        for (rack, letters) in state.racks.iter_mut().zip(letters) {
            for letter in letters.chars() {
                rack.push(state.ids.allocate(letter.to_ascii_uppercase()));
            }
        }
        state
    }

    fn empty(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session_id = Uuid::new_v4();

        Self {
            session_id,
            config,
            board: create_board_empty(),
            racks: [Rack::default(), Rack::default()],
            scores: [0, 0],
            phase: TurnPhase::Playing(Player::One),
            turns_played: 0,
            history: GameRecord::new(session_id),
            scored: HashSet::new(),
            ids: TileIdAllocator::default(),
            rng,
        }
    }

    pub fn active_player(&self) -> Player {
        self.phase.player()
    }

    pub fn rack(&self, player: Player) -> &Rack {
        &self.racks[player.index()]
    }

    pub(crate) fn rack_mut(&mut self, player: Player) -> &mut Rack {
        &mut self.racks[player.index()]
    }

    pub fn is_scored(&self, tile_id: TileId) -> bool {
        self.scored.contains(&tile_id)
    }

    /// Board record for `tile`, carrying over any earlier scoring.
    pub(crate) fn placed_tile(&self, tile: Tile, owner: Player) -> PlacedTile {
        PlacedTile {
            scored: self.is_scored(tile.id),
            ..PlacedTile::new(tile, owner)
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Tiles a player holds in total, rack plus board.
    pub fn tiles_held(&self, player: Player) -> usize {
        self.rack(player).len() + self.board.tiles_of(player).count()
    }
}
