use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::game::player::Player;

/// Session-unique tile identifier, independent of the letter it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl FromStr for TileId {
    type Err = std::num::ParseIntError;

    /// Accepts both `t12` and `12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix(['t', 'T']).unwrap_or(s);
        digits.parse().map(TileId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
}

/// A tile sitting on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub owner: Player,
    /// Set once a submit has counted this tile.
    pub scored: bool,
}

impl PlacedTile {
    pub fn new(tile: Tile, owner: Player) -> Self {
        Self {
            tile,
            owner,
            scored: false,
        }
    }

    pub fn id(&self) -> TileId {
        self.tile.id
    }

    pub fn letter(&self) -> char {
        self.tile.letter
    }
}

/// Hands out monotonically increasing tile ids for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileIdAllocator {
    next: u32,
}

impl TileIdAllocator {
    pub fn allocate(&mut self, letter: char) -> Tile {
        let id = TileId(self.next);
        self.next += 1;
        Tile { id, letter }
    }
}
