use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::letters::draw_letters;
use crate::game::tile::{Tile, TileId, TileIdAllocator};

pub const RACK_SIZE: usize = 7;

/// Tiles a player can still place. Order is kept stable for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile_id: TileId) -> bool {
        self.tiles.iter().any(|tile| tile.id == tile_id)
    }

    /// Removes exactly the tile with `tile_id`, leaving duplicate letters alone.
    pub fn take(&mut self, tile_id: TileId) -> Option<Tile> {
        let index = self.tiles.iter().position(|tile| tile.id == tile_id)?;
        Some(self.tiles.remove(index))
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Tops the rack up to `target` with fresh random letters and returns
    /// how many were drawn. A rack already at or above `target` is untouched.
    pub fn refill<R: Rng + ?Sized>(
        &mut self,
        target: usize,
        rng: &mut R,
        ids: &mut TileIdAllocator,
    ) -> usize {
        let missing = target.saturating_sub(self.tiles.len());
        self.tiles
            .extend(draw_letters(rng, missing).into_iter().map(|letter| ids.allocate(letter)));
        missing
    }

    pub fn letters(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_refill_from_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ids = TileIdAllocator::default();
        let mut rack = Rack::default();

        assert_eq!(rack.refill(RACK_SIZE, &mut rng, &mut ids), RACK_SIZE);
        assert_eq!(rack.len(), RACK_SIZE);
    }

    #[test]
    fn test_refill_tops_up_only() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ids = TileIdAllocator::default();
        let mut rack = Rack::from_tiles(vec![ids.allocate('A'), ids.allocate('B')]);

        assert_eq!(rack.refill(RACK_SIZE, &mut rng, &mut ids), 5);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(&rack.letters()[..2], "AB");
    }

    #[test]
    fn test_refill_never_shrinks_overfull_rack() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ids = TileIdAllocator::default();
        let mut rack = Rack::default();
        for _ in 0..9 {
            rack.push(ids.allocate('E'));
        }

        assert_eq!(rack.refill(RACK_SIZE, &mut rng, &mut ids), 0);
        assert_eq!(rack.len(), 9);
    }

    #[test]
    fn test_take_removes_only_matching_duplicate() {
        let mut ids = TileIdAllocator::default();
        let first = ids.allocate('E');
        let second = ids.allocate('E');
        let mut rack = Rack::from_tiles(vec![first, second]);

        assert_eq!(rack.take(second.id), Some(second));
        assert_eq!(rack.tiles(), &[first]);
        assert_eq!(rack.take(second.id), None);
    }
}
