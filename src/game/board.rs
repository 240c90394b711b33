use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::error::GameError;
use crate::game::player::Player;
use crate::game::special_squares::{is_center, special_square_at};
use crate::game::tile::{PlacedTile, TileId};

pub const BOARD_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Builds a position, rejecting coordinates outside the 15×15 grid.
    pub fn checked(row: usize, col: usize) -> Result<Self, GameError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 15×15 grid of optional placed tiles.
///
/// A tile id appears in at most one cell; `put` keeps that true by clearing
/// any earlier cell holding the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Option<PlacedTile>>,
}

pub fn create_board_empty() -> Board {
    Board {
        cells: vec![None; BOARD_SIZE * BOARD_SIZE],
    }
}

impl Default for Board {
    fn default() -> Self {
        create_board_empty()
    }
}

impl Board {
    /// Cell index, `None` outside the grid.
    fn index(position: Position) -> Option<usize> {
        (position.row < BOARD_SIZE && position.col < BOARD_SIZE)
            .then(|| position.row * BOARD_SIZE + position.col)
    }

    pub fn get(&self, position: Position) -> Option<&PlacedTile> {
        Self::index(position).and_then(|i| self.cells[i].as_ref())
    }

    /// Writes `placed` into `position`, returning the displaced occupant.
    pub fn put(
        &mut self,
        position: Position,
        placed: PlacedTile,
    ) -> Result<Option<PlacedTile>, GameError> {
        let index = Self::index(position).ok_or(GameError::OutOfBounds {
            row: position.row,
            col: position.col,
        })?;
        if let Some(previous) = self.find(placed.id()) {
            if previous != position {
                self.take(previous);
            }
        }
        Ok(self.cells[index].replace(placed))
    }

    pub fn take(&mut self, position: Position) -> Option<PlacedTile> {
        Self::index(position).and_then(|i| self.cells[i].take())
    }

    pub fn find(&self, tile_id: TileId) -> Option<Position> {
        self.occupied()
            .find(|(_, placed)| placed.id() == tile_id)
            .map(|(position, _)| position)
    }

    /// Removes the tile with `tile_id` wherever it sits.
    pub fn remove_tile(&mut self, tile_id: TileId) -> Option<(Position, PlacedTile)> {
        let position = self.find(tile_id)?;
        self.take(position).map(|placed| (position, placed))
    }

    /// Iterates occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &PlacedTile)> {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.as_ref()
                .map(|placed| (Position::new(i / BOARD_SIZE, i % BOARD_SIZE), placed))
        })
    }

    pub fn tiles_of(&self, player: Player) -> impl Iterator<Item = (Position, &PlacedTile)> {
        self.occupied().filter(move |(_, placed)| placed.owner == player)
    }

    pub fn tile_count(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut PlacedTile> {
        self.cells.iter_mut().filter_map(Option::as_mut)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>3}", row)?;
            for col in 0..BOARD_SIZE {
                let position = Position::new(row, col);
                let cell = match self.get(position) {
                    Some(placed) => format!("{} ", placed.letter()),
                    None if is_center(position) => "★ ".to_string(),
                    None => special_square_at(position)
                        .map(|square| square.marker().to_string())
                        .unwrap_or_else(|| ". ".to_string()),
                };
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Tile;
    use assert_matches::assert_matches;

    fn placed(id: u32, letter: char, owner: Player) -> PlacedTile {
        PlacedTile::new(Tile { id: TileId(id), letter }, owner)
    }

    #[test]
    fn test_create_board_empty() {
        let board = create_board_empty();
        assert!(board.is_empty());
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_position_checked() {
        assert!(Position::checked(14, 14).is_ok());
        assert_matches!(
            Position::checked(15, 0),
            Err(GameError::OutOfBounds { row: 15, col: 0 })
        );
        assert_matches!(Position::checked(0, 99), Err(GameError::OutOfBounds { .. }));
    }

    #[test]
    fn test_put_returns_displaced_occupant() {
        let mut board = create_board_empty();
        let pos = Position::new(7, 7);

        assert_eq!(board.put(pos, placed(1, 'A', Player::One)), Ok(None));
        let displaced = board.put(pos, placed(2, 'B', Player::Two)).unwrap();

        assert_eq!(displaced.map(|p| p.id()), Some(TileId(1)));
        assert_eq!(board.get(pos).map(|p| p.letter()), Some('B'));
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_put_same_id_moves_tile() {
        let mut board = create_board_empty();
        board.put(Position::new(0, 0), placed(5, 'Q', Player::One)).unwrap();
        board.put(Position::new(3, 4), placed(5, 'Q', Player::One)).unwrap();

        assert_eq!(board.tile_count(), 1);
        assert_eq!(board.find(TileId(5)), Some(Position::new(3, 4)));
        assert!(board.get(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        let mut board = create_board_empty();
        board.put(Position::new(1, 5), placed(1, 'A', Player::One)).unwrap();

        // (0, 20) must not alias (1, 5)
        assert!(board.get(Position::new(0, 20)).is_none());
        assert!(board.take(Position::new(0, 20)).is_none());
        assert!(board.take(Position::new(15, 0)).is_none());
        assert_matches!(
            board.put(Position::new(20, 0), placed(2, 'B', Player::One)),
            Err(GameError::OutOfBounds { row: 20, col: 0 })
        );
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_remove_tile() {
        let mut board = create_board_empty();
        board.put(Position::new(2, 3), placed(9, 'Z', Player::Two)).unwrap();

        let removed = board.remove_tile(TileId(9));
        assert_eq!(removed.map(|(pos, p)| (pos, p.letter())), Some((Position::new(2, 3), 'Z')));
        assert!(board.is_empty());
        assert!(board.remove_tile(TileId(9)).is_none());
    }

    #[test]
    fn test_tiles_of_filters_by_owner() {
        let mut board = create_board_empty();
        board.put(Position::new(0, 1), placed(1, 'A', Player::One)).unwrap();
        board.put(Position::new(0, 2), placed(2, 'B', Player::Two)).unwrap();
        board.put(Position::new(0, 3), placed(3, 'C', Player::One)).unwrap();

        let ids: Vec<TileId> = board.tiles_of(Player::One).map(|(_, p)| p.id()).collect();
        assert_eq!(ids, vec![TileId(1), TileId(3)]);
    }

    #[test]
    fn test_display_shows_letters_and_markers() {
        let mut board = create_board_empty();
        board.put(Position::new(1, 2), placed(1, 'K', Player::One)).unwrap();
        let text = board.to_string();

        assert_eq!(text.lines().count(), BOARD_SIZE + 1);
        assert!(text.contains('K'));
        assert!(text.contains('★'));
        assert!(text.contains("3W"));
    }
}
