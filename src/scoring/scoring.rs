use crate::game::board::{Board, Position};
use crate::game::config::ScoringMode;
use crate::game::player::Player;
use crate::game::tile::PlacedTile;

/// Standard point value of a letter; anything outside A-Z scores 0.
pub fn letter_score(letter: char) -> u32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}

/// Board tiles of `player` that the next submit will count under `mode`.
pub fn counted_tiles(
    board: &Board,
    player: Player,
    mode: ScoringMode,
) -> impl Iterator<Item = (Position, &PlacedTile)> {
    board.tiles_of(player).filter(move |(_, placed)| match mode {
        ScoringMode::FullBoardRecount => true,
        ScoringMode::NewTilesOnly => !placed.scored,
    })
}

/// Points `player` earns for the current submit.
///
/// Premium squares are not applied.
pub fn turn_score(board: &Board, player: Player, mode: ScoringMode) -> u32 {
    counted_tiles(board, player, mode)
        .map(|(_, placed)| letter_score(placed.letter()))
        .sum()
}
