//! Premium square layout. Display only: scoring never reads it.

use serde::{Deserialize, Serialize};

use crate::game::board::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialSquare {
    TripleWord,
    DoubleWord,
    TripleLetter,
    DoubleLetter,
}

impl SpecialSquare {
    /// Two-character marker used by the text board.
    pub fn marker(self) -> &'static str {
        match self {
            SpecialSquare::TripleWord => "3W",
            SpecialSquare::DoubleWord => "2W",
            SpecialSquare::TripleLetter => "3L",
            SpecialSquare::DoubleLetter => "2L",
        }
    }
}

pub const CENTER: Position = Position { row: 7, col: 7 };

const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0), (0, 7), (0, 14), (7, 0), (7, 14), (14, 0), (14, 7), (14, 14),
];

const DOUBLE_WORD: [(usize, usize); 16] = [
    (1, 1), (2, 2), (3, 3), (4, 4), (10, 10), (11, 11), (12, 12), (13, 13),
    (1, 13), (2, 12), (3, 11), (4, 10), (10, 4), (11, 3), (12, 2), (13, 1),
];

const TRIPLE_LETTER: [(usize, usize); 12] = [
    (5, 1), (9, 1), (1, 5), (5, 5), (9, 5), (13, 5),
    (1, 9), (5, 9), (9, 9), (13, 9), (5, 13), (9, 13),
];

const DOUBLE_LETTER: [(usize, usize); 24] = [
    (3, 0), (11, 0), (6, 2), (8, 2), (0, 3), (7, 3), (14, 3),
    (2, 6), (6, 6), (8, 6), (12, 6), (3, 7), (11, 7),
    (2, 8), (6, 8), (8, 8), (12, 8), (0, 11), (7, 11), (14, 11),
    (6, 12), (8, 12), (3, 14), (11, 14),
];

/// Classifies a cell. Checked in word-over-letter, triple-over-double order.
pub fn special_square_at(position: Position) -> Option<SpecialSquare> {
    let cell = (position.row, position.col);
    let tables: [(&[(usize, usize)], SpecialSquare); 4] = [
        (&TRIPLE_WORD[..], SpecialSquare::TripleWord),
        (&DOUBLE_WORD[..], SpecialSquare::DoubleWord),
        (&TRIPLE_LETTER[..], SpecialSquare::TripleLetter),
        (&DOUBLE_LETTER[..], SpecialSquare::DoubleLetter),
    ];

    tables
        .iter()
        .find(|(coords, _)| coords.contains(&cell))
        .map(|(_, kind)| *kind)
}

pub fn is_center(position: Position) -> bool {
    position == CENTER
}
