use crate::Coordinate;
use std::iter;

/// Describes the score multiplier printed on a cell of the board. A bonus only counts on
/// the turn a tile is first placed on its cell.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [score_word](crate::score_word)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Bonus {
    /// No multiplier.
    #[default]
    None,
    /// Doubles the value of the letter placed on the cell.
    DoubleLetter,
    /// Triples the value of the letter placed on the cell.
    TripleLetter,
    /// Doubles the value of every word formed through the cell.
    DoubleWord,
    /// Triples the value of every word formed through the cell.
    TripleWord,
}

impl Bonus {
    /// # Returns
    ///
    /// The factor applied to the value of a letter newly placed on the cell.
    #[inline]
    pub fn letter_multiplier(self) -> usize {
        match self {
            Bonus::DoubleLetter => 2,
            Bonus::TripleLetter => 3,
            _ => 1,
        }
    }

    /// # Returns
    ///
    /// The factor applied to a whole word passing through the cell when the cell
    /// is newly covered.
    #[inline]
    pub fn word_multiplier(self) -> usize {
        match self {
            Bonus::DoubleWord => 2,
            Bonus::TripleWord => 3,
            _ => 1,
        }
    }
}

/// Corners and edge midpoints.
pub const TRIPLE_WORD_COORDINATES: [Coordinate; 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

/// Both diagonals plus the [center](crate::CENTER).
pub const DOUBLE_WORD_COORDINATES: [Coordinate; 17] = [
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (10, 10),
    (11, 11),
    (12, 12),
    (13, 13),
    (1, 13),
    (2, 12),
    (3, 11),
    (4, 10),
    (10, 4),
    (11, 3),
    (12, 2),
    (13, 1),
    (7, 7),
];

/// The triple letter cells.
pub const TRIPLE_LETTER_COORDINATES: [Coordinate; 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

/// The double letter cells.
pub const DOUBLE_LETTER_COORDINATES: [Coordinate; 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

/// # Returns
///
/// Every cell with a [bonus](Bonus) other than [`Bonus::None`] paired with its bonus.
pub fn bonus_layout() -> impl Iterator<Item = (Coordinate, Bonus)> {
    iter::empty()
        .chain(TRIPLE_WORD_COORDINATES.map(|c| (c, Bonus::TripleWord)))
        .chain(DOUBLE_WORD_COORDINATES.map(|c| (c, Bonus::DoubleWord)))
        .chain(TRIPLE_LETTER_COORDINATES.map(|c| (c, Bonus::TripleLetter)))
        .chain(DOUBLE_LETTER_COORDINATES.map(|c| (c, Bonus::DoubleLetter)))
}
