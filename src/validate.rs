use crate::{
    adjacent_coordinates, allocate_tiles, extract_word, is_inside_board, new_coordinates,
    trial_apply, Allocation, Board, Coordinate, Dictionary, Letter, Letters, Move, Tile, CENTER,
};
use std::fmt;
use tracing::instrument;

/// Describes the reason why a [move](Move) was rejected. The board, the bag and every hand are
/// left unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum MoveError {
    /// Attempting to spell a word which is not in the [dictionary](Dictionary).
    WordNotInDictionary {
        /// The word as spelled by the [move](Move).
        word: String,
    },
    /// Attempting to place a letter outside the board.
    OutOfBounds {
        /// The first [coordinate](Coordinate) outside the board.
        coordinate: Coordinate,
    },
    /// Attempting to place a letter on a cell covered by a different letter.
    LetterConflict {
        /// The [coordinate](Coordinate) of the covered cell.
        coordinate: Coordinate,
        /// The letter already on the board.
        existing: Letter,
        /// The letter the [move](Move) wanted to place.
        proposed: Letter,
    },
    /// Attempting to open the game without covering the [center](CENTER).
    MustCoverCenter,
    /// Attempting to place a word which neither touches nor runs through any
    /// [tile](crate::PlacedTile) on the board.
    Disconnected,
    /// Attempting to spell a word entirely from [tiles](crate::PlacedTile) already on the board.
    NoNewTiles,
    /// Attempting to place letters the hand cannot cover, even with blanks.
    InsufficientTiles {
        /// The letters left uncovered in move order.
        missing: Letters,
    },
    /// The whole word formed along the [move](Move), including adjacent
    /// [tiles](crate::PlacedTile), is not in the [dictionary](Dictionary).
    InvalidMainWord {
        /// The word formed along the [move](Move).
        word: String,
    },
    /// A word formed across the [move](Move) is not in the [dictionary](Dictionary).
    InvalidCrossWord {
        /// The cross word.
        word: String,
        /// The newly covered [coordinate](Coordinate) the cross word runs through.
        coordinate: Coordinate,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WordNotInDictionary { word } => {
                write!(f, "{} is not in the dictionary", word)
            }
            MoveError::OutOfBounds { coordinate } => {
                write!(f, "{:?} is outside the board", coordinate)
            }
            MoveError::LetterConflict {
                coordinate,
                existing,
                proposed,
            } => write!(
                f,
                "{:?} already holds {} instead of {}",
                coordinate, existing, proposed
            ),
            MoveError::MustCoverCenter => {
                write!(f, "the first word must cover the center {:?}", CENTER)
            }
            MoveError::Disconnected => write!(f, "the word must connect to a word on the board"),
            MoveError::NoNewTiles => write!(f, "the word must place at least one tile"),
            MoveError::InsufficientTiles { missing } => {
                write!(f, "not enough tiles for ")?;
                missing
                    .iter()
                    .try_for_each(|letter| write!(f, "{}", letter))
            }
            MoveError::InvalidMainWord { word } => {
                write!(f, "main word {} is not in the dictionary", word)
            }
            MoveError::InvalidCrossWord { word, coordinate } => write!(
                f,
                "cross word {} at {:?} is not in the dictionary",
                word, coordinate
            ),
        }
    }
}

/// The outcome of a successful [validation](validate): the board as it would look after the
/// [move](Move) and the hand [tiles](Tile) chosen to cover each new letter.
///
/// # See Also
///
/// * [commit_apply](crate::commit_apply)
/// * [consume_tiles](crate::consume_tiles)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Trial {
    after: Board,
    allocation: Allocation,
}

impl Trial {
    /// # Returns
    ///
    /// The scratch board with the [move](Move) placed.
    #[inline]
    pub fn after(&self) -> &Board {
        &self.after
    }

    /// # Returns
    ///
    /// The newly covered [coordinates](Coordinate) mapped to hand indexes.
    #[inline]
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) the [move](Move) takes from the hand.
    #[inline]
    pub fn new_tiles_len(&self) -> usize {
        self.allocation.len()
    }
}

/// Checks whether `proposed` is legal on `board` for a player holding `hand`.
///
/// # Checks
///
/// Checked in order, stopping at the first failure:
///
/// 1. The word spelled by the [move](Move) is in `dictionary`.
/// 2. Every letter is inside the board.
/// 3. No letter lands on a cell covered by a different letter. Running through the same
/// letter is allowed, whether or not that tile was a blank, and takes no tile from the hand.
/// 4. When `is_first_move`, a letter covers the [center](CENTER).
/// 5. Otherwise, a letter lands on or next to a covered cell.
/// 6. At least one letter lands on an empty cell.
/// 7. The hand can cover every letter landing on an empty cell (see [`allocate_tiles`]).
/// 8. On a scratch copy of the board with the [move](Move) placed, the whole word through
/// the anchor along the [move](Move) is in `dictionary`.
/// 9. On that copy, every word of more than one letter formed across a newly covered cell is
/// in `dictionary`.
///
/// `board` and `hand` are never changed.
///
/// # Errors
///
/// * [`MoveError::WordNotInDictionary`] Check 1.
/// * [`MoveError::OutOfBounds`] Check 2.
/// * [`MoveError::LetterConflict`] Check 3.
/// * [`MoveError::MustCoverCenter`] Check 4.
/// * [`MoveError::Disconnected`] Check 5.
/// * [`MoveError::NoNewTiles`] Check 6.
/// * [`MoveError::InsufficientTiles`] Check 7.
/// * [`MoveError::InvalidMainWord`] Check 8.
/// * [`MoveError::InvalidCrossWord`] Check 9.
///
/// # Returns
///
/// A [trial](Trial) which can be [committed](crate::commit_apply).
#[instrument(level = "debug", skip(board, hand, proposed, dictionary), fields(word = %proposed))]
pub fn validate<D: Dictionary + ?Sized>(
    board: &Board,
    hand: &[Tile],
    proposed: &Move,
    dictionary: &D,
    is_first_move: bool,
) -> Result<Trial, MoveError> {
    let word = proposed.word();
    if !dictionary.contains(&word) {
        return Err(MoveError::WordNotInDictionary { word });
    }

    if let Some(coordinate) = proposed
        .coordinates()
        .find(|&coordinate| !is_inside_board(coordinate))
    {
        return Err(MoveError::OutOfBounds { coordinate });
    }

    for (coordinate, proposed_letter, _) in proposed.positions() {
        match board.tile(coordinate) {
            Some(tile) if tile.letter() != proposed_letter => {
                return Err(MoveError::LetterConflict {
                    coordinate,
                    existing: tile.letter(),
                    proposed: proposed_letter,
                });
            }
            _ => {}
        }
    }

    if is_first_move {
        if !proposed.coordinates().any(|coordinate| coordinate == CENTER) {
            return Err(MoveError::MustCoverCenter);
        }
    } else if !proposed.coordinates().any(|coordinate| {
        board.is_occupied(coordinate)
            || adjacent_coordinates(coordinate)
                .into_iter()
                .any(|adjacent| board.is_occupied(adjacent))
    }) {
        return Err(MoveError::Disconnected);
    }

    let needed: Vec<_> = proposed
        .positions()
        .filter(|&(coordinate, _, _)| !board.is_occupied(coordinate))
        .map(|(coordinate, letter, _)| (coordinate, letter))
        .collect();
    if needed.is_empty() {
        return Err(MoveError::NoNewTiles);
    }

    let allocation =
        allocate_tiles(hand, needed).map_err(|missing| MoveError::InsufficientTiles { missing })?;

    let after = trial_apply(board, hand, proposed, &allocation);

    let main_word = extract_word(&after, proposed.anchor(), proposed.direction());
    if !dictionary.contains(&main_word) {
        return Err(MoveError::InvalidMainWord { word: main_word });
    }

    let across = proposed.direction().perpendicular();
    for coordinate in new_coordinates(board, proposed) {
        let cross_word = extract_word(&after, coordinate, across);
        if cross_word.len() > 1 && !dictionary.contains(&cross_word) {
            return Err(MoveError::InvalidCrossWord {
                word: cross_word,
                coordinate,
            });
        }
    }

    Ok(Trial { after, allocation })
}
