use crate::{Coordinate, Direction, Letter, Letters, WORD_CAPACITY};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A proposed placement of a word on the board which has not been validated yet.
///
/// The word starts at `anchor` and each following letter is one cell further in `direction`.
/// Some letters may run through [tiles](crate::PlacedTile) already on the board.
///
/// # Notation
///
/// A move is written as `x y H|V WORD` where `x` is the row, `y` is the column, `H` places
/// the word left to right and `V` places it top to bottom, for example `7 5 H CAT`.
///
/// # See Also
///
/// * [validate](crate::validate())
/// * [score_move](crate::score_move)
/// * [GameState::play](crate::GameState::play)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    anchor: Coordinate,
    direction: Direction,
    letters: Letters,
    /// Parallel to `letters`: whether that letter should be covered by a blank.
    blanks: SmallVec<[bool; WORD_CAPACITY]>,
}

/// Describes the reason why a [move](Move) could not be created from text.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ParseMoveError {
    /// Fewer than the `4` fields `x y H|V WORD`.
    MissingField,
    /// A coordinate field is not an integer.
    InvalidCoordinate {
        /// The text found in place of the coordinate.
        field: String,
    },
    /// The direction field is neither `H` nor `V`.
    InvalidDirection {
        /// The text found in place of the direction.
        field: String,
    },
    /// The word contains a character which is not an ASCII letter.
    InvalidLetter {
        /// The first offending character.
        character: char,
    },
    /// The word has no letters.
    EmptyWord,
    /// More than the `4` fields `x y H|V WORD`.
    TrailingInput {
        /// The first unexpected field.
        field: String,
    },
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::MissingField => write!(f, "expected `x y H|V WORD`"),
            ParseMoveError::InvalidCoordinate { field } => {
                write!(f, "`{}` is not a coordinate", field)
            }
            ParseMoveError::InvalidDirection { field } => {
                write!(f, "`{}` is not a direction, expected H or V", field)
            }
            ParseMoveError::InvalidLetter { character } => {
                write!(f, "`{}` is not a letter", character)
            }
            ParseMoveError::EmptyWord => write!(f, "the word is empty"),
            ParseMoveError::TrailingInput { field } => write!(f, "unexpected `{}`", field),
        }
    }
}

impl Move {
    /// Upper cases `word` and creates a [move](Move) where no letter asks for a blank.
    ///
    /// # Errors
    ///
    /// * [`ParseMoveError::EmptyWord`] When `word` is empty.
    /// * [`ParseMoveError::InvalidLetter`] When `word` contains anything but ASCII letters.
    pub fn new(
        anchor: Coordinate,
        direction: Direction,
        word: &str,
    ) -> Result<Move, ParseMoveError> {
        let letters = word
            .chars()
            .map(|character| {
                Letter::try_from(character)
                    .map_err(|character| ParseMoveError::InvalidLetter { character })
            })
            .collect::<Result<Letters, _>>()?;
        if letters.is_empty() {
            return Err(ParseMoveError::EmptyWord);
        }

        Ok(Move {
            anchor,
            direction,
            blanks: SmallVec::from_elem(false, letters.len()),
            letters,
        })
    }

    /// Marks the letter at `index` as one the player means to cover with a blank.
    /// Hand [tiles](crate::Tile) are still [allocated](crate::allocate_tiles) literal first, so
    /// the mark only decides anything when no hand is involved.
    /// An `index` past the end of the word is ignored.
    #[must_use]
    pub fn with_blank(mut self, index: usize) -> Move {
        if let Some(blank) = self.blanks.get_mut(index) {
            *blank = true;
        }
        self
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) of the first letter.
    #[inline]
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// # Returns
    ///
    /// The [direction](Direction) the word is placed in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// # Returns
    ///
    /// The letters of the word in order.
    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// # Returns
    ///
    /// The number of letters in the word, never `0`.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// # Returns
    ///
    /// The word as an upper case string.
    pub fn word(&self) -> String {
        self.letters.iter().map(|letter| letter.as_char()).collect()
    }

    /// # Returns
    ///
    /// Whether the letter at `index` asks for a blank.
    #[inline]
    pub fn is_blank(&self, index: usize) -> bool {
        self.blanks.get(index).copied().unwrap_or(false)
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) of each letter in order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.letters.len()).map(|index| self.direction.advance(self.anchor, index as isize))
    }

    /// # Returns
    ///
    /// For each letter in order: its [coordinate](Coordinate), the letter and whether it
    /// asks for a blank.
    pub fn positions(&self) -> impl Iterator<Item = (Coordinate, Letter, bool)> + '_ {
        self.coordinates()
            .zip(self.letters.iter().copied())
            .zip(self.blanks.iter().copied())
            .map(|((coordinate, letter), is_blank)| (coordinate, letter, is_blank))
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `x y H|V WORD`. The direction and the word are case insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let mut next = || fields.next().ok_or(ParseMoveError::MissingField);

        let coordinate = |field: &str| {
            field
                .parse::<isize>()
                .map_err(|_| ParseMoveError::InvalidCoordinate {
                    field: field.to_owned(),
                })
        };
        let x = coordinate(next()?)?;
        let y = coordinate(next()?)?;
        let direction = match next()? {
            field if field.eq_ignore_ascii_case("H") => Direction::Horizontal,
            field if field.eq_ignore_ascii_case("V") => Direction::Vertical,
            field => {
                return Err(ParseMoveError::InvalidDirection {
                    field: field.to_owned(),
                })
            }
        };
        let word = next()?;

        if let Some(field) = fields.next() {
            return Err(ParseMoveError::TrailingInput {
                field: field.to_owned(),
            });
        }

        Move::new((x, y), direction, word)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        };
        write!(
            f,
            "{} {} {} {}",
            self.anchor.0,
            self.anchor.1,
            direction,
            self.word()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_upper_cases() {
        let actual = Move::new((7, 5), Direction::Horizontal, "cAt").expect("should be Ok");

        assert_eq!("CAT", actual.word());
        assert_eq!(&[Letter::C, Letter::A, Letter::T], actual.letters());
        assert_eq!(3, actual.len());
        assert!((0..3).all(|index| !actual.is_blank(index)));
    }

    #[test]
    fn new_empty_word() {
        assert_eq!(
            Err(ParseMoveError::EmptyWord),
            Move::new((7, 7), Direction::Vertical, "")
        );
    }

    #[test]
    fn new_invalid_letter() {
        assert_eq!(
            Err(ParseMoveError::InvalidLetter { character: '?' }),
            Move::new((7, 7), Direction::Vertical, "C?T")
        );
    }

    #[test]
    fn with_blank() {
        let actual = Move::new((7, 7), Direction::Vertical, "QI")
            .expect("should be Ok")
            .with_blank(1)
            .with_blank(5);

        assert!(!actual.is_blank(0));
        assert!(actual.is_blank(1));
        assert!(!actual.is_blank(5));
    }

    #[test]
    fn horizontal_coordinates() {
        let actual = Move::new((7, 5), Direction::Horizontal, "CAT").expect("should be Ok");

        assert_eq!(
            vec![(7, 5), (7, 6), (7, 7)],
            actual.coordinates().collect::<Vec<_>>()
        );
    }

    #[test]
    fn vertical_positions() {
        let actual = Move::new((6, 7), Direction::Vertical, "ST")
            .expect("should be Ok")
            .with_blank(0);

        assert_eq!(
            vec![((6, 7), Letter::S, true), ((7, 7), Letter::T, false)],
            actual.positions().collect::<Vec<_>>()
        );
    }

    #[test]
    fn parse() {
        let actual: Move = "7 5 h cat".parse().expect("should parse");

        assert_eq!(
            Move::new((7, 5), Direction::Horizontal, "CAT").expect("should be Ok"),
            actual
        );
        assert_eq!("7 5 H CAT", actual.to_string());
    }

    #[test]
    fn parse_negative_coordinate() {
        let actual: Move = "-1 3 V DOG".parse().expect("should parse");

        assert_eq!((-1, 3), actual.anchor());
        assert_eq!(Direction::Vertical, actual.direction());
    }

    #[test]
    fn parse_errors() {
        let cases = [
            ("", ParseMoveError::MissingField),
            ("7 7 H", ParseMoveError::MissingField),
            (
                "seven 7 H CAT",
                ParseMoveError::InvalidCoordinate {
                    field: "seven".to_owned(),
                },
            ),
            (
                "7 7 D CAT",
                ParseMoveError::InvalidDirection {
                    field: "D".to_owned(),
                },
            ),
            (
                "7 7 H C4T",
                ParseMoveError::InvalidLetter { character: '4' },
            ),
            (
                "7 7 H CAT DOG",
                ParseMoveError::TrailingInput {
                    field: "DOG".to_owned(),
                },
            ),
        ];

        for (input, expected_error) in cases {
            assert_eq!(Err(expected_error), input.parse::<Move>(), "{:?}", input);
        }
    }
}
