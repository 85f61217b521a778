use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The number of [`Tile`] variants. 26 letters and the blank.
pub const TILES_LEN: usize = Letter::LETTERS_LEN + 1;

/// Describes one of the 26 letters of the English alphabet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Letter {
    /// `0`.
    A = 0,
    /// `1`.
    B = 1,
    /// `2`.
    C = 2,
    /// `3`.
    D = 3,
    /// `4`.
    E = 4,
    /// `5`.
    F = 5,
    /// `6`.
    G = 6,
    /// `7`.
    H = 7,
    /// `8`.
    I = 8,
    /// `9`.
    J = 9,
    /// `10`.
    K = 10,
    /// `11`.
    L = 11,
    /// `12`.
    M = 12,
    /// `13`.
    N = 13,
    /// `14`.
    O = 14,
    /// `15`.
    P = 15,
    /// `16`.
    Q = 16,
    /// `17`.
    R = 17,
    /// `18`.
    S = 18,
    /// `19`.
    T = 19,
    /// `20`.
    U = 20,
    /// `21`.
    V = 21,
    /// `22`.
    W = 22,
    /// `23`.
    X = 23,
    /// `24`.
    Y = 24,
    /// `25`.
    Z = 25,
}

impl Letter {
    /// The number of [`Letter`] variants. 26 letters.
    pub const LETTERS_LEN: usize = 26;

    /// # Returns
    ///
    /// An array of all [`Letter`] variants in alphabetical order.
    #[inline]
    pub fn letters() -> [Letter; Letter::LETTERS_LEN] {
        use Letter::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    }

    /// # Returns
    ///
    /// The [`Letter`] at `index` in alphabetical order or [`None`] if `index` is not in
    /// the range `0..`[Letter::LETTERS_LEN].
    #[inline]
    pub fn from_index(index: usize) -> Option<Letter> {
        num::FromPrimitive::from_usize(index)
    }

    /// # Returns
    ///
    /// The upper case ASCII character of the letter.
    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'A' + self as u8)
    }

    /// # Returns
    ///
    /// The number of points the letter is worth in the [English tile set](ENGLISH_TILE_SET).
    #[inline]
    pub fn value(self) -> usize {
        ENGLISH_TILE_SET.letter_value(self)
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    /// Converts an ASCII letter of either case. Any other character is returned as the error.
    fn try_from(character: char) -> Result<Self, Self::Error> {
        if !character.is_ascii_alphabetic() {
            return Err(character);
        }
        let index = character.to_ascii_uppercase() as usize - 'A' as usize;
        Letter::from_index(index).ok_or(character)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Distribution<Letter> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Letter {
        let index = rng.gen_range(0..Letter::LETTERS_LEN);
        Letter::from_index(index).unwrap_or_else(|| {
            dbg!(index, Letter::LETTERS_LEN);
            unreachable!(
                "index ({:?}) should be matched since letters cover all indexes \
                in range 0..Letter::LETTERS_LEN (0..{:?}).",
                index,
                Letter::LETTERS_LEN
            );
        })
    }
}

/// Describes a tile in the bag or in a hand before it is placed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tile {
    /// A tile printed with a [letter](Letter).
    Letter(Letter),
    /// A blank tile which may stand for any [letter](Letter) and is worth `0` points.
    Blank,
}

impl Tile {
    /// # Returns
    ///
    /// The number of points the tile is worth.
    #[inline]
    pub fn value(self) -> usize {
        ENGLISH_TILE_SET.value(self)
    }

    /// # Returns
    ///
    /// Whether the tile is a [blank](Tile::Blank).
    #[inline]
    pub fn is_blank(self) -> bool {
        self == Tile::Blank
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{}", letter),
            Tile::Blank => write!(f, "?"),
        }
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        match Letter::from_index(rng.gen_range(0..TILES_LEN)) {
            Some(letter) => Tile::Letter(letter),
            None => Tile::Blank,
        }
    }
}

/// Describes a tile once it has been placed on the board. A blank is given a letter when it is
/// placed and keeps that letter for the rest of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlacedTile {
    /// The letter shown on the board.
    letter: Letter,
    /// Whether the tile was a [blank](Tile::Blank) in the hand.
    is_blank: bool,
}

impl PlacedTile {
    /// # Returns
    ///
    /// A [`PlacedTile`] showing `letter`.
    #[inline]
    pub fn new(letter: Letter, is_blank: bool) -> PlacedTile {
        PlacedTile { letter, is_blank }
    }

    /// # Returns
    ///
    /// The letter shown on the board.
    #[inline]
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// # Returns
    ///
    /// Whether the tile was a [blank](Tile::Blank) in the hand.
    #[inline]
    pub fn is_blank(self) -> bool {
        self.is_blank
    }

    /// # Returns
    ///
    /// The points the tile is worth in `tile_set`, always `0` for a blank whatever letter it shows.
    #[inline]
    pub fn value(self, tile_set: &TileSet) -> usize {
        if self.is_blank {
            0
        } else {
            tile_set.letter_value(self.letter)
        }
    }
}

/// Static tables of how many copies of each [tile](Tile) a game starts with and
/// how many points each [letter](Letter) is worth.
///
/// # See Also
///
/// * [`ENGLISH_TILE_SET`]
/// * [Bag::new](crate::Bag::new)
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TileSet {
    letter_counts: [usize; Letter::LETTERS_LEN],
    letter_values: [usize; Letter::LETTERS_LEN],
    blank_count: usize,
}

impl TileSet {
    /// # Arguments
    ///
    /// * `letter_counts`: The number of copies of each [letter](Letter) in alphabetical order.
    /// * `letter_values`: The points of each [letter](Letter) in alphabetical order.
    /// * `blank_count`: The number of [blanks](Tile::Blank).
    ///
    /// # Returns
    ///
    /// A [`TileSet`] with tables owned from arguments.
    pub const fn new(
        letter_counts: [usize; Letter::LETTERS_LEN],
        letter_values: [usize; Letter::LETTERS_LEN],
        blank_count: usize,
    ) -> TileSet {
        TileSet {
            letter_counts,
            letter_values,
            blank_count,
        }
    }

    /// # Returns
    ///
    /// The number of copies of `tile` in a full bag.
    #[inline]
    pub fn count(&self, tile: Tile) -> usize {
        match tile {
            Tile::Letter(letter) => self.letter_counts[letter as usize],
            Tile::Blank => self.blank_count,
        }
    }

    /// # Returns
    ///
    /// The points `letter` is worth.
    #[inline]
    pub fn letter_value(&self, letter: Letter) -> usize {
        self.letter_values[letter as usize]
    }

    /// # Returns
    ///
    /// The points `tile` is worth. [Blanks](Tile::Blank) are always worth `0`.
    #[inline]
    pub fn value(&self, tile: Tile) -> usize {
        match tile {
            Tile::Letter(letter) => self.letter_value(letter),
            Tile::Blank => 0,
        }
    }

    /// # Returns
    ///
    /// The number of tiles in a full bag.
    pub fn len(&self) -> usize {
        self.letter_counts.iter().sum::<usize>() + self.blank_count
    }

    /// # Returns
    ///
    /// Whether a full bag would hold no tiles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Returns
    ///
    /// Every tile of a full bag in alphabetical order followed by the blanks.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Letter::letters()
            .into_iter()
            .map(Tile::Letter)
            .chain(std::iter::once(Tile::Blank))
            .flat_map(|tile| std::iter::repeat(tile).take(self.count(tile)))
    }
}

/// The English distribution of 100 tiles with its standard point values.
///
/// | Points | Letters |
/// | --- | --- |
/// | 0 | blank |
/// | 1 | A, E, I, O, U, L, N, S, T, R |
/// | 2 | D, G |
/// | 3 | B, C, M, P |
/// | 4 | F, H, V, W, Y |
/// | 5 | K |
/// | 8 | J, X |
/// | 10 | Q, Z |
pub const ENGLISH_TILE_SET: TileSet = TileSet::new(
    // A  B  C  D  E   F  G  H  I  J  K  L  M  N  O  P  Q  R  S  T  U  V  W  X  Y  Z
    [9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1],
    [1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10],
    2,
);
