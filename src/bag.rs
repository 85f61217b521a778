use crate::{Hand, Tile, TileSet, HAND_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. It only ever shrinks.
///
/// # See Also
///
/// * [`TileSet`]
/// * [`fill_hand`]
/// * [GameState](crate::GameState)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// # Returns
    ///
    /// A full, unshuffled bag with every [tile](Tile) of `tile_set`.
    pub fn new(tile_set: &TileSet) -> Bag {
        let mut tiles = Vec::with_capacity(tile_set.len());
        tiles.extend(tile_set.tiles());
        Bag { tiles }
    }

    /// Randomizes the order the remaining [tiles](Tile) will be drawn in.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// Removes the next [tile](Tile).
    ///
    /// # Returns
    ///
    /// The drawn [tile](Tile) or [`None`] when the bag [is empty](Bag::is_empty).
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// # Returns
    ///
    /// The number of remaining [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// # Returns
    ///
    /// Whether no [tiles](Tile) remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Returns
    ///
    /// The remaining [tiles](Tile) where the last one is drawn first.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl From<Vec<Tile>> for Bag {
    fn from(tiles: Vec<Tile>) -> Self {
        Bag { tiles }
    }
}

/// Draws [tiles](Tile) from `bag` until `hand` holds [`HAND_LEN`] [tiles](Tile)
/// or `bag` is empty.
///
/// # Returns
///
/// The number of [tiles](Tile) drawn.
pub fn fill_hand(hand: &mut Hand, bag: &mut Bag) -> usize {
    let missing = HAND_LEN.saturating_sub(hand.len());
    // when the bag is empty, no more tiles will be drained
    let first_drawn = bag.tiles.len().saturating_sub(missing);
    let before = hand.len();
    hand.extend(bag.tiles.drain(first_drawn..).rev());
    hand.len() - before
}
