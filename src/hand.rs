use crate::{Allocation, Coordinate, Hand, Letter, Letters, Tile, HAND_LEN};
use smallvec::SmallVec;

/// Chooses one distinct [tile](Tile) of `hand` for every letter a move must newly place.
///
/// Each letter is taken in order. A letter takes the first unused [tile](Tile) printed with
/// that letter, and only falls back to the first unused [blank](Tile::Blank) when none is left.
/// Whether a move marks a letter as a blank does not change the choice.
///
/// [`consume_tiles`] removes exactly the [tiles](Tile) chosen here, so the [tiles](Tile)
/// checked and the [tiles](Tile) consumed never differ.
///
/// # Arguments
///
/// * `hand`: The [tiles](Tile) held by the player making the move.
/// * `needed`: For each newly covered [coordinate](Coordinate), the letter placed there.
///
/// # Errors
///
/// The letters that could not be covered by any unused [tile](Tile), in move order.
///
/// # Returns
///
/// An [allocation](Allocation) of newly covered [coordinates](Coordinate) to hand indexes.
pub fn allocate_tiles(
    hand: &[Tile],
    needed: impl IntoIterator<Item = (Coordinate, Letter)>,
) -> Result<Allocation, Letters> {
    let mut allocation = Allocation::new();
    let mut missing = Letters::new();

    for (coordinate, letter) in needed {
        let unused = |wanted: Tile| {
            hand.iter()
                .enumerate()
                .find(|&(index, &tile)| tile == wanted && !allocation.contains_right(&index))
                .map(|(index, _)| index)
        };
        match unused(Tile::Letter(letter)).or_else(|| unused(Tile::Blank)) {
            Some(index) => {
                allocation.insert(coordinate, index);
            }
            None => missing.push(letter),
        }
    }

    if missing.is_empty() {
        Ok(allocation)
    } else {
        Err(missing)
    }
}

/// Removes every [tile](Tile) chosen by [`allocate_tiles`] from `hand`. Indexes which are not in
/// `hand` are skipped.
///
/// # Returns
///
/// The removed [tiles](Tile) ordered by their previous index in `hand`.
pub fn consume_tiles(hand: &mut Hand, allocation: &Allocation) -> Hand {
    let mut indexes: SmallVec<[usize; HAND_LEN]> = allocation
        .right_values()
        .copied()
        .filter(|&index| index < hand.len())
        .collect();
    indexes.sort_unstable_by(|a, b| b.cmp(a));

    let mut removed: Hand = indexes.into_iter().map(|index| hand.remove(index)).collect();
    removed.reverse();
    removed
}
