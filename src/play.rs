use crate::{Allocation, Board, Coordinate, Move, PlacedTile, Tile, WORD_CAPACITY};
use smallvec::SmallVec;

/// Finds the [coordinates](Coordinate) of a [move](Move) which are empty on `before`. Letters
/// running through [tiles](PlacedTile) already on the board and letters outside the board
/// are skipped.
///
/// # Returns
///
/// The [coordinates](Coordinate) newly covered by `proposed` in move order.
pub fn new_coordinates<'a>(
    before: &'a Board,
    proposed: &'a Move,
) -> impl Iterator<Item = Coordinate> + 'a {
    proposed.coordinates().filter(move |&coordinate| {
        before
            .cell(coordinate)
            .map_or(false, |cell| !cell.is_occupied())
    })
}

/// Pairs each newly covered [coordinate](Coordinate) with the [tile](PlacedTile) that will
/// cover it. The [tile](PlacedTile) is a blank exactly when the allocated hand
/// [tile](Tile) is a [blank](Tile::Blank).
fn placements(
    board: &Board,
    hand: &[Tile],
    proposed: &Move,
    allocation: &Allocation,
) -> SmallVec<[(Coordinate, PlacedTile); WORD_CAPACITY]> {
    proposed
        .positions()
        .enumerate()
        .filter(|&(_, (coordinate, _, _))| {
            board
                .cell(coordinate)
                .map_or(false, |cell| !cell.is_occupied())
        })
        .map(|(index, (coordinate, letter, _))| {
            let is_blank = allocation
                .get_by_left(&coordinate)
                .and_then(|&hand_index| hand.get(hand_index))
                .map_or(proposed.is_blank(index), |tile| tile.is_blank());
            (coordinate, PlacedTile::new(letter, is_blank))
        })
        .collect()
}

/// Places `proposed` on a copy of `board`. `board` itself is never changed, and the copy
/// is dropped by the caller once validation finishes.
///
/// # Returns
///
/// The board as it would look after the [move](Move).
pub fn trial_apply(
    board: &Board,
    hand: &[Tile],
    proposed: &Move,
    allocation: &Allocation,
) -> Board {
    let mut scratch = board.clone();
    commit_apply(&mut scratch, hand, proposed, allocation);
    scratch
}

/// Places the letters of an accepted [move](Move) on `board`. Only empty cells are covered.
///
/// Must be called before the allocated [tiles](Tile) are
/// [consumed](crate::consume_tiles) from `hand`.
///
/// # Returns
///
/// The number of [tiles](PlacedTile) placed.
pub fn commit_apply(
    board: &mut Board,
    hand: &[Tile],
    proposed: &Move,
    allocation: &Allocation,
) -> usize {
    let mut placed = 0;
    for (coordinate, tile) in placements(board, hand, proposed, allocation) {
        if board.place(coordinate, tile).is_ok() {
            placed += 1;
        }
    }
    placed
}
