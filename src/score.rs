use crate::{
    new_coordinates, word_coordinates, Board, Coordinate, Direction, Move, TileSet, BINGO_BONUS,
    HAND_LEN,
};

/// Scores the word through `coordinate` in `direction` on `after`.
///
/// # Points Calculation
///
/// The value of each letter in the word is looked up in `tile_set` and added up. A letter on a cell which was empty on
/// `before` is multiplied by the [letter multiplier](crate::Bonus::letter_multiplier) of its
/// cell, and the sum is multiplied by the product of the
/// [word multipliers](crate::Bonus::word_multiplier) of every such cell. Bonuses under
/// [tiles](crate::PlacedTile) already on `before` were used up on an earlier turn and count
/// nothing. [Blanks](crate::Tile::Blank) are worth `0` whatever letter they show.
///
/// # Returns
///
/// The points of the word, `0` when the cell at `coordinate` is empty on `after`.
pub fn score_word(
    tile_set: &TileSet,
    before: &Board,
    after: &Board,
    coordinate: Coordinate,
    direction: Direction,
) -> usize {
    let (sum, word_multiplier) = word_coordinates(after, coordinate, direction)
        .into_iter()
        .fold((0, 1), |(sum, word_multiplier), coordinate| {
            let value = after
                .tile(coordinate)
                .map_or(0, |tile| tile.value(tile_set));
            match before.cell(coordinate) {
                Some(cell) if !cell.is_occupied() => (
                    sum + value * cell.bonus().letter_multiplier(),
                    word_multiplier * cell.bonus().word_multiplier(),
                ),
                _ => (sum + value, word_multiplier),
            }
        });
    sum * word_multiplier
}

/// Scores an accepted [move](Move) once it has been placed.
///
/// # Points Calculation
///
/// The [main word](score_word) along the [move](Move) is scored once. Then every word of more
/// than one letter formed across a newly covered cell is scored the same way. When the
/// [move](Move) covered exactly [`HAND_LEN`] empty cells, [`BINGO_BONUS`] points are added.
///
/// # Arguments
///
/// * `tile_set`: The [`TileSet`] the letter values come from.
/// * `before`: The board before the [move](Move) was placed.
/// * `after`: The board after the [move](Move) was placed.
/// * `proposed`: The accepted [move](Move).
///
/// # Returns
///
/// The points earned by the [move](Move).
pub fn score_move(tile_set: &TileSet, before: &Board, after: &Board, proposed: &Move) -> usize {
    let main_word = score_word(tile_set, before, after, proposed.anchor(), proposed.direction());

    let across = proposed.direction().perpendicular();
    let cross_words: usize = new_coordinates(before, proposed)
        .filter(|&coordinate| word_coordinates(after, coordinate, across).len() > 1)
        .map(|coordinate| score_word(tile_set, before, after, coordinate, across))
        .sum();

    let bingo = if new_coordinates(before, proposed).count() == HAND_LEN {
        BINGO_BONUS
    } else {
        0
    };

    main_word + cross_words + bingo
}
