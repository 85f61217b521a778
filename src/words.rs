use crate::{Board, Coordinate, Direction};
use itertools::Itertools;

/// Walks backwards from `coordinate` in `direction` while cells stay covered.
///
/// # Returns
///
/// The [coordinate](Coordinate) of the first letter of the word through `coordinate`.
pub fn word_start(board: &Board, coordinate: Coordinate, direction: Direction) -> Coordinate {
    (1..)
        .map(|offset| direction.advance(coordinate, -offset))
        .take_while(|&previous| board.is_occupied(previous))
        .last()
        .unwrap_or(coordinate)
}

/// Finds the maximal run of covered cells through `coordinate` in `direction`.
///
/// # Returns
///
/// The [coordinates](Coordinate) of the word in reading order. Empty when the cell at
/// `coordinate` is not covered, a single [coordinate](Coordinate) when the covered cell has no
/// covered neighbor in `direction`.
pub fn word_coordinates(
    board: &Board,
    coordinate: Coordinate,
    direction: Direction,
) -> Vec<Coordinate> {
    if !board.is_occupied(coordinate) {
        return Vec::new();
    }
    let start = word_start(board, coordinate, direction);
    (0..)
        .map(|offset| direction.advance(start, offset))
        .map(|next| board.is_occupied(next).then_some(next))
        .while_some()
        .collect_vec()
}

/// Reads the word through `coordinate` in `direction`. Call it on the board after the
/// [move](crate::Move) has been placed to see the whole word.
///
/// # Returns
///
/// The letters of [`word_coordinates`] as an upper case string.
pub fn extract_word(board: &Board, coordinate: Coordinate, direction: Direction) -> String {
    word_coordinates(board, coordinate, direction)
        .into_iter()
        .filter_map(|coordinate| board.tile(coordinate))
        .map(|tile| tile.letter().as_char())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board_with_words, BOARD_LEN, CENTER};

    #[test]
    fn empty_cell() {
        let board = Board::new();

        assert!(word_coordinates(&board, CENTER, Direction::Horizontal).is_empty());
        assert_eq!("", extract_word(&board, CENTER, Direction::Vertical));
    }

    #[test]
    fn isolated_tile() {
        let board = board_with_words([((7, 7), Direction::Horizontal, "Q")]);

        assert_eq!("Q", extract_word(&board, CENTER, Direction::Horizontal));
        assert_eq!("Q", extract_word(&board, CENTER, Direction::Vertical));
    }

    #[test]
    fn from_any_letter() {
        let board = board_with_words([((7, 5), Direction::Horizontal, "CAT")]);

        for column in 5..=7 {
            assert_eq!("CAT", extract_word(&board, (7, column), Direction::Horizontal));
            assert_eq!((7, 5), word_start(&board, (7, column), Direction::Horizontal));
        }
        assert_eq!("A", extract_word(&board, (7, 6), Direction::Vertical));
    }

    #[test]
    fn crossing_words() {
        let board = board_with_words([
            ((7, 5), Direction::Horizontal, "CAT"),
            ((5, 7), Direction::Vertical, "OAT"),
        ]);

        assert_eq!("CAT", extract_word(&board, (7, 6), Direction::Horizontal));
        assert_eq!("OAT", extract_word(&board, (5, 7), Direction::Vertical));
        assert_eq!(
            vec![(5, 7), (6, 7), (7, 7)],
            word_coordinates(&board, (7, 7), Direction::Vertical)
        );
    }

    #[test]
    fn stops_at_gap() {
        let board = board_with_words([
            ((3, 0), Direction::Horizontal, "AX"),
            ((3, 3), Direction::Horizontal, "OX"),
        ]);

        assert_eq!("AX", extract_word(&board, (3, 1), Direction::Horizontal));
        assert_eq!("OX", extract_word(&board, (3, 3), Direction::Horizontal));
    }

    #[test]
    fn stops_at_edges() {
        let last = BOARD_LEN as isize - 1;
        let board = board_with_words([
            ((0, 0), Direction::Vertical, "ZA"),
            ((last - 1, last), Direction::Vertical, "AX"),
        ]);

        assert_eq!("ZA", extract_word(&board, (1, 0), Direction::Vertical));
        assert_eq!("AX", extract_word(&board, (last - 1, last), Direction::Vertical));
        assert_eq!((0, 0), word_start(&board, (1, 0), Direction::Vertical));
    }
}
