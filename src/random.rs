use crate::{
    Bag, Board, Coordinate, Direction, Hand, Hands, Move, Names, PlacedTile, Points, Tile, HAND_LEN,
    PLAYER_CAPACITY,
};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// It inserts a random, small, non-zero number of players. Each player gets a name,
/// `0` points, and an empty hand.
///
/// # Returns
///
/// The number of additional players.
pub fn random_players<R: Rng + ?Sized>(
    rng: &mut R,
    names: &mut Names,
    points: &mut Points,
    hands: &mut Hands,
) -> usize {
    let players = rng.gen_range(2..=PLAYER_CAPACITY);
    for _ in 0..players {
        names.push(format!("Player {}", names.len() + 1));
        points.push(0);
        hands.push(Hand::new());
    }

    players
}

/// Sets each player's points to a random, medium, non-zero number.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, points: &mut Points) {
    let possible_points = Uniform::from(100..200);
    points.fill_with(|| possible_points.sample(rng));
}

/// Pushes the same random, small, non-zero number of random [tiles](Tile) into
/// each player's hand.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in each player's hand.
pub fn random_hands<R: Rng + ?Sized>(rng: &mut R, hands: &mut Hands) -> usize {
    let hand_len = rng.gen_range(2..=HAND_LEN);
    for hand in hands {
        hand.extend((0..hand_len).map(|_| rng.gen::<Tile>()));
    }

    hand_len
}

/// A bag with a random, small, non-zero number of random [tiles](Tile).
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R) -> Bag {
    let bag_len = rng.gen_range(10..20);
    Bag::from((0..bag_len).map(|_| rng.gen::<Tile>()).collect::<Vec<_>>())
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

/// A full hand of random [tiles](Tile) where none of the [tiles](Tile) are in `excluded`.
pub fn random_hand_without<R: Rng + ?Sized>(rng: &mut R, excluded: &[Tile]) -> Hand {
    let mut hand = Hand::with_capacity(HAND_LEN);
    while hand.len() < HAND_LEN {
        let tile: Tile = rng.gen();
        if !excluded.contains(&tile) {
            hand.push(tile);
        }
    }

    hand
}

/// Writes the letters of `proposed` onto the empty cells of `board` without any validation.
/// Letters flagged as blank are placed as blanks. Letters off the board are dropped.
pub fn place_word(board: &mut Board, proposed: &Move) {
    for (index, (coordinate, letter, _)) in proposed.positions().enumerate() {
        if !board.is_occupied(coordinate) {
            // off the board is not an error for a fixture
            let _ = board.place(coordinate, PlacedTile::new(letter, proposed.is_blank(index)));
        }
    }
}

/// A board with each word written from its anchor in its direction. Cells which are
/// already occupied by an earlier word are kept.
///
/// # Panics
///
/// If some word contains a character which is not a [letter](crate::Letter).
pub fn board_with_words(
    words: impl IntoIterator<Item = (Coordinate, Direction, &'static str)>,
) -> Board {
    let mut board = Board::new();
    for (anchor, direction, word) in words {
        let proposed = Move::new(anchor, direction, word).expect("fixture words are letters");
        place_word(&mut board, &proposed);
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Letter, CENTER, ENGLISH_TILE_SET};

    #[test]
    fn random_players_empty() {
        let mut names = Names::new();
        let mut points = Points::new();
        let mut hands = Hands::new();

        let players = random_players(&mut rand::thread_rng(), &mut names, &mut points, &mut hands);

        assert_eq!(players, names.len());
        assert_eq!(players, points.len());
        assert_eq!(players, hands.len());
        assert!(points.iter().all(|&points| points == 0));
        assert!(hands.iter().all(|hand| hand.is_empty()));
    }

    #[test]
    fn random_hand_without_excluded() {
        let excluded = [Tile::Blank, Tile::Letter(Letter::E)];

        let hand = random_hand_without(&mut rand::thread_rng(), &excluded);

        assert_eq!(HAND_LEN, hand.len());
        assert!(hand.iter().all(|tile| !excluded.contains(tile)));
    }

    #[test]
    fn random_bag_is_small() {
        let bag = random_bag(&mut rand::thread_rng());

        assert!((10..20).contains(&bag.len()));
        assert!(bag.len() < ENGLISH_TILE_SET.len());
    }

    #[test]
    fn board_with_words_crossing() {
        let board = board_with_words([
            ((7, 5), Direction::Horizontal, "CAT"),
            ((6, 7), Direction::Vertical, "STY"),
        ]);

        assert_eq!(5, board.len());
        assert_eq!(
            Some(PlacedTile::new(Letter::T, false)),
            board.tile(CENTER)
        );
    }

    #[test]
    fn place_word_keeps_blank() {
        let mut board = Board::new();
        let proposed = Move::new(CENTER, Direction::Vertical, "AX")
            .expect("AX is letters")
            .with_blank(1);

        place_word(&mut board, &proposed);

        assert_eq!(Some(PlacedTile::new(Letter::X, true)), board.tile((8, 7)));
    }
}
