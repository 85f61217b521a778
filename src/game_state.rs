use crate::{
    fill_hand, Bag, Board, Hand, Hands, LastState, Names, Points, ENGLISH_TILE_SET, HAND_LEN,
};
pub use game_view::*;
use rand::Rng;
use std::fmt;
use tap::Tap;

mod game_pass;
mod game_play;
mod game_view;
#[cfg(test)]
mod test_setup;

/// Owns the state of a game in progress and implements methods. Created from [`GameState::new`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// The board with every [tile](crate::PlacedTile) played so far.
    board: Board,
    /// A vector of names for each player.
    names: Names,
    /// A vector of points for each player.
    points: Points,
    /// A vector of hands, where each hand is a vector of [tiles](crate::Tile).
    hands: Hands,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The number of turns in a row which were passed.
    passes: usize,
}

/// Describes the reason why [`GameState`] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting [to start](GameState::new) with empty players.
    EmptyPlayers,
    /// Attempting to request more [tiles](crate::Tile) than [tiles](crate::Tile) in the bag.
    NotEnoughTiles {
        /// The number of [tiles](crate::Tile) requested for hands.
        requested_tiles: usize,
        /// The number of available [tiles](crate::Tile) in the bag.
        tiles_in_bag: usize,
    },
}

impl fmt::Display for NewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewError::EmptyPlayers => write!(f, "a game needs at least one player"),
            NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag,
            } => write!(
                f,
                "{} tiles are needed for the hands but the bag holds {}",
                requested_tiles, tiles_in_bag
            ),
        }
    }
}

impl GameState {
    /// Creates a shuffled bag of the [English tile set](ENGLISH_TILE_SET) and then draws
    /// [`HAND_LEN`] [tiles](crate::Tile) from the bag for each player in order.
    /// The first player named starts.
    ///
    /// # Arguments
    ///
    /// * `names`: The name of each player in turn order.
    ///
    /// # Errors
    ///
    /// * [`NewError::EmptyPlayers`] Attempting [to start](GameState::new) with empty players.
    /// * [`NewError::NotEnoughTiles`] Attempting to request more [tiles](crate::Tile)
    /// than [tiles](crate::Tile) in the bag.
    ///
    /// # See Also
    ///
    /// * [`GameState::new_with_rng`]
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, NewError> {
        GameState::new_with_rng(&mut rand::thread_rng(), names)
    }

    /// Same as [`GameState::new`] but shuffles the bag with `rng`.
    ///
    /// # Errors
    ///
    /// * [`NewError::EmptyPlayers`] Attempting [to start](GameState::new) with empty players.
    /// * [`NewError::NotEnoughTiles`] Attempting to request more [tiles](crate::Tile)
    /// than [tiles](crate::Tile) in the bag.
    pub fn new_with_rng<R: Rng + ?Sized, S: Into<String>>(
        rng: &mut R,
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, NewError> {
        let names: Names = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(NewError::EmptyPlayers);
        }

        let mut bag = Bag::new(&ENGLISH_TILE_SET);
        let requested_tiles = names.len() * HAND_LEN;
        if requested_tiles > bag.len() {
            return Err(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag: bag.len(),
            });
        }
        bag.shuffle(rng);

        let hands: Hands = names
            .iter()
            .map(|_| {
                Hand::with_capacity(HAND_LEN).tap_mut(|hand| {
                    fill_hand(hand, &mut bag);
                })
            })
            .collect();

        Ok(GameState {
            bag,
            board: Board::new(),
            points: names.iter().map(|_| 0).collect(),
            names,
            hands,
            current_player: 0,
            passes: 0,
        })
    }

    /// # Returns
    ///
    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// # Returns
    ///
    /// Whether no word has been played yet, so the next [play](GameState::play)
    /// must cover the [center](crate::CENTER).
    #[inline]
    pub fn is_first_move(&self) -> bool {
        self.board.is_empty()
    }

    /// The game is not ended by this condition. An external loop which wants to end the game
    /// when it holds calls [`GameState::finish`].
    ///
    /// # Returns
    ///
    /// Whether the bag is empty and some player's hand is empty. Checked after a
    /// [play](GameState::play) this sees the hand of the player who just moved, since the turn
    /// has already advanced.
    pub fn is_exhausted(&self) -> bool {
        self.bag.is_empty() && self.hands.iter().any(|hand| hand.is_empty())
    }

    /// Ends the game whatever its state.
    ///
    /// # Returns
    ///
    /// The [last state](LastState) of the game.
    pub fn finish(self) -> LastState {
        LastState::new(self.board, self.names, self.points, self.hands)
    }

    /// Advances to the next player, looping back to `0` after the last player.
    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.hands.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tile, PLAYER_CAPACITY};
    use itertools::Itertools;

    #[test]
    fn new_deals_hands() {
        let game_state = GameState::new(["Teddy", "Woody"]).expect("new should return Ok");

        assert_eq!(0, game_state.current_player());
        assert!(game_state.is_first_move());
        assert_eq!(2, game_state.hands.len());
        for hand in &game_state.hands {
            assert_eq!(HAND_LEN, hand.len());
        }
        assert_eq!(
            ENGLISH_TILE_SET.len() - 2 * HAND_LEN,
            game_state.bag.len()
        );
        assert_eq!(&[0, 0], game_state.points.as_slice());
        assert_eq!(&["Teddy", "Woody"], game_state.names.as_slice());
    }

    #[test]
    fn new_keeps_every_tile() {
        let mut rng = rand::thread_rng();
        let players = rng.gen_range(1..=PLAYER_CAPACITY);
        let game_state = GameState::new_with_rng(&mut rng, (0..players).map(|p| p.to_string()))
            .expect("new should return Ok");

        let actual: Vec<Tile> = game_state
            .hands
            .iter()
            .flatten()
            .chain(game_state.bag.tiles())
            .copied()
            .sorted()
            .collect();
        let expected: Vec<Tile> = ENGLISH_TILE_SET.tiles().sorted().collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn new_empty_players() {
        assert_eq!(
            Err(NewError::EmptyPlayers),
            GameState::new(Vec::<String>::new())
        );
    }

    #[test]
    fn new_not_enough_tiles() {
        let players = ENGLISH_TILE_SET.len() / HAND_LEN + 1;

        assert_eq!(
            Err(NewError::NotEnoughTiles {
                requested_tiles: players * HAND_LEN,
                tiles_in_bag: ENGLISH_TILE_SET.len(),
            }),
            GameState::new((0..players).map(|p| p.to_string()))
        );
    }

    #[test]
    fn is_exhausted_any_empty_hand() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state();
        let players = game_state.random_players(&mut rng);
        game_state.random_hands(&mut rng);
        game_state.random_current_player(&mut rng);

        assert!(!game_state.is_exhausted());

        let emptied = (game_state.current_player() + 1) % players;
        game_state.hands[emptied].clear();

        assert!(game_state.is_exhausted());

        game_state.bag = Bag::from(vec![Tile::Blank]);

        assert!(!game_state.is_exhausted());
    }

    #[test]
    fn finish() {
        let mut rng = rand::thread_rng();
        let mut game_state = GameState::empty_game_state();
        game_state.random_players(&mut rng);
        game_state.random_points(&mut rng);
        let points = game_state.points.clone();

        let last_state = game_state.finish();

        assert_eq!(&points, last_state.last_view().points);
    }
}
