use crate::{
    random_current_player, random_hands, random_players, random_points, Bag, Board, GameState,
    Hands, Names, Points,
};
use rand::Rng;

impl GameState {
    /// Generates an empty [`GameState`] with no players.
    ///
    /// # Returns
    ///
    /// A [`GameState`] struct with the properties set to the following:
    /// * `bag`: An empty bag.
    /// * `board`: An empty board.
    /// * `names`: An empty names vector.
    /// * `points`: An empty points vector.
    /// * `hands`: An empty hands vector.
    /// * `current_player`: `0`.
    /// * `passes`: `0`.
    pub fn empty_game_state() -> GameState {
        GameState {
            bag: Bag::from(Vec::new()),
            board: Board::new(),
            names: Names::new(),
            points: Points::new(),
            hands: Hands::new(),
            current_player: 0,
            passes: 0,
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.names`.
    pub fn mut_names(&mut self) -> &mut Names {
        &mut self.names
    }

    /// A mutable reference to `self.points`.
    pub fn mut_points(&mut self) -> &mut Points {
        &mut self.points
    }

    /// A mutable reference to `self.hands`.
    pub fn mut_hands(&mut self) -> &mut Hands {
        &mut self.hands
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.passes`.
    pub fn mut_passes(&mut self) -> &mut usize {
        &mut self.passes
    }

    /// It inserts a random, small, non-zero number of players with names, `0` points,
    /// and empty hands.
    ///
    /// # Returns
    ///
    /// The number of additional players.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_players(rng, &mut self.names, &mut self.points, &mut self.hands)
    }

    /// Sets each player's points to a random, medium, non-zero number.
    pub fn random_points<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_points(rng, &mut self.points)
    }

    /// Pushes the same random, small, non-zero number of random [tiles](crate::Tile) into
    /// each player's hand.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in each player's hand.
    pub fn random_hands<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_hands(rng, &mut self.hands)
    }

    /// Sets the current player to a random player.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player, self.hands.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_game_state() {
        let game_state = GameState::empty_game_state();

        assert!(game_state.bag.is_empty());
        assert!(game_state.board.is_empty());
        assert!(game_state.names.is_empty());
        assert!(game_state.points.is_empty());
        assert!(game_state.hands.is_empty());
        assert_eq!(0, game_state.current_player);
        assert_eq!(0, game_state.passes);
    }
}
