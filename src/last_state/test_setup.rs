use crate::{
    board_with_words, random_hands, random_players, random_points, Board, Direction, Hands,
    LastState, Names, Points,
};
use rand::Rng;

impl LastState {
    /// Generates an empty [`LastState`] with no players.
    ///
    /// # Returns
    ///
    /// A [`LastState`] struct with the properties set to the following:
    /// * `board`: An empty board.
    /// * `names`: An empty names vector.
    /// * `points`: An empty points vector.
    /// * `hands`: An empty hands vector.
    pub fn empty_last_state() -> LastState {
        LastState {
            board: Board::new(),
            names: Names::new(),
            points: Points::new(),
            hands: Hands::new(),
        }
    }

    /// Generates a last state with a random, small, non-zero number of players.
    /// The board holds `CAT` across the center and `STY` down through its `T`.
    /// All points are a random, medium, non-zero number.
    /// All hands contain the same random, small, non-zero number of random [tiles](crate::Tile).
    pub fn random_last_state<R: Rng + ?Sized>(rng: &mut R) -> LastState {
        let mut last_state = LastState::empty_last_state();
        last_state.board = board_with_words([
            ((7, 5), Direction::Horizontal, "CAT"),
            ((6, 7), Direction::Vertical, "STY"),
        ]);
        random_players(
            rng,
            &mut last_state.names,
            &mut last_state.points,
            &mut last_state.hands,
        );
        random_points(rng, &mut last_state.points);
        random_hands(rng, &mut last_state.hands);

        last_state
    }

    /// A mutable reference to `self.points`.
    pub fn mut_points(&mut self) -> &mut Points {
        &mut self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_last_state() {
        let last_state: LastState = LastState::empty_last_state();

        assert_eq!(Board::new(), last_state.board);
        assert_eq!(Names::new(), last_state.names);
        assert_eq!(Points::new(), last_state.points);
        assert_eq!(Hands::new(), last_state.hands);
    }

    #[test]
    fn random_last_state() {
        let last_state = LastState::random_last_state(&mut rand::thread_rng());

        assert_eq!(5, last_state.board.len());
        assert_eq!(last_state.names.len(), last_state.points.len());
        assert_eq!(last_state.names.len(), last_state.hands.len());
    }
}
