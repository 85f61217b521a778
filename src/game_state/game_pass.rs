use crate::{GameState, LastState};
use either::Either;
use tracing::debug;

impl GameState {
    /// Skips the current player's turn without touching the board, the bag, or any hand.
    ///
    /// The game ends once every player has passed in a row, that is when the number of
    /// consecutive passes reaches the number of players. A [play](GameState::play) resets
    /// the count.
    ///
    /// # Returns
    ///
    /// * [`Either::Left`] The game with the next player to move.
    /// * [`Either::Right`] The [last state](LastState) of the game if it has ended.
    pub fn pass(mut self) -> Either<GameState, LastState> {
        self.passes += 1;
        debug!(
            player = self.current_player,
            passes = self.passes,
            "passed turn"
        );

        if self.passes >= self.hands.len() {
            Either::Right(self.finish())
        } else {
            self.advance();
            Either::Left(self)
        }
    }
}
