use crate::{
    commit_apply, consume_tiles, fill_hand, score_move, validate, Dictionary, GameState, Move,
    MoveError, ENGLISH_TILE_SET,
};
use tracing::{debug, instrument};

impl GameState {
    /// [Validates](validate()) the [move](Move) for the current player, then places its letters
    /// on the board, removes the [tiles](crate::Tile) used from the current player's hand,
    /// adds the points earned to the current player, refills the current player's hand from
    /// the bag, and advances to the next player.
    ///
    /// A rejected [move](Move) changes nothing and keeps the same current player.
    ///
    /// # Arguments
    ///
    /// * `proposed`: The [move](Move) of the current player.
    /// * `dictionary`: Every word a [move](Move) is allowed to form.
    ///
    /// # Errors
    ///
    /// The first [`MoveError`] found by [`validate()`].
    ///
    /// # Returns
    ///
    /// The points earned by the [move](Move).
    #[instrument(
        level = "debug",
        skip(self, proposed, dictionary),
        fields(player = self.current_player, word = %proposed)
    )]
    pub fn play<D: Dictionary + ?Sized>(
        &mut self,
        proposed: &Move,
        dictionary: &D,
    ) -> Result<usize, MoveError> {
        let trial = match validate(
            &self.board,
            &self.hands[self.current_player],
            proposed,
            dictionary,
            self.is_first_move(),
        ) {
            Ok(trial) => trial,
            Err(error) => {
                debug!(%error, "rejected move");
                return Err(error);
            }
        };

        let before = self.board.clone();
        let hand = &mut self.hands[self.current_player];
        commit_apply(&mut self.board, hand, proposed, trial.allocation());
        consume_tiles(hand, trial.allocation());
        debug_assert_eq!(trial.after(), &self.board);

        let points = score_move(&ENGLISH_TILE_SET, &before, &self.board, proposed);
        self.points[self.current_player] += points;
        let drawn = fill_hand(hand, &mut self.bag);
        self.passes = 0;
        debug!(points, drawn, "accepted move");

        self.advance();
        Ok(points)
    }
}
