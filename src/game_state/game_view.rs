use crate::{Board, GameState, Hand, HandLens, Names, Points};
use smallvec::SmallVec;

/// Immutably borrows properties from [`GameState`] which are visible to all players.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    pub bag_len: usize,
    /// The board with every [tile](crate::PlacedTile) played so far.
    pub board: &'a Board,
    /// A vector of names for each player.
    pub names: &'a Names,
    /// A vector of points for each player.
    pub points: &'a Points,
    /// A vector of hand lengths.
    pub hand_lens: HandLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// Whether the next [play](GameState::play) must cover the [center](crate::CENTER).
    pub is_first_move: bool,
    /// The number of turns in a row which were passed.
    pub passes: usize,
}

impl GameState {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`GameState`], but
    /// with `bag` replaced by `bag.len()` and `hands` replaced by the number
    /// of [tiles](crate::Tile) in each hand.
    pub fn game_view(&self) -> GameView<'_> {
        GameView {
            bag_len: self.bag.len(),
            board: &self.board,
            names: &self.names,
            points: &self.points,
            hand_lens: self.hands.iter().map(SmallVec::len).collect(),
            current_player: self.current_player,
            is_first_move: self.is_first_move(),
            passes: self.passes,
        }
    }

    /// # Returns
    ///
    /// A vector of [tiles](crate::Tile) held by the requesting player or `None` if out of bounds.
    pub fn get_hand(&self, index: usize) -> Option<&Hand> {
        self.hands.get(index)
    }
}
