use crate::{Board, Hands, Names, Points, PLAYER_CAPACITY};
pub use last_view::*;
use smallvec::SmallVec;

mod last_view;
#[cfg(test)]
mod test_setup;

/// Owns the state of a game after it has ended. Created from either
/// [GameState::pass](crate::GameState::pass) or [GameState::finish](crate::GameState::finish).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LastState {
    /// The board with every [tile](crate::PlacedTile) played.
    board: Board,
    /// A vector of names for each player.
    names: Names,
    /// A vector of points for each player.
    points: Points,
    /// A vector of hands, where each hand is a vector of [tiles](crate::Tile).
    hands: Hands,
}

impl LastState {
    /// # Arguments
    ///
    /// * `board`: The board with every [tile](crate::PlacedTile) played.
    /// * `names`: A vector of names for each player.
    /// * `points`: A vector of points for each player.
    /// * `hands`: A vector of hands, where each hand is a vector of [tiles](crate::Tile).
    ///
    /// # Returns
    ///
    /// A [`LastState`] struct with properties owned from arguments.
    pub(crate) fn new(board: Board, names: Names, points: Points, hands: Hands) -> LastState {
        LastState {
            board,
            names,
            points,
            hands,
        }
    }

    /// Points left in hands are not subtracted.
    ///
    /// # Returns
    ///
    /// The indexes of every player with the most points, in turn order.
    pub fn winners(&self) -> SmallVec<[usize; PLAYER_CAPACITY]> {
        let most = self.points.iter().copied().max();
        self.points
            .iter()
            .enumerate()
            .filter(|&(_, &points)| Some(points) == most)
            .map(|(player, _)| player)
            .collect()
    }
}
