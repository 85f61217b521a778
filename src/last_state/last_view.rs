use crate::{Board, Hands, LastState, Names, Points};

/// Immutably borrows properties from [`LastState`].
#[derive(Debug)]
pub struct LastView<'a> {
    /// The board with every [tile](crate::PlacedTile) played.
    pub board: &'a Board,
    /// A vector of names for each player.
    pub names: &'a Names,
    /// A vector of points for each player.
    pub points: &'a Points,
    /// A vector of hands, where each hand is a vector of [tiles](crate::Tile).
    pub hands: &'a Hands,
}

impl LastState {
    /// # Returns
    ///
    /// A new [`LastView`] struct, which immutably borrows properties from [`LastState`].
    #[inline]
    pub fn last_view(&self) -> LastView<'_> {
        LastView {
            board: &self.board,
            names: &self.names,
            points: &self.points,
            hands: &self.hands,
        }
    }
}
