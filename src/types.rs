use crate::{Coordinate, Letter, Tile, HAND_LEN, PLAYER_CAPACITY, WORD_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;

/// A bimap of [coordinates](Coordinate) newly covered by a [move](crate::Move) to indexes of
/// the [tiles](Tile) in the hand which cover them.
///
/// # See Also
///
/// * [allocate_tiles](crate::allocate_tiles)
/// * [consume_tiles](crate::consume_tiles)
/// * [Trial](crate::Trial)
pub type Allocation = BiBTreeMap<Coordinate, usize>;
/// A vector of [letters](Letter), such as the word spelled by a [move](crate::Move).
///
/// # See Also
///
/// * [Move](crate::Move)
/// * [MoveError::InsufficientTiles](crate::MoveError::InsufficientTiles)
pub type Letters = SmallVec<[Letter; WORD_CAPACITY]>;
/// A vector of [tiles](Tile) for one player.
///
/// # See Also
///
/// * [`Tile`]
/// * [`HAND_LEN`]
/// * [`Hands`]
/// * [GameState::get_hand](crate::GameState::get_hand)
pub type Hand = SmallVec<[Tile; HAND_LEN]>;
/// A vector of hands for each player, where each hand is
/// a vector of [tiles](Tile).
///
/// # See Also
///
/// * [`Hand`]
/// * [`PLAYER_CAPACITY`]
/// * [GameState](crate::GameState)
/// * [LastView](crate::LastView)
pub type Hands = SmallVec<[Hand; PLAYER_CAPACITY]>;
/// A vector of hand lengths.
///
/// # See Also
///
/// * [`Hands`]
/// * [GameView](crate::GameView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [`PLAYER_CAPACITY`]
/// * [GameState](crate::GameState)
/// * [GameView](crate::GameView)
/// * [LastState](crate::LastState)
/// * [LastView](crate::LastView)
pub type Points = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of names for each player.
///
/// # See Also
///
/// * [`PLAYER_CAPACITY`]
/// * [GameState::new](crate::GameState::new)
pub type Names = SmallVec<[String; PLAYER_CAPACITY]>;
