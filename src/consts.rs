use crate::Coordinate;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the board. `15` cells per side.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [is_inside_board](crate::is_inside_board)
pub const BOARD_LEN: usize = 15;
/// The [coordinate](Coordinate) of the center cell which the opening move must cover.
///
/// # See Also
///
/// * [MoveError::MustCoverCenter](crate::MoveError::MustCoverCenter)
pub const CENTER: Coordinate = (7, 7);
/// The number of [tiles](crate::Tile) a hand is filled up to after each accepted move.
/// `7` tiles per hand.
///
/// # See Also
///
/// * [fill_hand](crate::fill_hand)
/// * [`BINGO_BONUS`]
pub const HAND_LEN: usize = 7;
/// The amount of extra points given when a move places [every tile](HAND_LEN) of a full hand.
/// `50` additional points.
///
/// # See Also
///
/// * [score_move](crate::score_move)
pub const BINGO_BONUS: usize = 50;
/// Names, points, and hands stay on the stack for games of up to `PLAYER_CAPACITY` players
/// and spill to the heap beyond that. Read from the `PLAYER_CAPACITY` environment variable at
/// compile time when it parses as a `usize`, otherwise `4`.
///
/// # See Also
///
/// * [GameState](crate::GameState)
/// * [LastState](crate::LastState)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY > 0);
/// The number of letters a single move may spell before its letters are heap allocated.
/// A move longer than the board is still representable but can never be legal.
///
/// # See Also
///
/// * [Move](crate::Move)
pub const WORD_CAPACITY: usize = BOARD_LEN;
