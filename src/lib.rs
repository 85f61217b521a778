//! Concrete structs to represent and protect the state of a word placement game with methods
//! to progress through the turns of the game.
//!
//! ## Summary
//!
//! Players draw [tiles](Tile) from a shared [bag](Bag), place them on a
//! [`BOARD_LEN`] x [`BOARD_LEN`] [board](Board) to spell words found in a [dictionary](Dictionary),
//! and earn points from the letters of every word they form. Squares on the board carry
//! [bonuses](Bonus) which multiply either a letter or a whole word, but only for the turn
//! a [tile](Tile) first covers them. The game is represented by `2` phases: a game in
//! progress is a [`GameState`] and an ended game is a [`LastState`].
//!
//! ## How is the game created?
//!
//! [`GameState::new`] and [`GameState::new_with_rng`] shuffle a bag of the
//! [English tile set](ENGLISH_TILE_SET) and deal [`HAND_LEN`] [tiles](Tile) to every player.
//!
//! ## How is the game advanced?
//!
//! The current player either [plays](GameState::play) a [move](Move) or
//! [passes](GameState::pass). The current player is represented as the index of the player
//! whose turn it is in the range `0`..(the number of players) which either increments or loops
//! back to `0` when necessary.
//!
//! ### How are tiles played?
//!
//! A [move](Move) names an anchor [coordinate](Coordinate), a [direction](Direction), and a word.
//! The [move](Move) is [validated](validate()) against the board, the current player's hand, and the
//! dictionary. The checks run in a fixed order and the first one that fails is returned as a
//! [`MoveError`]. An accepted [move](Move) is placed on the board, the [tiles](Tile) it used
//! are [removed](consume_tiles) from the hand, the points are added to the current player, and the
//! hand is [refilled](fill_hand) from the bag.
//!
//! The opening [move](Move) must cover the [center](CENTER). Every later [move](Move) must touch
//! some [tile](Tile) already on the board.
//!
//! ## How are points calculated?
//!
//! The points of a [move](Move) are the [points of the main word](score_word) plus the points of
//! every word of more than one letter formed across a newly covered square. Letter
//! [bonuses](Bonus) multiply the value of the [tile](Tile) placed on them and word
//! [bonuses](Bonus) multiply the whole word. Playing all [`HAND_LEN`] [tiles](Tile) at once
//! earns an extra [bingo bonus](BINGO_BONUS). [Blanks](Tile::Blank) are worth nothing.
//!
//! ## How is the game viewed?
//!
//! [`GameState::game_view`] and [`LastState::last_view`] give an immutable representation of the
//! game visible to all players. [`GameState::get_hand`] shares private information for each
//! individual player.
//!
//! ## How is the game ended?
//!
//! The game ends when every player has [passed](GameState::pass) in a row or when the game is
//! [finished](GameState::finish) explicitly, for example once it [is exhausted](GameState::is_exhausted).
//! The players with the most points [win](LastState::winners).
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. Each state struct
//! implements methods to get mutable references to their properties, helper methods to add
//! random data to specific properties, and methods to set properties for common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use bonus::*;
pub use consts::*;
pub use coordinate::*;
pub use dictionary::*;
pub use game_state::*;
pub use hand::*;
pub use last_state::*;
pub use moves::*;
pub use play::*;
#[cfg(test)]
pub use random::*;
pub use score::*;
pub use tile::*;
pub use types::*;
pub use validate::*;
pub use words::*;

mod bag;
mod board;
mod bonus;
mod consts;
mod coordinate;
mod dictionary;
mod game_state;
mod hand;
mod last_state;
mod moves;
mod play;
#[cfg(test)]
mod random;
mod score;
mod tile;
mod types;
mod validate;
mod words;
