//! `othello-engine` holds the rules of Othello on an 8x8 board.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] is the raw grid of cells. Its mutators do not check legality,
//!    except for [`Board::apply_move`], which silently ignores illegal moves.
//!  - [`rules`] contains the capture rule: which stones a placement would flip.
//!  - [`Position`] pairs a board with cached legal moves for both players and
//!    keeps the cache in sync with every move. Engines and match runners should
//!    go through this type.

pub mod bitboard;
pub mod rules;
pub mod test_utils;

mod board;
mod cache;
mod game;
mod location;
mod position;
mod utils;

pub use board::*;
pub use cache::*;
pub use game::*;
pub use location::*;
pub use position::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
