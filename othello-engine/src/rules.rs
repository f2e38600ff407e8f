//! The capture rule.
//!
//! A placement is legal when, in at least one of the eight compass directions,
//! the cells next to it form an unbroken run of opponent stones closed off by
//! one of the mover's own stones. Every stone in every such run is flipped.

use crate::bitboard::Bitboard;
use crate::{Board, Cell, Location, Player, NUM_SPACES};
use arrayvec::ArrayVec;

/// Stones captured by a single placement.
pub type FlipList = ArrayVec<Location, NUM_SPACES>;

/// (row step, column step) for N, S, W, E, NW, NE, SW, SE.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Compute the stones `player` would flip by placing at `target`.
/// The move is legal exactly when the returned list is non-empty; an occupied
/// target is never legal.
pub fn evaluate(board: &Board, player: Player, target: Location) -> FlipList {
    let mut flips = FlipList::new();
    if board.at(target) != Cell::Empty {
        return flips;
    }

    let opponent = Cell::Occupied(!player);
    let own = Cell::Occupied(player);

    for (row_step, col_step) in DIRECTIONS {
        // A direction only counts if the first step lands on an opponent stone.
        let mut probe = match target.offset(row_step, col_step) {
            Some(next) if board.at(next) == opponent => next,
            _ => continue,
        };

        let mut run = ArrayVec::<Location, 8>::new();
        loop {
            let cell = board.at(probe);
            if cell == opponent {
                run.push(probe);
            } else {
                if cell == own {
                    flips.extend(run);
                }
                break;
            }

            // Running off the board leaves the run unbracketed.
            match probe.offset(row_step, col_step) {
                Some(next) => probe = next,
                None => break,
            }
        }
    }

    flips
}

/// Whether `player` may place at `target`.
pub fn is_legal(board: &Board, player: Player, target: Location) -> bool {
    has_adjacent_opponent(board, player, target) && !evaluate(board, player, target).is_empty()
}

/// Quick rejection: a legal move always touches at least one opponent stone.
fn has_adjacent_opponent(board: &Board, player: Player, target: Location) -> bool {
    DIRECTIONS.iter().any(|&(row_step, col_step)| {
        target
            .offset(row_step, col_step)
            .map_or(false, |next| board.at(next) == Cell::Occupied(!player))
    })
}

/// The set of legal placements for `player`.
pub fn legal_moves(board: &Board, player: Player) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    for loc in Location::ALL {
        if board.at(loc) == Cell::Empty && is_legal(board, player, loc) {
            moves.insert(loc);
        }
    }
    moves
}
