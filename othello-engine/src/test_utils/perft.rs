//! "Perft" move-path count: the number of distinct move sequences of a given
//! length from the opening position. Passes count as a move, and a game that
//! ends early counts as a single path.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Location, Player, Position};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Position::starting(), Player::Black, depth, false)
}

fn leaves_below(position: Position, to_move: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves(to_move);
    if moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(position, !to_move, depth - 1, true);
    }

    moves
        .map(|mv: Location| {
            let mut next = position;
            next.play(to_move, mv);
            leaves_below(next, !to_move, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
