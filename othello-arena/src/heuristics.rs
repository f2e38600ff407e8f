//! One-ply heuristic move choice.
//!
//! Every strategy looks only at the current legal moves and breaks ties
//! uniformly at random, so seeding the generator makes games reproducible.

use crate::agent::{Agent, MoveReply};
use derive_more::{Display, Error};
use itertools::Itertools;
use othello_engine::{Action, Location, Player, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Extra weight an edge move gets over its flip count.
pub const EDGE_BONUS: usize = 3;

/// How a bot ranks legal moves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// Any legal move.
    RandomLegal,
    /// The moves that flip the most stones.
    GreedyFlips,
    /// Corners first; otherwise flips plus a bonus for edge cells.
    CornerEdge,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::CornerEdge
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "unknown strategy (expected random, greedy or corner-edge)")]
pub struct ParseStrategyError;

impl std::str::FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "random-legal" => Ok(Strategy::RandomLegal),
            "greedy" | "greedy-flips" => Ok(Strategy::GreedyFlips),
            "corner-edge" | "corner" | "corneredge" => Ok(Strategy::CornerEdge),
            _ => Err(ParseStrategyError),
        }
    }
}

/// Score used by [`Strategy::CornerEdge`] for non-corner moves.
pub fn corner_edge_score(position: &Position, player: Player, loc: Location) -> usize {
    let bonus = if loc.is_edge() { EDGE_BONUS } else { 0 };
    position.flips(player, loc).len() + bonus
}

/// The moves `strategy` considers equally good, in ascending index order.
pub fn candidates(strategy: Strategy, position: &Position, player: Player) -> Vec<Location> {
    let legal = position.legal_moves(player);
    match strategy {
        Strategy::RandomLegal => legal.collect(),
        Strategy::GreedyFlips => legal.max_set_by_key(|loc| position.flips(player, *loc).len()),
        Strategy::CornerEdge => {
            let corners: Vec<Location> = legal.filter(|loc| loc.is_corner()).collect();
            if !corners.is_empty() {
                return corners;
            }
            legal.max_set_by_key(|loc| corner_edge_score(position, player, *loc))
        }
    }
}

/// Pick a move for `player`, or None when there is no legal move.
pub fn choose_move<R: Rng + ?Sized>(
    strategy: Strategy,
    position: &Position,
    player: Player,
    rng: &mut R,
) -> Option<Location> {
    candidates(strategy, position, player).choose(rng).copied()
}

/// An [`Agent`] that answers immediately using a [`Strategy`].
#[derive(Clone, Debug)]
pub struct BotAgent {
    strategy: Strategy,
    player: Player,
    rng: StdRng,
    name: String,
}

impl BotAgent {
    /// A bot with a fixed seed, for reproducible play.
    pub fn seeded(strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(strategy, StdRng::seed_from_u64(seed))
    }

    /// A bot seeded from the OS.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_rng(strategy, StdRng::from_entropy())
    }

    fn with_rng(strategy: Strategy, rng: StdRng) -> Self {
        Self {
            strategy,
            player: Player::default(),
            rng,
            name: format!("{:?}", strategy),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Agent for BotAgent {
    fn configure(&mut self, player: Player, _position: &Position) {
        self.player = player;
    }

    fn request_move(&mut self, position: &Position, reply: MoveReply) {
        match choose_move(self.strategy, position, self.player, &mut self.rng) {
            Some(loc) => reply.send(Action::MakeMove(loc)),
            None => reply.pass(),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_engine::Board;
    use std::collections::HashMap;

    fn position(board: &str) -> Position {
        Position::from_board(board.parse::<Board>().unwrap())
    }

    fn indices(locs: &[Location]) -> Vec<usize> {
        locs.iter().map(|loc| loc.index()).collect()
    }

    /// Two interior moves for black, each flipping one stone.
    const TWO_WAY_TIE: &str = "
        ........
        ........
        ..XO....
        ........
        ........
        ..XO....
        ........
        ........";

    #[test]
    fn no_moves_means_no_choice() {
        let empty = Position::from_board(Board::new());
        let mut rng = StdRng::seed_from_u64(0);
        for strategy in [Strategy::RandomLegal, Strategy::GreedyFlips, Strategy::CornerEdge] {
            assert_eq!(choose_move(strategy, &empty, Player::Black, &mut rng), None);
        }
    }

    #[test]
    fn random_covers_all_legal_moves() {
        let start = Position::starting();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashMap::new();
        for _ in 0..400 {
            let mv = choose_move(Strategy::RandomLegal, &start, Player::Black, &mut rng).unwrap();
            *seen.entry(mv.index()).or_insert(0) += 1;
        }
        let mut keys: Vec<usize> = seen.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![20, 29, 34, 43]);
    }

    #[test]
    fn greedy_keeps_only_maximal_flips() {
        // E2 flips two stones, E6 flips one.
        let position = position(
            "
            ........
            .XOO....
            ........
            ........
            ........
            ..XO....
            ........
            ........",
        );
        assert_eq!(
            indices(&candidates(Strategy::RandomLegal, &position, Player::Black)),
            vec![12, 44]
        );
        assert_eq!(
            indices(&candidates(Strategy::GreedyFlips, &position, Player::Black)),
            vec![12]
        );
    }

    #[test]
    fn corners_dominate() {
        // A1 is a corner capturing one stone; E4 captures three.
        let position = position(
            "
            .OX.....
            ........
            ........
            XOOO.O..
            ......X.
            ........
            ........
            ........",
        );
        let legal: Vec<usize> = position.legal_moves(Player::Black).map(Location::index).collect();
        assert_eq!(legal, vec![0, 20, 28]);
        assert_eq!(
            indices(&candidates(Strategy::CornerEdge, &position, Player::Black)),
            vec![0]
        );
        assert_eq!(
            indices(&candidates(Strategy::GreedyFlips, &position, Player::Black)),
            vec![28]
        );
    }

    #[test]
    fn edge_bonus_beats_extra_flips() {
        // D1 is an edge move flipping one (score 4); E5 flips three (score 3).
        let position = position(
            "
            ........
            ...O....
            ...X....
            ........
            XOOO....
            ........
            ........
            ........",
        );
        let legal: Vec<usize> = position.legal_moves(Player::Black).map(Location::index).collect();
        assert_eq!(legal, vec![3, 36]);

        let d1 = Location::from_index(3).unwrap();
        let e5 = Location::from_index(36).unwrap();
        assert_eq!(corner_edge_score(&position, Player::Black, d1), 4);
        assert_eq!(corner_edge_score(&position, Player::Black, e5), 3);
        assert_eq!(
            indices(&candidates(Strategy::GreedyFlips, &position, Player::Black)),
            vec![36]
        );
        assert_eq!(
            indices(&candidates(Strategy::CornerEdge, &position, Player::Black)),
            vec![3]
        );
    }

    #[test]
    fn corner_edge_tie_is_uniform() {
        let position = position(TWO_WAY_TIE);
        assert_eq!(
            indices(&candidates(Strategy::CornerEdge, &position, Player::Black)),
            vec![20, 44]
        );

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = HashMap::new();
        for _ in 0..1000 {
            let mv = choose_move(Strategy::CornerEdge, &position, Player::Black, &mut rng).unwrap();
            *counts.entry(mv.index()).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 2);
        let twenty = counts[&20];
        let forty_four = counts[&44];
        assert_eq!(twenty + forty_four, 1000);
        assert!((400..=600).contains(&twenty), "skewed tie-break: {:?}", counts);
    }

    #[test]
    fn same_seed_same_choices() {
        let position = position(TWO_WAY_TIE);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..32)
                .map(|_| choose_move(Strategy::CornerEdge, &position, Player::Black, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn parse_strategy() {
        assert_eq!("greedy".parse::<Strategy>(), Ok(Strategy::GreedyFlips));
        assert_eq!("Corner-Edge".parse::<Strategy>(), Ok(Strategy::CornerEdge));
        assert_eq!("random".parse::<Strategy>(), Ok(Strategy::RandomLegal));
        assert_eq!("minimax".parse::<Strategy>(), Err(ParseStrategyError));
    }
}
