//! Game-level vocabulary: players, actions and final outcomes.

use crate::Location;
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Player {
    /// Player 1, who moves first.
    Black,
    /// Player 2.
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];

    /// The conventional player number: 1 for black, 2 for white.
    pub fn number(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black (P1)"),
            Player::White => write!(f, "White (P2)"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" | "x" | "1" => Ok(Player::Black),
            "white" | "w" | "o" | "2" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action in an Othello game: pass or select a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MakeMove(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(mv: Location) -> Self {
        Self::MakeMove(mv)
    }
}

impl Action {
    /// Decode the index convention used by agent callbacks: -1 passes and
    /// 0..64 selects a cell. Anything else is not an action.
    pub fn from_index(index: i32) -> Option<Self> {
        if index == -1 {
            return Some(Action::Pass);
        }
        let index = usize::try_from(index).ok()?;
        Location::from_index(index).map(Action::MakeMove)
    }

    /// Inverse of [`Action::from_index`].
    pub fn to_index(self) -> i32 {
        match self {
            Action::MakeMove(loc) => loc.index() as i32,
            Action::Pass => -1,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MakeMove(loc) => write!(f, "{}", loc),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// Accepts location notation ("D3") or "pass".
impl std::str::FromStr for Action {
    type Err = crate::ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Action::Pass);
        }
        s.parse().map(Action::MakeMove)
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Decide the game by piece count.
    pub fn from_counts(black: usize, white: usize) -> Self {
        if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        }
    }

    /// The outcome as seen by `player`.
    pub fn result_for(self, player: Player) -> MatchResult {
        match self {
            Outcome::Winner(winner) if winner == player => MatchResult::Win,
            Outcome::Winner(_) => MatchResult::Loss,
            Outcome::Draw => MatchResult::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => f.write_str("Draw"),
        }
    }
}

/// A finished game from one player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// +1 for a win, 0 for a draw, -1 for a loss.
    pub fn value(self) -> i8 {
        match self {
            MatchResult::Win => 1,
            MatchResult::Draw => 0,
            MatchResult::Loss => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_numbers() {
        assert_eq!(Player::Black.number(), 1);
        assert_eq!(Player::White.number(), 2);
        assert_eq!(Player::from_number(2), Some(Player::White));
        assert_eq!(Player::from_number(3), None);
        assert_eq!(!Player::Black, Player::White);
    }

    #[test]
    fn action_index_convention() {
        assert_eq!(Action::from_index(-1), Some(Action::Pass));
        assert_eq!(
            Action::from_index(20),
            Location::from_index(20).map(Action::MakeMove)
        );
        assert_eq!(Action::from_index(64), None);
        assert_eq!(Action::from_index(-2), None);
        assert_eq!(Action::Pass.to_index(), -1);
    }

    #[test]
    fn action_from_str() {
        assert_eq!("pass".parse::<Action>(), Ok(Action::Pass));
        assert_eq!("E3".parse::<Action>(), Ok(Action::from_index(20).unwrap()));
        assert!("Z9".parse::<Action>().is_err());
    }

    #[test]
    fn outcome_by_counts() {
        assert_eq!(Outcome::from_counts(40, 24), Outcome::Winner(Player::Black));
        assert_eq!(Outcome::from_counts(10, 54), Outcome::Winner(Player::White));
        assert_eq!(Outcome::from_counts(32, 32), Outcome::Draw);

        let outcome = Outcome::Winner(Player::White);
        assert_eq!(outcome.result_for(Player::White).value(), 1);
        assert_eq!(outcome.result_for(Player::Black).value(), -1);
        assert_eq!(Outcome::Draw.result_for(Player::Black).value(), 0);
    }
}
