//! Running results over a series of matches.

use othello_engine::{Outcome, Player};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MatchStats {
    pub games_played: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub draws: usize,
}

impl MatchStats {
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::Winner(Player::Black) => self.black_wins += 1,
            Outcome::Winner(Player::White) => self.white_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Fraction of games won by `player`; 0 before any game is played.
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::Black => self.black_wins,
            Player::White => self.white_wins,
        };
        wins as f64 / self.games_played as f64
    }
}

impl fmt::Display for MatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Games: {}, P1: {} ({:.1}%), P2: {} ({:.1}%), Draws: {}",
            self.games_played,
            self.black_wins,
            self.win_rate(Player::Black) * 100.0,
            self.white_wins,
            self.win_rate(Player::White) * 100.0,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_outcomes() {
        let mut stats = MatchStats::default();
        assert_eq!(stats.win_rate(Player::Black), 0.0);

        stats.record(Outcome::Winner(Player::Black));
        stats.record(Outcome::Winner(Player::Black));
        stats.record(Outcome::Winner(Player::White));
        stats.record(Outcome::Draw);

        assert_eq!(
            stats,
            MatchStats {
                games_played: 4,
                black_wins: 2,
                white_wins: 1,
                draws: 1,
            }
        );
        assert_eq!(stats.win_rate(Player::Black), 0.5);
        assert_eq!(stats.win_rate(Player::White), 0.25);
        assert_eq!(
            stats.to_string(),
            "Games: 4, P1: 2 (50.0%), P2: 1 (25.0%), Draws: 1"
        );
    }
}
